//! Stringified preview of the raw dataset.

use polars::prelude::DataFrame;

use projectk_ingest::any_to_string;
use projectk_model::DataTable;

use crate::error::Result;

/// Up to `limit` rows of the frame as display strings. Nulls become empty
/// cells.
pub fn data_table(frame: &DataFrame, limit: usize) -> Result<DataTable> {
    let columns: Vec<String> = frame
        .get_column_names()
        .into_iter()
        .map(|name| name.to_string())
        .collect();
    let shown = frame.height().min(limit);
    let mut rows = Vec::with_capacity(shown);
    for row_idx in 0..shown {
        let mut row = Vec::with_capacity(columns.len());
        for column in frame.get_columns() {
            row.push(any_to_string(column.get(row_idx)?));
        }
        rows.push(row);
    }
    Ok(DataTable {
        columns,
        rows,
        total_rows: frame.height(),
    })
}
