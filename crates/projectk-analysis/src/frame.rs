//! Column access helpers shared by the aggregations.

use polars::prelude::*;

use projectk_ingest::is_numeric_dtype;

use crate::error::{AnalysisError, Result};

/// Fails with `ColumnNotFound` unless the frame has `column`.
pub fn require_column(frame: &DataFrame, column: &str) -> Result<()> {
    if frame.column(column).is_err() {
        return Err(AnalysisError::ColumnNotFound {
            column: column.to_string(),
        });
    }
    Ok(())
}

/// Values of a numeric column as floats, nulls preserved.
pub fn numeric_values(frame: &DataFrame, column: &str) -> Result<Vec<Option<f64>>> {
    let source = frame
        .column(column)
        .map_err(|_| AnalysisError::ColumnNotFound {
            column: column.to_string(),
        })?;
    if !is_numeric_dtype(source.dtype()) {
        return Err(AnalysisError::NonNumericColumn {
            column: column.to_string(),
            dtype: source.dtype().to_string(),
        });
    }
    let floats = source.cast(&DataType::Float64)?;
    Ok(floats.f64()?.into_iter().collect())
}

/// Values of a string column, nulls preserved.
pub fn string_values(frame: &DataFrame, column: &str) -> Result<Vec<Option<String>>> {
    let source = frame
        .column(column)
        .map_err(|_| AnalysisError::ColumnNotFound {
            column: column.to_string(),
        })?;
    let strings = source.cast(&DataType::String)?;
    Ok(strings
        .str()?
        .into_iter()
        .map(|value| value.map(str::to_string))
        .collect())
}
