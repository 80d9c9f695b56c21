//! Summary statistics of the numeric columns.

use polars::prelude::*;

use projectk_ingest::numeric_column_names;
use projectk_model::ColumnSummary;

use crate::error::Result;

const QUARTILES: [(&str, f64); 3] = [("q25", 0.25), ("median", 0.5), ("q75", 0.75)];

/// Count, mean, sample standard deviation, min, quartiles and max of every
/// numeric column, in column order.
///
/// Nulls and NaN are skipped. Quartiles interpolate linearly between the two
/// nearest ranks.
pub fn describe(frame: &DataFrame) -> Result<Vec<ColumnSummary>> {
    numeric_column_names(frame)
        .into_iter()
        .map(|name| summarize(frame, name))
        .collect()
}

fn summarize(frame: &DataFrame, column: String) -> Result<ColumnSummary> {
    let floats = col(column.as_str()).cast(DataType::Float64);
    let values = floats.clone().filter(floats.is_not_nan());

    let mut exprs = vec![
        values.clone().count().cast(DataType::UInt64).alias("count"),
        values.clone().mean().alias("mean"),
        values.clone().std(1).alias("std"),
        values.clone().min().alias("min"),
        values.clone().max().alias("max"),
    ];
    for (alias, q) in QUARTILES {
        exprs.push(
            values
                .clone()
                .quantile(lit(q), QuantileMethod::Linear)
                .alias(alias),
        );
    }

    let stats = frame.clone().lazy().select(exprs).collect()?;
    let stat = |name: &str| -> Result<f64> {
        Ok(stats.column(name)?.f64()?.get(0).unwrap_or(f64::NAN))
    };
    let count = stats.column("count")?.u64()?.get(0).unwrap_or(0);

    Ok(ColumnSummary {
        column,
        count: count as usize,
        mean: stat("mean")?,
        std: stat("std")?,
        min: stat("min")?,
        q25: stat("q25")?,
        median: stat("median")?,
        q75: stat("q75")?,
        max: stat("max")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(values: Vec<Option<f64>>) -> DataFrame {
        let height = values.len();
        DataFrame::new(vec![
            Column::new("Deck".into(), vec!["Jinx"; height]),
            Column::new("Coste Maná".into(), values),
        ])
        .unwrap()
    }

    fn single(values: Vec<Option<f64>>) -> ColumnSummary {
        let mut summaries = describe(&frame(values)).unwrap();
        assert_eq!(summaries.len(), 1);
        summaries.remove(0)
    }

    #[test]
    fn summary_of_four_values() {
        let summary = single(vec![Some(4.0), Some(1.0), Some(3.0), Some(2.0)]);
        assert_eq!(summary.column, "Coste Maná");
        assert_eq!(summary.count, 4);
        assert!((summary.mean - 2.5).abs() < 1e-12);
        assert!((summary.std - 1.290_994_448_735_805_6).abs() < 1e-12);
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.max, 4.0);
    }

    #[test]
    fn quartiles_interpolate() {
        let summary = single(vec![Some(1.0), Some(2.0), Some(3.0), Some(4.0)]);
        assert!((summary.q25 - 1.75).abs() < 1e-12);
        assert!((summary.median - 2.5).abs() < 1e-12);
        assert!((summary.q75 - 3.25).abs() < 1e-12);
    }

    #[test]
    fn nulls_and_nan_are_skipped() {
        let summary = single(vec![Some(2.0), None, Some(f64::NAN), Some(4.0)]);
        assert_eq!(summary.count, 2);
        assert!((summary.mean - 3.0).abs() < 1e-12);
        assert_eq!(summary.max, 4.0);
    }

    #[test]
    fn single_value_has_no_spread() {
        let summary = single(vec![Some(7.0)]);
        assert_eq!(summary.count, 1);
        assert_eq!(summary.median, 7.0);
        assert!(summary.std.is_nan());
    }

    #[test]
    fn empty_column_is_all_nan() {
        let summary = single(vec![None, None]);
        assert_eq!(summary.count, 0);
        assert!(summary.mean.is_nan());
        assert!(summary.max.is_nan());
    }
}
