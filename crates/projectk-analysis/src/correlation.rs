//! Pearson correlation between two numeric columns.

use polars::prelude::DataFrame;
use tracing::debug;

use projectk_model::Correlation;

use crate::error::{AnalysisError, Result};
use crate::frame::numeric_values;

/// Correlation coefficient between `column_a` and `column_b` over the rows
/// where both values are present.
///
/// The result is symmetric in its arguments and lies in `[-1, 1]`.
///
/// # Errors
///
/// `InsufficientData` with fewer than two complete rows, `ZeroVariance` when
/// either column is constant over those rows.
pub fn correlation(frame: &DataFrame, column_a: &str, column_b: &str) -> Result<Correlation> {
    let a = numeric_values(frame, column_a)?;
    let b = numeric_values(frame, column_b)?;
    let pairs: Vec<(f64, f64)> = a
        .into_iter()
        .zip(b)
        .filter_map(|pair| match pair {
            (Some(x), Some(y)) if !x.is_nan() && !y.is_nan() => Some((x, y)),
            _ => None,
        })
        .collect();

    let coefficient = pearson(&pairs, column_a, column_b)?;
    debug!(
        column_a,
        column_b,
        observations = pairs.len(),
        coefficient,
        "correlation"
    );
    Ok(Correlation {
        column_a: column_a.to_string(),
        column_b: column_b.to_string(),
        coefficient,
        observations: pairs.len(),
    })
}

fn pearson(pairs: &[(f64, f64)], column_a: &str, column_b: &str) -> Result<f64> {
    if pairs.len() < 2 {
        return Err(AnalysisError::InsufficientData {
            observations: pairs.len(),
        });
    }
    if is_constant(pairs.iter().map(|(x, _)| *x)) {
        return Err(AnalysisError::ZeroVariance {
            column: column_a.to_string(),
        });
    }
    if is_constant(pairs.iter().map(|(_, y)| *y)) {
        return Err(AnalysisError::ZeroVariance {
            column: column_b.to_string(),
        });
    }
    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;

    let mut sxx = 0.0;
    let mut syy = 0.0;
    let mut sxy = 0.0;
    for (x, y) in pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        sxx += dx * dx;
        syy += dy * dy;
        sxy += dx * dy;
    }

    Ok((sxy / (sxx.sqrt() * syy.sqrt())).clamp(-1.0, 1.0))
}

/// Every value equals the first. Compared exactly, since the centred sum of
/// squares of a repeated non-representable value such as 0.1 is not zero.
fn is_constant(mut values: impl Iterator<Item = f64>) -> bool {
    match values.next() {
        Some(first) => values.all(|value| value == first),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_positive() {
        let pairs = [(1.0, 2.0), (2.0, 4.0), (3.0, 6.0)];
        let r = pearson(&pairs, "a", "b").unwrap();
        assert!((r - 1.0).abs() < 1e-12);
    }

    #[test]
    fn perfect_negative() {
        let pairs = [(1.0, 3.0), (2.0, 2.0), (3.0, 1.0)];
        let r = pearson(&pairs, "a", "b").unwrap();
        assert!((r + 1.0).abs() < 1e-12);
    }

    #[test]
    fn single_pair_is_insufficient() {
        let err = pearson(&[(1.0, 1.0)], "a", "b").unwrap_err();
        assert_eq!(err, AnalysisError::InsufficientData { observations: 1 });
    }

    #[test]
    fn constant_column_has_zero_variance() {
        let pairs = [(1.0, 5.0), (2.0, 5.0), (3.0, 5.0)];
        let err = pearson(&pairs, "a", "b").unwrap_err();
        assert_eq!(
            err,
            AnalysisError::ZeroVariance {
                column: "b".to_string()
            }
        );
        assert!(err.is_undefined_correlation());
    }

    #[test]
    fn repeated_inexact_value_has_zero_variance() {
        let pairs = [(0.1, 1.0), (0.1, 2.0), (0.1, 4.0)];
        let err = pearson(&pairs, "a", "b").unwrap_err();
        assert_eq!(
            err,
            AnalysisError::ZeroVariance {
                column: "a".to_string()
            }
        );
    }
}
