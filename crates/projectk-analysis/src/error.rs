//! Error types for aggregations and dispatch.

use thiserror::Error;

/// Errors raised while building a derived table.
///
/// None of these abort a page: the dispatcher turns them into a notice for
/// the section that failed.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnalysisError {
    /// Deck outside the colour map while colours are strict.
    #[error("deck '{deck}' has no colour assigned")]
    UnknownDeckColor { deck: String },

    /// Fewer than two rows with both values present.
    #[error("correlation undefined: {observations} complete rows, at least 2 required")]
    InsufficientData { observations: usize },

    /// Every present value of the column is identical.
    #[error("correlation undefined: column '{column}' has zero variance")]
    ZeroVariance { column: String },

    #[error("column '{column}' not found")]
    ColumnNotFound { column: String },

    #[error("column '{column}' is not numeric ({dtype})")]
    NonNumericColumn { column: String, dtype: String },

    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl AnalysisError {
    /// Returns true if the error means the coefficient does not exist for
    /// the data, as opposed to a malformed request.
    pub fn is_undefined_correlation(&self) -> bool {
        matches!(
            self,
            AnalysisError::InsufficientData { .. } | AnalysisError::ZeroVariance { .. }
        )
    }
}

impl From<polars::prelude::PolarsError> for AnalysisError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
