//! Derived tables produced by the aggregations.
//!
//! Each row type is a plain value; tables are `Vec`s of rows in a
//! deterministic order.

use serde::{Deserialize, Serialize};

/// Number of cards of one type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeCount {
    pub tipo: String,
    pub conteo: u64,
}

/// Mean mana cost of one card type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeAverage {
    pub tipo: String,
    pub coste_mana: f64,
}

/// Number of cards of one type within one deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckTypeCount {
    pub deck: String,
    pub tipo: String,
    pub conteo: u64,
}

/// Mean mana cost of one deck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckAverage {
    pub deck: String,
    pub coste_mana: f64,
}

/// Pearson correlation between two numeric columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Correlation {
    pub column_a: String,
    pub column_b: String,
    /// Coefficient in `[-1, 1]`.
    pub coefficient: f64,
    /// Rows where both values were present.
    pub observations: usize,
}

impl Correlation {
    /// Coefficient rounded for display, e.g. `0.87`.
    pub fn display(&self) -> String {
        format!("{:.2}", self.coefficient)
    }
}

/// Descriptive statistics of one numeric column.
///
/// Statistics are NaN when the column has no values; `std` is NaN with fewer
/// than two values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSummary {
    pub column: String,
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

impl ColumnSummary {
    /// Row labels of the describe table, in order.
    pub const STATISTICS: [&'static str; 8] =
        ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

    /// Values in the order of [`ColumnSummary::STATISTICS`].
    pub fn values(&self) -> [f64; 8] {
        [
            self.count as f64,
            self.mean,
            self.std,
            self.min,
            self.q25,
            self.median,
            self.q75,
            self.max,
        ]
    }
}
