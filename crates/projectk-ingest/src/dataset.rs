//! The shared, immutable card dataset.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use polars::prelude::*;
use tracing::{debug, info, warn};

use projectk_model::columns::{CATEGORICAL_COLUMNS, DECK, NUMERIC_COLUMNS, REQUIRED_COLUMNS};
use projectk_model::is_known_deck;

use crate::csv::read_csv_frame;
use crate::error::{IngestError, Result};
use crate::values::numeric_column_names;

/// Handle to the loaded card table.
///
/// Cloning is cheap and every clone shares the same frame. The frame is never
/// mutated after construction; aggregations build new frames from it.
#[derive(Debug, Clone)]
pub struct Dataset {
    frame: Arc<DataFrame>,
    source: Option<PathBuf>,
}

impl Dataset {
    /// Enforces the column contract on an in-memory frame.
    ///
    /// `Deck` and `Tipo` become string columns. `Coste Maná` and `Might` are
    /// cast strictly to `Float64`, so text that does not parse as a number is
    /// rejected while empty cells stay null. NaN is stored as null, so every
    /// aggregation skips it.
    pub fn from_frame(mut frame: DataFrame) -> Result<Self> {
        for column in REQUIRED_COLUMNS {
            if frame.column(column).is_err() {
                return Err(IngestError::MissingColumn {
                    column: column.to_string(),
                });
            }
        }

        for column in CATEGORICAL_COLUMNS {
            let normalized = frame.column(column)?.cast(&DataType::String)?;
            frame.with_column(normalized)?;
        }

        for column in NUMERIC_COLUMNS {
            let normalized = frame
                .column(column)?
                .strict_cast(&DataType::Float64)
                .map_err(|e| IngestError::NonNumericColumn {
                    column: column.to_string(),
                    message: e.to_string(),
                })?;
            let values: Vec<Option<f64>> = normalized
                .f64()?
                .iter()
                .map(|value| value.filter(|v| !v.is_nan()))
                .collect();
            frame.with_column(Column::new(column.into(), values))?;
        }

        Ok(Self {
            frame: Arc::new(frame),
            source: None,
        })
    }

    fn with_source(mut self, path: &Path) -> Self {
        self.source = Some(path.to_path_buf());
        self
    }

    /// The underlying frame.
    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    /// Path the dataset was read from, if it came from a file.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Number of cards.
    pub fn height(&self) -> usize {
        self.frame.height()
    }

    pub fn is_empty(&self) -> bool {
        self.frame.height() == 0
    }

    /// Column names in file order.
    pub fn column_names(&self) -> Vec<String> {
        self.frame
            .get_column_names()
            .into_iter()
            .map(|name| name.to_string())
            .collect()
    }

    /// Names of the integer and float columns, in file order.
    pub fn numeric_columns(&self) -> Vec<String> {
        numeric_column_names(&self.frame)
    }

    /// Distinct deck names in order of first appearance.
    pub fn decks(&self) -> Vec<String> {
        let Ok(column) = self.frame.column(DECK) else {
            return Vec::new();
        };
        let Ok(values) = column.str() else {
            return Vec::new();
        };
        let mut seen = BTreeSet::new();
        let mut decks = Vec::new();
        for value in values.into_iter().flatten() {
            if seen.insert(value) {
                decks.push(value.to_string());
            }
        }
        decks
    }

    /// Returns true if at least one card belongs to `deck`.
    pub fn contains_deck(&self, deck: &str) -> bool {
        self.decks().iter().any(|name| name == deck)
    }
}

/// Loads the card dataset from a CSV file.
///
/// # Errors
///
/// Fails if the file is missing, unreadable, not UTF-8, not valid CSV, lacks
/// one of the required columns, or has non-numeric cost/might values.
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let start = Instant::now();
    let frame = read_csv_frame(path)?;
    let dataset = Dataset::from_frame(frame)?.with_source(path);

    let decks = dataset.decks();
    for deck in decks.iter().filter(|deck| !is_known_deck(deck)) {
        warn!(deck = %deck, "deck has no colour assigned");
    }
    if dataset.is_empty() {
        warn!(path = %path.display(), "dataset has no rows");
    }
    debug!(columns = ?dataset.column_names(), "dataset columns");
    info!(
        path = %path.display(),
        rows = dataset.height(),
        decks = decks.len(),
        duration_ms = start.elapsed().as_millis(),
        "dataset loaded"
    );
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(costs: Vec<&str>) -> DataFrame {
        let height = costs.len();
        DataFrame::new(vec![
            Column::new(DECK.into(), vec!["Jinx"; height]),
            Column::new("Tipo".into(), vec!["Unit"; height]),
            Column::new("Coste Maná".into(), costs),
            Column::new("Might".into(), vec![1i64; height]),
        ])
        .unwrap()
    }

    #[test]
    fn numeric_strings_are_cast_to_float() {
        let dataset = Dataset::from_frame(frame(vec!["1", "2.5"])).unwrap();
        let dtype = dataset.frame().column("Coste Maná").unwrap().dtype().clone();
        assert_eq!(dtype, DataType::Float64);
        assert_eq!(
            dataset.frame().column("Might").unwrap().dtype(),
            &DataType::Float64
        );
    }

    #[test]
    fn nan_is_stored_as_null() {
        let mut df = frame(vec!["1", "2"]);
        df.with_column(Column::new("Coste Maná".into(), vec![1.0, f64::NAN]))
            .unwrap();
        let dataset = Dataset::from_frame(df).unwrap();
        let costs = dataset.frame().column("Coste Maná").unwrap();
        assert_eq!(costs.null_count(), 1);
        assert_eq!(costs.f64().unwrap().get(0), Some(1.0));
    }

    #[test]
    fn text_in_numeric_column_is_rejected() {
        let err = Dataset::from_frame(frame(vec!["1", "mucho"])).unwrap_err();
        assert!(matches!(err, IngestError::NonNumericColumn { ref column, .. } if column == "Coste Maná"));
    }

    #[test]
    fn missing_column_is_reported() {
        let df = DataFrame::new(vec![Column::new(DECK.into(), vec!["Jinx"])]).unwrap();
        let err = Dataset::from_frame(df).unwrap_err();
        assert!(matches!(err, IngestError::MissingColumn { ref column } if column == "Tipo"));
    }

    #[test]
    fn clones_share_the_frame() {
        let dataset = Dataset::from_frame(frame(vec!["1"])).unwrap();
        let clone = dataset.clone();
        assert!(Arc::ptr_eq(&dataset.frame, &clone.frame));
    }
}
