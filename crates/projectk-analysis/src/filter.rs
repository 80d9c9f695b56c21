//! Deck filter.

use polars::prelude::*;
use tracing::debug;

use projectk_ingest::Dataset;
use projectk_model::columns::DECK;

use crate::error::Result;

/// Returns the cards of one deck.
///
/// A deck that is not in the dataset yields an empty frame with the same
/// columns, not an error.
pub fn filter_by_deck(dataset: &Dataset, deck: &str) -> Result<DataFrame> {
    let subset = dataset
        .frame()
        .clone()
        .lazy()
        .filter(col(DECK).eq(lit(deck)))
        .collect()?;
    debug!(deck, rows = subset.height(), "filtered deck");
    Ok(subset)
}
