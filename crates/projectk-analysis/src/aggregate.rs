//! Group-by aggregations.
//!
//! Every function reads a frame (the whole dataset or a deck subset) and
//! returns typed rows sorted by their keys. Rows with a null key are left
//! out, and only groups that occur in the data are emitted.

use polars::lazy::dsl::len;
use polars::prelude::*;
use tracing::debug;

use projectk_model::columns::{CONTEO, COSTE_MANA, DECK, TIPO};
use projectk_model::{DeckAverage, DeckTypeCount, TypeAverage, TypeCount};

use crate::error::Result;
use crate::frame::require_column;

fn count_expr() -> Expr {
    len().cast(DataType::UInt64).alias(CONTEO)
}

fn mean_cost_expr() -> Expr {
    col(COSTE_MANA).cast(DataType::Float64).mean().alias(COSTE_MANA)
}

fn grouped(frame: &DataFrame, keys: &[&str], aggs: [Expr; 1]) -> Result<DataFrame> {
    let key_exprs: Vec<Expr> = keys.iter().map(|key| col(*key)).collect();
    let present = keys
        .iter()
        .map(|key| col(*key).is_not_null())
        .reduce(|acc, next| acc.and(next))
        .unwrap_or_else(|| lit(true));
    let out = frame
        .clone()
        .lazy()
        .filter(present)
        .group_by(key_exprs.clone())
        .agg(aggs)
        .sort_by_exprs(key_exprs, SortMultipleOptions::default())
        .collect()?;
    Ok(out)
}

/// Number of cards per `Tipo`, ascending by type.
///
/// The counts add up to the number of rows with a type.
pub fn type_count(subset: &DataFrame) -> Result<Vec<TypeCount>> {
    require_column(subset, TIPO)?;
    let out = grouped(subset, &[TIPO], [count_expr()])?;
    let tipos = out.column(TIPO)?.str()?;
    let counts = out.column(CONTEO)?.u64()?;
    let rows: Vec<TypeCount> = tipos
        .into_iter()
        .zip(counts)
        .filter_map(|(tipo, conteo)| {
            Some(TypeCount {
                tipo: tipo?.to_string(),
                conteo: conteo?,
            })
        })
        .collect();
    debug!(groups = rows.len(), "type count");
    Ok(rows)
}

/// Mean `Coste Maná` per `Tipo`, ascending by type.
///
/// A type whose costs are all missing averages to NaN.
pub fn avg_cost_by_type(subset: &DataFrame) -> Result<Vec<TypeAverage>> {
    require_column(subset, TIPO)?;
    require_column(subset, COSTE_MANA)?;
    let out = grouped(subset, &[TIPO], [mean_cost_expr()])?;
    let tipos = out.column(TIPO)?.str()?;
    let means = out.column(COSTE_MANA)?.f64()?;
    let rows: Vec<TypeAverage> = tipos
        .into_iter()
        .zip(means)
        .filter_map(|(tipo, mean)| {
            Some(TypeAverage {
                tipo: tipo?.to_string(),
                coste_mana: mean.unwrap_or(f64::NAN),
            })
        })
        .collect();
    debug!(groups = rows.len(), "average cost by type");
    Ok(rows)
}

/// Number of cards per (`Deck`, `Tipo`) pair, sorted by deck then type.
pub fn type_count_by_deck(frame: &DataFrame) -> Result<Vec<DeckTypeCount>> {
    require_column(frame, DECK)?;
    require_column(frame, TIPO)?;
    let out = grouped(frame, &[DECK, TIPO], [count_expr()])?;
    let decks = out.column(DECK)?.str()?;
    let tipos = out.column(TIPO)?.str()?;
    let counts = out.column(CONTEO)?.u64()?;
    let rows: Vec<DeckTypeCount> = decks
        .into_iter()
        .zip(tipos)
        .zip(counts)
        .filter_map(|((deck, tipo), conteo)| {
            Some(DeckTypeCount {
                deck: deck?.to_string(),
                tipo: tipo?.to_string(),
                conteo: conteo?,
            })
        })
        .collect();
    debug!(groups = rows.len(), "type count by deck");
    Ok(rows)
}

/// Mean `Coste Maná` per `Deck`, sorted by deck.
pub fn avg_cost_by_deck(frame: &DataFrame) -> Result<Vec<DeckAverage>> {
    require_column(frame, DECK)?;
    require_column(frame, COSTE_MANA)?;
    let out = grouped(frame, &[DECK], [mean_cost_expr()])?;
    let decks = out.column(DECK)?.str()?;
    let means = out.column(COSTE_MANA)?.f64()?;
    let rows: Vec<DeckAverage> = decks
        .into_iter()
        .zip(means)
        .filter_map(|(deck, mean)| {
            Some(DeckAverage {
                deck: deck?.to_string(),
                coste_mana: mean.unwrap_or(f64::NAN),
            })
        })
        .collect();
    debug!(groups = rows.len(), "average cost by deck");
    Ok(rows)
}
