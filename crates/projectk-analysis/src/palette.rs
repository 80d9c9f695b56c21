//! Colour lookup for charts.

use std::collections::BTreeSet;

use tracing::warn;

use projectk_model::{ColorPolicy, DeckColor, deck_color};

use crate::error::{AnalysisError, Result};

/// Resolves deck colours under a [`ColorPolicy`], warning once per unknown
/// deck.
#[derive(Debug)]
pub struct Palette {
    policy: ColorPolicy,
    warned: BTreeSet<String>,
}

impl Palette {
    pub fn new(policy: ColorPolicy) -> Self {
        Self {
            policy,
            warned: BTreeSet::new(),
        }
    }

    /// Colour of `deck`. Unknown decks are `None` under
    /// [`ColorPolicy::Fallback`] and an error under [`ColorPolicy::Strict`].
    pub fn color(&mut self, deck: &str) -> Result<Option<DeckColor>> {
        if let Some(color) = deck_color(deck) {
            return Ok(Some(color));
        }
        match self.policy {
            ColorPolicy::Fallback => {
                if self.warned.insert(deck.to_string()) {
                    warn!(deck, "deck has no colour, rendering without one");
                }
                Ok(None)
            }
            ColorPolicy::Strict => Err(AnalysisError::UnknownDeckColor {
                deck: deck.to_string(),
            }),
        }
    }
}
