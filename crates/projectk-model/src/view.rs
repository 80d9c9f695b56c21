//! Navigation options.
//!
//! The explorer has exactly five views. Parsing is the only place an unknown
//! option can appear; everything downstream matches on [`View`] exhaustively.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// One of the five navigation options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    /// Landing page with the project description and image.
    #[default]
    Home,
    /// Raw dataset and numeric summary.
    Explore,
    /// Type distribution and average cost for a single deck.
    PerDeck,
    /// Type counts and average cost across decks.
    Compare,
    /// Mana cost against might.
    Correlate,
}

impl View {
    /// All views, in navigation order.
    pub const ALL: [View; 5] = [
        View::Home,
        View::Explore,
        View::PerDeck,
        View::Compare,
        View::Correlate,
    ];

    /// Returns the navigation label shown to users.
    pub fn label(&self) -> &'static str {
        match self {
            View::Home => "Inicio",
            View::Explore => "Explorar Datos",
            View::PerDeck => "Gráficas por Mazo",
            View::Compare => "Comparaciones",
            View::Correlate => "Correlaciones",
        }
    }

    /// Returns the command-line identifier.
    pub fn slug(&self) -> &'static str {
        match self {
            View::Home => "home",
            View::Explore => "explore",
            View::PerDeck => "per-deck",
            View::Compare => "compare",
            View::Correlate => "correlate",
        }
    }

    /// Returns true if the view needs a deck selection.
    pub fn needs_deck(&self) -> bool {
        matches!(self, View::PerDeck)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for View {
    type Err = ModelError;

    /// Accepts either the navigation label or the slug, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        View::ALL
            .into_iter()
            .find(|view| {
                view.slug().eq_ignore_ascii_case(trimmed)
                    || view.label().to_lowercase() == trimmed.to_lowercase()
            })
            .ok_or_else(|| ModelError::UnknownView {
                value: trimmed.to_string(),
            })
    }
}

/// The user's current choice: a view and, for [`View::PerDeck`], a deck.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Selection {
    pub view: View,
    /// Selected deck. `None` picks the first deck of the dataset.
    pub deck: Option<String>,
}

impl Selection {
    pub fn new(view: View) -> Self {
        Self { view, deck: None }
    }

    #[must_use]
    pub fn with_deck(mut self, deck: impl Into<String>) -> Self {
        self.deck = Some(deck.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_slugs_and_labels() {
        assert_eq!("per-deck".parse::<View>().unwrap(), View::PerDeck);
        assert_eq!("Gráficas por Mazo".parse::<View>().unwrap(), View::PerDeck);
        assert_eq!("  CORRELACIONES ".parse::<View>().unwrap(), View::Correlate);
        assert_eq!("Inicio".parse::<View>().unwrap(), View::Home);
    }

    #[test]
    fn rejects_unknown_option() {
        let err = "Estadísticas".parse::<View>().unwrap_err();
        assert_eq!(err.to_string(), "unknown navigation option: Estadísticas");
    }

    #[test]
    fn default_is_home() {
        assert_eq!(View::default(), View::Home);
        assert_eq!(Selection::default().view, View::Home);
    }

    #[test]
    fn only_per_deck_needs_a_deck() {
        let needing: Vec<View> = View::ALL.into_iter().filter(View::needs_deck).collect();
        assert_eq!(needing, vec![View::PerDeck]);
    }
}
