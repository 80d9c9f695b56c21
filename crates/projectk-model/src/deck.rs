//! Deck colour map.
//!
//! The four Project K decks each have a fixed display colour. Decks outside
//! this closed set have no colour; what happens then is decided by
//! [`ColorPolicy`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Display colour of a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeckColor {
    Purple,
    Blue,
    Orange,
    Green,
}

impl DeckColor {
    /// Returns the colour name used by chart renderers.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeckColor::Purple => "purple",
            DeckColor::Blue => "blue",
            DeckColor::Orange => "orange",
            DeckColor::Green => "green",
        }
    }

    /// Returns the colour as an RGB triple.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            DeckColor::Purple => (128, 0, 128),
            DeckColor::Blue => (0, 0, 255),
            DeckColor::Orange => (255, 165, 0),
            DeckColor::Green => (0, 128, 0),
        }
    }
}

impl fmt::Display for DeckColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Deck name to colour, in display order.
pub static DECK_COLORS: [(&str, DeckColor); 4] = [
    ("Jinx", DeckColor::Purple),
    ("Viktor", DeckColor::Blue),
    ("Volibear", DeckColor::Orange),
    ("Yasuo", DeckColor::Green),
];

/// Looks up the colour of a deck by exact name.
pub fn deck_color(deck: &str) -> Option<DeckColor> {
    DECK_COLORS
        .iter()
        .find(|(name, _)| *name == deck)
        .map(|(_, color)| *color)
}

/// Returns true if the deck has an entry in the colour map.
pub fn is_known_deck(deck: &str) -> bool {
    deck_color(deck).is_some()
}

/// What to do when a deck has no colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorPolicy {
    /// Render the deck without a colour and log a warning.
    #[default]
    Fallback,
    /// Treat the deck as a configuration error for the affected chart.
    Strict,
}
