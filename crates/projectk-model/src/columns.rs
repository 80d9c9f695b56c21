//! Column names of the card dataset and of the derived tables.
//!
//! The dataset headers are Spanish and are matched exactly, accents included.

/// Deck the card belongs to.
pub const DECK: &str = "Deck";

/// Card type within a deck (Unit, Spell, Gear, ...).
pub const TIPO: &str = "Tipo";

/// Mana cost of the card.
pub const COSTE_MANA: &str = "Coste Maná";

/// Strength of the card.
pub const MIGHT: &str = "Might";

/// Count column produced by the count aggregations.
pub const CONTEO: &str = "Conteo";

/// Columns every dataset must provide.
pub const REQUIRED_COLUMNS: [&str; 4] = [DECK, TIPO, COSTE_MANA, MIGHT];

/// Categorical columns, normalised to strings on load.
pub const CATEGORICAL_COLUMNS: [&str; 2] = [DECK, TIPO];

/// Numeric columns, normalised to floats on load.
pub const NUMERIC_COLUMNS: [&str; 2] = [COSTE_MANA, MIGHT];
