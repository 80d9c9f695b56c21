//! Project K deck data model.
//!
//! Shared vocabulary for the explorer crates: dataset column names, the deck
//! colour map, the navigation views, the derived tables and the render
//! requests a view produces.

pub mod columns;
pub mod deck;
pub mod error;
pub mod page;
pub mod tables;
pub mod view;

pub use deck::{ColorPolicy, DECK_COLORS, DeckColor, deck_color, is_known_deck};
pub use error::{ModelError, Result};
pub use page::{Bar, BarChart, BarMode, Block, DataTable, Page, ScatterChart, ScatterPoint};
pub use tables::{
    ColumnSummary, Correlation, DeckAverage, DeckTypeCount, TypeAverage, TypeCount,
};
pub use view::{Selection, View};
