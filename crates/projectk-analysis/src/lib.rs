//! Aggregations and view dispatch for the Project K explorer.
//!
//! This crate holds the testable core of the explorer:
//!
//! - **filter**: cards of a single deck
//! - **aggregate**: type counts and mean mana cost, per deck or across decks
//! - **correlation**: Pearson coefficient between two numeric columns
//! - **describe**: summary statistics of the numeric columns
//! - **dispatch**: the page each navigation option renders
//!
//! Everything here is pure over an immutable [`projectk_ingest::Dataset`].

pub mod aggregate;
pub mod correlation;
pub mod describe;
pub mod dispatch;
pub mod error;
pub mod filter;
mod frame;
mod palette;
pub mod preview;

pub use aggregate::{avg_cost_by_deck, avg_cost_by_type, type_count, type_count_by_deck};
pub use correlation::correlation;
pub use describe::describe;
pub use dispatch::{CORRELATION_LABEL, DispatchOptions, HOME_IMAGE, dispatch};
pub use error::{AnalysisError, Result};
pub use filter::filter_by_deck;
pub use frame::numeric_values;
pub use palette::Palette;
pub use preview::data_table;
