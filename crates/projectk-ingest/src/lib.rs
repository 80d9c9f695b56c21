//! Project K dataset ingestion.
//!
//! This crate loads the card CSV into a Polars DataFrame, enforces the column
//! contract the aggregations rely on, and hands out an immutable, cheaply
//! cloned [`Dataset`] handle.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use projectk_ingest::{DatasetCache, load_dataset};
//!
//! let dataset = load_dataset(Path::new("demodecks.csv"))?;
//! println!("{} cards in {} decks", dataset.height(), dataset.decks().len());
//!
//! // Repeated loads of the same path share one table.
//! let cache = DatasetCache::new();
//! let first = cache.get_or_load(Path::new("demodecks.csv"))?;
//! let again = cache.get_or_load(Path::new("demodecks.csv"))?;
//! ```

mod cache;
mod csv;
mod dataset;
mod error;
mod values;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{
    MAX_CSV_FILE_SIZE, MISSING_VALUE_MARKERS, check_file_size, check_file_size_with_limit,
    read_csv_frame, validate_encoding,
};

// === Dataset ===
pub use cache::DatasetCache;
pub use dataset::{Dataset, load_dataset};

// === Value Helpers ===
pub use values::{any_to_string, format_numeric, is_numeric_dtype, numeric_column_names};
