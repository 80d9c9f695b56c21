//! Load-once cache keyed by source path.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use tracing::debug;

use crate::dataset::{Dataset, load_dataset};
use crate::error::Result;

/// Remembers every dataset it has loaded.
///
/// Entries are never invalidated; the source file is assumed not to change
/// for the lifetime of the process.
#[derive(Debug, Default)]
pub struct DatasetCache {
    entries: Mutex<HashMap<PathBuf, Dataset>>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached dataset for `path`, loading it on first use.
    ///
    /// Failed loads are not cached.
    pub fn get_or_load(&self, path: &Path) -> Result<Dataset> {
        let key = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(dataset) = entries.get(&key) {
            debug!(path = %key.display(), "dataset cache hit");
            return Ok(dataset.clone());
        }
        let dataset = load_dataset(path)?;
        entries.insert(key, dataset.clone());
        Ok(dataset)
    }

    /// Number of cached datasets.
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
