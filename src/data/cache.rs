use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use super::error::DataError;
use super::loader::load_file;
use super::model::Dataset;

/// Memo table of loaded datasets, keyed by path.
///
/// A path is read at most once; later lookups share the same `Arc`. Failed
/// loads are not remembered.
#[derive(Debug, Default)]
pub struct DatasetCache {
    entries: HashMap<PathBuf, Arc<Dataset>>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached dataset for `path`, loading it with [`load_file`] on
    /// first use.
    pub fn get_or_load(&mut self, path: &Path) -> Result<Arc<Dataset>, DataError> {
        self.get_or_load_with(path, load_file)
    }

    /// Same as [`get_or_load`](Self::get_or_load) with a custom loader.
    pub fn get_or_load_with<F>(&mut self, path: &Path, load: F) -> Result<Arc<Dataset>, DataError>
    where
        F: FnOnce(&Path) -> Result<Dataset, DataError>,
    {
        if let Some(ds) = self.entries.get(path) {
            log::debug!("Dataset cache hit for {}", path.display());
            return Ok(Arc::clone(ds));
        }
        let ds = Arc::new(load(path)?);
        self.entries.insert(path.to_path_buf(), Arc::clone(&ds));
        Ok(ds)
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Process-wide cache
// ---------------------------------------------------------------------------

static DATASETS: OnceLock<Mutex<DatasetCache>> = OnceLock::new();

/// Load `path` through the process-wide cache. Lives until process exit.
pub fn load_cached(path: &Path) -> Result<Arc<Dataset>, DataError> {
    let cache = DATASETS.get_or_init(|| Mutex::new(DatasetCache::new()));
    let mut guard = cache.lock().unwrap_or_else(PoisonError::into_inner);
    guard.get_or_load(path)
}
