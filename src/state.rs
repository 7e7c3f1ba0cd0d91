use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::dashboard::DashboardView;
use crate::data::cache::load_cached;
use crate::data::error::DataError;
use crate::data::filter::GenderFilter;
use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Why nothing but a message is shown.
#[derive(Debug, Clone, PartialEq)]
pub enum Halt {
    /// The dataset could not be loaded; the session is over.
    LoadFailed {
        path: PathBuf,
        message: String,
        missing_file: bool,
    },
    /// The current selection has no rows.
    NoData,
}

/// The full session state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None when loading failed).
    pub dataset: Option<Arc<Dataset>>,

    /// Current radio selection.
    pub filter: GenderFilter,

    /// View for the current selection (None when halted).
    pub view: Option<DashboardView>,

    /// Set when there is nothing to render but a message.
    pub halt: Option<Halt>,
}

impl AppState {
    /// Load the dataset from `path` through the process-wide cache and build
    /// the initial `General` view.
    pub fn load(path: &Path) -> Self {
        match load_cached(path) {
            Ok(dataset) => Self::with_dataset(dataset),
            Err(e) => {
                log::error!("Failed to load {}: {e}", path.display());
                Self::failed(path, &e)
            }
        }
    }

    pub fn with_dataset(dataset: Arc<Dataset>) -> Self {
        let mut state = Self {
            dataset: Some(dataset),
            filter: GenderFilter::default(),
            view: None,
            halt: None,
        };
        state.refresh();
        state
    }

    fn failed(path: &Path, error: &DataError) -> Self {
        Self {
            dataset: None,
            filter: GenderFilter::default(),
            view: None,
            halt: Some(Halt::LoadFailed {
                path: path.to_path_buf(),
                message: error.to_string(),
                missing_file: matches!(error, DataError::FileNotFound { .. }),
            }),
        }
    }

    /// Change the selection; recomputes only when it actually changed.
    pub fn set_filter(&mut self, filter: GenderFilter) {
        if filter != self.filter {
            self.filter = filter;
            self.refresh();
        }
    }

    /// Recompute the view for the current selection.
    pub fn refresh(&mut self) {
        let Some(dataset) = &self.dataset else {
            return;
        };
        let filtered = self.filter.apply(dataset);
        log::debug!("Filter '{}' selected {} rows", self.filter, filtered.len());

        match DashboardView::build(&filtered) {
            Ok(view) => {
                self.view = Some(view);
                self.halt = None;
            }
            Err(e) => {
                log::warn!("{e}");
                self.view = None;
                self.halt = Some(Halt::NoData);
            }
        }
    }

    /// Rows in the dataset and rows in the current view.
    pub fn counts(&self) -> Option<(usize, usize)> {
        let total = self.dataset.as_ref()?.len();
        let visible = self.view.as_ref().map_or(0, |v| v.row_count);
        Some((total, visible))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::record;

    fn female_only() -> Arc<Dataset> {
        Arc::new(Dataset::from_records(vec![
            record("female", 70.0, 80.0, 75.0),
            record("female", 60.0, 60.0, 60.0),
        ]))
    }

    #[test]
    fn starts_on_general() {
        let state = AppState::with_dataset(female_only());
        assert_eq!(state.filter, GenderFilter::General);
        assert!(state.halt.is_none());
        assert_eq!(state.counts(), Some((2, 2)));
    }

    #[test]
    fn empty_selection_halts_and_recovers() {
        let mut state = AppState::with_dataset(female_only());
        state.set_filter(GenderFilter::Male);
        assert_eq!(state.halt, Some(Halt::NoData));
        assert!(state.view.is_none());

        state.set_filter(GenderFilter::Female);
        assert!(state.halt.is_none());
        assert_eq!(state.view.as_ref().map(|v| v.row_count), Some(2));
    }

    #[test]
    fn missing_file_halts_the_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("StudentsPerformance.csv");
        let mut state = AppState::load(&path);
        assert!(state.dataset.is_none());
        match &state.halt {
            Some(Halt::LoadFailed { missing_file, path: p, .. }) => {
                assert!(*missing_file);
                assert_eq!(p, &path);
            }
            other => panic!("unexpected halt: {other:?}"),
        }

        state.set_filter(GenderFilter::Female);
        assert!(state.view.is_none());
        assert!(matches!(state.halt, Some(Halt::LoadFailed { .. })));
    }
}
