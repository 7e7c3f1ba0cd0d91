use std::path::PathBuf;

use thiserror::Error;

use super::filter::GenderFilter;

/// Everything that can go wrong between the CSV on disk and a rendered view.
#[derive(Debug, Error)]
pub enum DataError {
    /// The input file does not exist. Fatal for the session.
    #[error("file not found: '{}'", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("reading '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing CSV '{}': {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("CSV is missing required column '{column}'")]
    MissingColumn { column: &'static str },

    #[error("row {row}, column '{column}': '{value}' is not a number")]
    InvalidScore {
        row: usize,
        column: &'static str,
        value: String,
    },

    /// The current filter selected zero rows.
    #[error("no data found for filter '{filter}'")]
    EmptyView { filter: GenderFilter },
}
