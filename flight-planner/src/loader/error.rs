//! Loader error types.

use std::path::PathBuf;

use crate::domain::DomainError;

/// Errors that can occur when loading a flight schedule.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The schedule file could not be opened
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV, or a value of the wrong type
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The header is not exactly the expected column list
    #[error("illegal columns: expected {expected}, found {found}")]
    IllegalColumns { expected: String, found: String },

    /// A row parsed but describes an impossible flight
    #[error("row {row}: {source}")]
    InvalidRow {
        row: usize,
        #[source]
        source: DomainError,
    },
}
