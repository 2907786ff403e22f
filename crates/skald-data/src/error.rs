//! Error types for data loading.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias using [`DataError`].
pub type DataResult<T> = Result<T, DataError>;

/// Errors that can occur while loading table or asset files.
#[derive(Debug, Error)]
pub enum DataError {
    /// A file or directory could not be read.
    #[error("failed to read data: {0}")]
    Io(#[from] std::io::Error),

    /// A file is not valid JSON for its expected shape.
    #[error("{}: {source}", path.display())]
    Parse {
        /// The offending file.
        path: PathBuf,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// An entry definition is structurally wrong.
    #[error("table \"{table}\": {detail}")]
    BadEntry {
        /// Name of the table holding the entry.
        table: String,
        /// What is wrong with it.
        detail: String,
    },
}
