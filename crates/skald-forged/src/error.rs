//! Error types for the generators.

use thiserror::Error;

use skald_core::OracleError;

/// Result alias using [`ForgedError`].
pub type ForgedResult<T> = Result<T, ForgedError>;

/// Errors that can occur while generating Starforged entities.
#[derive(Debug, Error)]
pub enum ForgedError {
    /// An oracle draw failed (unknown table, uncovered roll, ...).
    #[error("{0}")]
    Oracle(#[from] OracleError),

    /// A draw succeeded but produced no result.
    #[error("oracle \"{0}\" produced no result")]
    EmptyDraw(String),

    /// Every closer look at this entity has already been revealed.
    #[error("every closer look at {0} has been revealed")]
    FullyRevealed(String),
}
