//! Error types for the oracle engine.

use thiserror::Error;

/// Result type for oracle operations.
pub type OracleResult<T> = Result<T, OracleError>;

/// Errors that can occur while resolving an oracle reference.
#[derive(Debug, Error)]
pub enum OracleError {
    /// No table matches the requested name or alias.
    #[error("unknown oracle table: {0}")]
    UnknownTable(String),

    /// The name matches tables in more than one game and no filter was given.
    #[error("table \"{name}\" exists in more than one game ({}); pick one", .games.join(", "))]
    AmbiguousTable {
        /// The requested table name.
        name: String,
        /// Labels of every distinct game the name matched.
        games: Vec<String>,
    },

    /// The reference expression could not be parsed, or a repeat had no
    /// table to apply to.
    #[error("invalid table reference: {0}")]
    InvalidReference(String),

    /// A roll landed on no entry; the table does not cover its own die.
    #[error("table \"{table}\" has no entry for roll {roll}")]
    EntryLookupFailed {
        /// The table whose lookup came up empty.
        table: String,
        /// The roll no entry claimed.
        roll: u32,
    },

    /// Chained or nested expansion went deeper than the configured limit.
    #[error("oracle chain exceeded the depth limit of {0}")]
    RecursionLimitExceeded(u32),
}
