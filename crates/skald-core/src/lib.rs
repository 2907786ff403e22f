//! Core oracle model for Skald: tables, references, and the resolution
//! engine.
//!
//! This crate defines the table registry and the roller that resolve
//! narrative prompts into rolled results. It is independent of any data
//! format or frontend — you can build a [`TableRegistry`] programmatically
//! or deserialize tables from JSON.

/// Error types used throughout the crate.
pub mod error;
/// Game tags and game-filter matching.
pub mod game;
/// Entry lookup and table coverage checks.
pub mod lookup;
/// Parsing of table references (`name`, `[a/b]`, `[Nx]`).
pub mod reference;
/// Case-insensitive table registry with alias support.
pub mod registry;
/// The resolution engine that turns references into rolled results.
pub mod roller;
/// Oracle tables, entries, and roll windows.
pub mod table;

/// Re-export error types.
pub use error::{OracleError, OracleResult};
/// Re-export game tags.
pub use game::Game;
/// Re-export reference parsing.
pub use reference::{ReferenceExpr, parse_reference};
/// Re-export the registry.
pub use registry::TableRegistry;
/// Re-export the resolution engine.
pub use roller::{DEFAULT_DEPTH_LIMIT, OracleRoller, RollResult};
/// Re-export table types.
pub use table::{OracleEntry, OracleTable, RollWindow};
