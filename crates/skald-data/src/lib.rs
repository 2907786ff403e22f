//! Table and asset data loading for Skald.
//!
//! JSON is the authoring format: one array of table definitions per file,
//! with a reserved `assets.json` for asset cards. This crate parses the
//! authoring shapes, converts them into engine types, and verifies that
//! loaded tables can answer every roll.

/// The JSON authoring shapes and their conversion to engine types.
pub mod def;
/// Error types used throughout the crate.
pub mod error;
/// Loading files and directories.
pub mod load;
/// Validation of loaded tables.
pub mod verify;

/// Re-export the authoring shapes.
pub use def::{EntryDef, SubTableDef, TableDef};
/// Re-export error types.
pub use error::{DataError, DataResult};
/// Re-export the loaders.
pub use load::{ASSET_FILE, load_assets, load_dir, load_tables};
/// Re-export validation.
pub use verify::{DataIssue, verify};
