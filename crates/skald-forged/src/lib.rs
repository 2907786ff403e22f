//! Starforged generators for Skald: settlements and planets.
//!
//! Generators draw from named oracle tables through a roller scoped to
//! Starforged. They own their entity models; rendering lives in the
//! frontend.

mod draw;

/// Error types used throughout the crate.
pub mod error;
/// Planet generation and staged reveals.
pub mod planet;
/// The regions of the Forge.
pub mod region;
/// Settlement generation and staged reveals.
pub mod settlement;

/// Re-export error types.
pub use error::{ForgedError, ForgedResult};
/// Re-export the planet model.
pub use planet::{MAX_CLOSER_LOOKS, Planet};
/// Re-export the region tag.
pub use region::SpaceRegion;
/// Re-export the settlement model.
pub use settlement::Settlement;
