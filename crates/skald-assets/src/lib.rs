//! Asset cards for Skald: the card model of the companion game systems.
//!
//! A card carries abilities, fill-in fields, and at most one track of
//! each kind. This crate is plain data plus mutation methods; rendering
//! and persistence live elsewhere.

/// The card type with abilities and input fields.
pub mod asset;
/// Card collection with name and free-text lookup.
pub mod library;
/// Counter, meter, and toggle tracks.
pub mod track;

/// Re-export the card types.
pub use asset::{Ability, Asset, InputField};
/// Re-export the library.
pub use library::AssetLibrary;
/// Re-export the track types.
pub use track::{Counter, Meter, ToggleField, ToggleTrack};
