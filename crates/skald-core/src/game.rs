//! Game variant tags used to scope tables, assets, and rolls.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A concrete game variant.
///
/// Tables and assets carry an `Option<Game>`; `None` marks content as
/// universal, visible under any filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Game {
    /// Ironsworn.
    Ironsworn,
    /// Ironsworn: Starforged.
    Starforged,
}

impl Game {
    /// Parse a game tag from user input.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "ironsworn" | "is" => Some(Self::Ironsworn),
            "starforged" | "sf" => Some(Self::Starforged),
            _ => None,
        }
    }

    /// Display name for this game.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ironsworn => "Ironsworn",
            Self::Starforged => "Starforged",
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Display label for an optional game tag; universal content reads "any".
pub fn game_label(game: Option<Game>) -> &'static str {
    match game {
        Some(g) => g.name(),
        None => "any",
    }
}

/// Whether content tagged `tag` is visible under `filter`.
///
/// A `None` filter sees everything, and untagged (universal) content is
/// visible to every filter.
pub fn game_matches(tag: Option<Game>, filter: Option<Game>) -> bool {
    match (tag, filter) {
        (_, None) | (None, _) => true,
        (Some(t), Some(f)) => t == f,
    }
}
