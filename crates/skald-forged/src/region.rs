//! The three regions of the Forge.

use serde::{Deserialize, Serialize};

/// Where in the Forge an entity sits. Some oracle tables are scoped to a
/// region (settlement population, for one).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpaceRegion {
    /// The settled inner region.
    Terminus,
    /// The sparsely charted middle region.
    Outlands,
    /// The deep unknown.
    Expanse,
}

impl SpaceRegion {
    /// Parse a region from user input.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "terminus" => Some(Self::Terminus),
            "outlands" => Some(Self::Outlands),
            "expanse" => Some(Self::Expanse),
            _ => None,
        }
    }

    /// Canonical display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Terminus => "Terminus",
            Self::Outlands => "Outlands",
            Self::Expanse => "Expanse",
        }
    }
}

impl std::fmt::Display for SpaceRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
