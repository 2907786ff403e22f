//! Oracle table data model.

use serde::{Deserialize, Serialize};

use crate::game::Game;

/// How an entry claims rolls on its table's die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RollWindow {
    /// An inclusive span of rolls.
    Range {
        /// Lowest matching roll.
        min: u32,
        /// Highest matching roll.
        max: u32,
    },
    /// A cumulative ceiling: claims every roll at or below it that no
    /// earlier entry has claimed. The d100 weighted-list form.
    Ceiling(u32),
}

impl RollWindow {
    /// Whether this window claims `roll` on its own. Ceiling windows also
    /// depend on declaration order; see [`crate::lookup`].
    pub fn contains(&self, roll: u32) -> bool {
        match *self {
            Self::Range { min, max } => roll >= min && roll <= max,
            Self::Ceiling(limit) => roll <= limit,
        }
    }
}

/// One outcome in an oracle table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OracleEntry {
    /// The rolls this entry claims.
    pub window: RollWindow,
    /// Outcome text. A full-text bracketed expression (for example
    /// `"[Action/Theme]"`) chains into further rolls when selected.
    pub description: String,
    /// Secondary table rolled on its own die whenever this entry comes up.
    pub table: Option<OracleTable>,
}

impl OracleEntry {
    /// Entry claiming an inclusive roll span.
    pub fn range(min: u32, max: u32, description: impl Into<String>) -> Self {
        Self {
            window: RollWindow::Range { min, max },
            description: description.into(),
            table: None,
        }
    }

    /// Entry claiming every unclaimed roll up to `limit`.
    pub fn ceiling(limit: u32, description: impl Into<String>) -> Self {
        Self {
            window: RollWindow::Ceiling(limit),
            description: description.into(),
            table: None,
        }
    }

    /// Attach a nested table.
    pub fn with_table(mut self, table: OracleTable) -> Self {
        self.table = Some(table);
        self
    }
}

/// A named, game-scoped table of weighted outcomes.
///
/// Built once at load time and never mutated afterwards. Nested tables
/// attached to entries may leave `name` empty; their rolls are reported
/// without a table name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OracleTable {
    /// Primary name. Empty for an anonymous nested table.
    pub name: String,
    /// Alternate names matched case-insensitively alongside `name`.
    pub aliases: Vec<String>,
    /// Game this table belongs to; `None` is universal.
    pub game: Option<Game>,
    /// Die size: rolls are drawn uniformly from `[1, die]`.
    pub die: u32,
    /// Outcomes in declared order.
    pub entries: Vec<OracleEntry>,
}

impl OracleTable {
    /// New table with no aliases, game tag, or entries.
    pub fn new(name: impl Into<String>, die: u32) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
            game: None,
            die,
            entries: Vec::new(),
        }
    }

    /// Tag the table with a game.
    pub fn with_game(mut self, game: Game) -> Self {
        self.game = Some(game);
        self
    }

    /// Add an alias.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Add an entry after the existing ones.
    pub fn with_entry(mut self, entry: OracleEntry) -> Self {
        self.entries.push(entry);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_window_is_inclusive() {
        let w = RollWindow::Range { min: 3, max: 5 };
        assert!(!w.contains(2));
        assert!(w.contains(3));
        assert!(w.contains(5));
        assert!(!w.contains(6));
    }

    #[test]
    fn ceiling_window_claims_everything_below() {
        let w = RollWindow::Ceiling(15);
        assert!(w.contains(1));
        assert!(w.contains(15));
        assert!(!w.contains(16));
    }

    #[test]
    fn builders_compose() {
        let table = OracleTable::new("Action", 6)
            .with_game(Game::Ironsworn)
            .with_alias("act")
            .with_entry(OracleEntry::range(1, 3, "Strike"))
            .with_entry(OracleEntry::range(4, 6, "Withdraw"));
        assert_eq!(table.name, "Action");
        assert_eq!(table.aliases, vec!["act"]);
        assert_eq!(table.game, Some(Game::Ironsworn));
        assert_eq!(table.entries.len(), 2);
    }

    #[test]
    fn nested_table_attaches_to_entry() {
        let nested = OracleTable::new("", 4).with_entry(OracleEntry::ceiling(4, "Echo"));
        let entry = OracleEntry::range(1, 1, "Omen").with_table(nested);
        assert_eq!(entry.table.as_ref().map(|t| t.die), Some(4));
    }
}
