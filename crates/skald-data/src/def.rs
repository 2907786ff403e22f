//! Serde shapes for the JSON authoring format.
//!
//! A data file holds one array of table definitions. An entry gives its
//! roll window either as `min`+`max` or as a cumulative `chance` ceiling;
//! mixing the two, or giving neither, is rejected at load time.

use serde::Deserialize;
use skald_core::{Game, OracleEntry, OracleTable, RollWindow};

use crate::error::{DataError, DataResult};

/// One table as authored in JSON.
#[derive(Debug, Clone, Deserialize)]
pub struct TableDef {
    /// Table name.
    pub name: String,
    /// Alternate names, default empty.
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Game tag; absent means the table belongs to every game.
    #[serde(default)]
    pub game: Option<Game>,
    /// Die size.
    pub die: u32,
    /// Entries in declared order.
    #[serde(default)]
    pub entries: Vec<EntryDef>,
}

impl TableDef {
    /// Convert into the engine's table type, validating entry shapes.
    pub fn into_table(self) -> DataResult<OracleTable> {
        let name = self.name;
        let mut table = OracleTable::new(name.clone(), self.die);
        if let Some(game) = self.game {
            table = table.with_game(game);
        }
        for alias in self.aliases {
            table = table.with_alias(alias);
        }
        for entry in self.entries {
            table = table.with_entry(entry.into_entry(&name)?);
        }
        Ok(table)
    }
}

/// One entry as authored in JSON.
#[derive(Debug, Clone, Deserialize)]
pub struct EntryDef {
    /// Lower bound of a roll range.
    #[serde(default)]
    pub min: Option<u32>,
    /// Upper bound of a roll range.
    #[serde(default)]
    pub max: Option<u32>,
    /// Cumulative ceiling, for chance-style tables.
    #[serde(default)]
    pub chance: Option<u32>,
    /// Outcome text.
    pub text: String,
    /// Anonymous nested table rolled whenever this entry comes up.
    #[serde(default)]
    pub table: Option<SubTableDef>,
}

impl EntryDef {
    fn into_entry(self, table: &str) -> DataResult<OracleEntry> {
        let window = match (self.min, self.max, self.chance) {
            (Some(min), Some(max), None) => RollWindow::Range { min, max },
            (None, None, Some(chance)) => RollWindow::Ceiling(chance),
            (None, None, None) => {
                return Err(bad_entry(table, &self.text, "has neither a roll range nor a chance"));
            }
            (Some(_), None, None) | (None, Some(_), None) => {
                return Err(bad_entry(table, &self.text, "has half a roll range"));
            }
            (_, _, Some(_)) => {
                return Err(bad_entry(table, &self.text, "mixes a roll range with a chance"));
            }
        };
        let mut entry = OracleEntry {
            window,
            description: self.text,
            table: None,
        };
        if let Some(sub) = self.table {
            entry = entry.with_table(sub.into_table(table)?);
        }
        Ok(entry)
    }
}

/// An anonymous nested table: entries plus a die, nothing inherited from
/// the parent.
#[derive(Debug, Clone, Deserialize)]
pub struct SubTableDef {
    /// Die size, default 100.
    #[serde(default = "default_die")]
    pub die: u32,
    /// Entries in declared order.
    pub entries: Vec<EntryDef>,
}

impl SubTableDef {
    fn into_table(self, parent: &str) -> DataResult<OracleTable> {
        let mut table = OracleTable::new("", self.die);
        for entry in self.entries {
            table = table.with_entry(entry.into_entry(parent)?);
        }
        Ok(table)
    }
}

fn default_die() -> u32 {
    100
}

fn bad_entry(table: &str, text: &str, problem: &str) -> DataError {
    DataError::BadEntry {
        table: table.to_string(),
        detail: format!("entry \"{text}\" {problem}"),
    }
}

#[cfg(test)]
mod tests {
    use skald_core::Game;

    use super::*;

    fn parse_one(json: &str) -> TableDef {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn range_and_chance_entries_convert() {
        let def = parse_one(
            r#"{
                "name": "Pay the Price",
                "aliases": ["ptp"],
                "game": "ironsworn",
                "die": 100,
                "entries": [
                    { "min": 1, "max": 2, "text": "Roll twice more" },
                    { "chance": 100, "text": "It is worse than you feared" }
                ]
            }"#,
        );
        let table = def.into_table().unwrap();
        assert_eq!(table.name, "Pay the Price");
        assert_eq!(table.aliases, vec!["ptp"]);
        assert_eq!(table.game, Some(Game::Ironsworn));
        assert_eq!(table.entries[0].window, RollWindow::Range { min: 1, max: 2 });
        assert_eq!(table.entries[1].window, RollWindow::Ceiling(100));
    }

    #[test]
    fn game_and_aliases_default_to_empty() {
        let def = parse_one(r#"{ "name": "Omen", "die": 6 }"#);
        let table = def.into_table().unwrap();
        assert_eq!(table.game, None);
        assert!(table.aliases.is_empty());
        assert!(table.entries.is_empty());
    }

    #[test]
    fn nested_table_defaults_to_d100() {
        let def = parse_one(
            r#"{
                "name": "Relic",
                "die": 1,
                "entries": [
                    {
                        "min": 1, "max": 1, "text": "An old relic",
                        "table": { "entries": [ { "chance": 100, "text": "humming" } ] }
                    }
                ]
            }"#,
        );
        let table = def.into_table().unwrap();
        let nested = table.entries[0].table.as_ref().unwrap();
        assert_eq!(nested.die, 100);
        assert_eq!(nested.name, "");
    }

    #[test]
    fn entry_must_pick_range_or_chance() {
        let def = parse_one(
            r#"{
                "name": "Bad",
                "die": 6,
                "entries": [ { "min": 1, "max": 2, "chance": 3, "text": "both" } ]
            }"#,
        );
        let err = def.into_table().unwrap_err();
        assert!(matches!(err, DataError::BadEntry { table, .. } if table == "Bad"));
    }

    #[test]
    fn entry_without_a_window_is_rejected() {
        let def = parse_one(
            r#"{ "name": "Bad", "die": 6, "entries": [ { "text": "nothing" } ] }"#,
        );
        assert!(def.into_table().is_err());
    }

    #[test]
    fn half_a_range_is_rejected() {
        let def = parse_one(
            r#"{ "name": "Bad", "die": 6, "entries": [ { "min": 1, "text": "half" } ] }"#,
        );
        let err = def.into_table().unwrap_err();
        assert!(matches!(
            err,
            DataError::BadEntry { detail, .. } if detail.contains("half a roll range")
        ));
    }

    #[test]
    fn nested_entry_errors_name_the_parent_table() {
        let def = parse_one(
            r#"{
                "name": "Relic",
                "die": 1,
                "entries": [
                    {
                        "min": 1, "max": 1, "text": "An old relic",
                        "table": { "entries": [ { "text": "windowless" } ] }
                    }
                ]
            }"#,
        );
        let err = def.into_table().unwrap_err();
        assert!(matches!(err, DataError::BadEntry { table, .. } if table == "Relic"));
    }
}
