//! Registry of loaded oracle tables.

use std::collections::HashMap;

use crate::game::{Game, game_matches};
use crate::table::OracleTable;

/// Owns every loaded oracle table, indexed for case-insensitive lookup by
/// name or alias.
///
/// Tables are inserted at load time and only read afterwards. Lookups never
/// fail: an unmatched name yields an empty candidate list and the caller
/// decides what that means.
#[derive(Debug, Clone, Default)]
pub struct TableRegistry {
    tables: Vec<OracleTable>,

    // Lowercased name/alias -> indexes into `tables`, in insertion order.
    by_name_lower: HashMap<String, Vec<usize>>,
}

impl TableRegistry {
    /// New empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a table, indexing its name and every alias.
    pub fn insert(&mut self, table: OracleTable) {
        let idx = self.tables.len();
        let keys = std::iter::once(&table.name).chain(table.aliases.iter());
        for key in keys {
            let ids = self.by_name_lower.entry(key.to_lowercase()).or_default();
            // A table whose alias repeats its name still indexes once per key.
            if ids.last() != Some(&idx) {
                ids.push(idx);
            }
        }
        self.tables.push(table);
    }

    /// Every table whose name or an alias matches `name` case-insensitively,
    /// restricted by `filter` (universal tables pass every filter), in
    /// insertion order.
    pub fn find_candidates(&self, name: &str, filter: Option<Game>) -> Vec<&OracleTable> {
        let Some(ids) = self.by_name_lower.get(&name.to_lowercase()) else {
            return Vec::new();
        };
        ids.iter()
            .map(|&i| &self.tables[i])
            .filter(|t| game_matches(t.game, filter))
            .collect()
    }

    /// All tables in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &OracleTable> {
        self.tables.iter()
    }

    /// Number of loaded tables.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Whether the registry holds no tables.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
