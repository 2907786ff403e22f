//! The resolution engine: turns a table reference into rolled results.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::error::{OracleError, OracleResult};
use crate::game::{Game, game_label};
use crate::lookup;
use crate::reference::{ReferenceExpr, parse_reference};
use crate::registry::TableRegistry;
use crate::table::{OracleEntry, OracleTable};

/// Default ceiling on chained/nested expansion depth.
pub const DEFAULT_DEPTH_LIMIT: u32 = 10;

/// One rolled outcome in a resolution sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollResult {
    /// The rolled value, in `[1, die]` of the rolled table.
    pub roll: u32,
    /// Name of the rolled table; `None` for a data-driven nested roll,
    /// which has no named table context.
    pub table_name: Option<String>,
    /// Game tag of the rolled table.
    pub game: Option<Game>,
    /// The entry the roll landed on.
    pub entry: OracleEntry,
    /// 0 for tables named in the request; +1 per chain or nest level.
    pub depth: u32,
}

impl RollResult {
    /// The outcome text.
    pub fn text(&self) -> &str {
        &self.entry.description
    }
}

/// Per-request resolution engine.
///
/// A roller borrows the registry and carries the caller's game filter,
/// depth limit, and continuation context. It holds no roll state of its
/// own: the result sequence lives inside one [`OracleRoller::resolve`]
/// call, so independent requests never observe each other.
#[derive(Debug, Clone)]
pub struct OracleRoller<'a> {
    registry: &'a TableRegistry,
    game: Option<Game>,
    depth_limit: u32,
    continuation: Option<String>,
}

impl<'a> OracleRoller<'a> {
    /// Roller over `registry` with no game filter.
    pub fn new(registry: &'a TableRegistry) -> Self {
        Self {
            registry,
            game: None,
            depth_limit: DEFAULT_DEPTH_LIMIT,
            continuation: None,
        }
    }

    /// Restrict name matching to one game. Universal tables still match,
    /// and a filtered lookup never reports ambiguity.
    pub fn with_game(mut self, game: Option<Game>) -> Self {
        self.game = game;
        self
    }

    /// Cap expansion depth (default [`DEFAULT_DEPTH_LIMIT`]).
    pub fn with_depth_limit(mut self, limit: u32) -> Self {
        self.depth_limit = limit;
        self
    }

    /// Name the table the caller's previous request resolved. A bare `[Nx]`
    /// request re-rolls that table; without it such a request is invalid.
    pub fn with_continuation(mut self, table: impl Into<String>) -> Self {
        self.continuation = Some(table.into());
        self
    }

    /// Resolve one request into an ordered, depth-annotated result
    /// sequence.
    ///
    /// Tables named in the request land at depth 0; every chained
    /// reference, nested table, or repeat draw lands one level below its
    /// trigger. The call fails as a whole: an unknown table, ambiguous
    /// name, malformed reference, uncovered roll, or exceeded depth limit
    /// returns the error and no partial sequence.
    pub fn resolve(&self, request: &str, rng: &mut StdRng) -> OracleResult<Vec<RollResult>> {
        let expr = parse_reference(request)?;
        let mut results = Vec::new();
        match &expr {
            // A top-level repeat applies to the continuation table and its
            // draws land one level below it.
            ReferenceExpr::Repeat { table, .. } => {
                let context = match (table, &self.continuation) {
                    (None, Some(name)) => Some(self.single_candidate(name)?),
                    _ => None,
                };
                self.resolve_expr(&expr, 1, context, &mut results, rng)?;
            }
            _ => self.resolve_expr(&expr, 0, None, &mut results, rng)?,
        }
        Ok(results)
    }

    // Results land at `depth`. `context` is the table a target-less repeat
    // applies to.
    fn resolve_expr(
        &self,
        expr: &ReferenceExpr,
        depth: u32,
        context: Option<&OracleTable>,
        out: &mut Vec<RollResult>,
        rng: &mut StdRng,
    ) -> OracleResult<()> {
        match expr {
            ReferenceExpr::Single(name) => self.resolve_name(name, depth, out, rng),
            ReferenceExpr::Group(names) => {
                for name in names {
                    self.resolve_name(name, depth, out, rng)?;
                }
                Ok(())
            }
            ReferenceExpr::Repeat { count, table } => {
                let target = match (table, context) {
                    (Some(name), _) => self.single_candidate(name)?,
                    (None, Some(table)) => table,
                    (None, None) => {
                        return Err(OracleError::InvalidReference(format!("[{count}x]")));
                    }
                };
                for _ in 0..*count {
                    self.roll_on(target, true, depth, out, rng)?;
                }
                Ok(())
            }
        }
    }

    // One name, looked up with the roller's game filter. Several matches in
    // one game roll together like an explicit group; matches across games
    // without a filter are ambiguous.
    fn resolve_name(
        &self,
        name: &str,
        depth: u32,
        out: &mut Vec<RollResult>,
        rng: &mut StdRng,
    ) -> OracleResult<()> {
        let candidates = self.registry.find_candidates(name, self.game);
        if candidates.is_empty() {
            return Err(OracleError::UnknownTable(name.to_string()));
        }
        if self.game.is_none() {
            let games = distinct_games(&candidates);
            if games.len() > 1 {
                return Err(OracleError::AmbiguousTable {
                    name: name.to_string(),
                    games,
                });
            }
        }
        for table in candidates {
            self.roll_on(table, true, depth, out, rng)?;
        }
        Ok(())
    }

    // Steps shared by every draw: roll the die, look up the entry, append
    // the result, then expand whatever the entry demands. `named` is false
    // only for data-driven nested rolls.
    fn roll_on(
        &self,
        table: &OracleTable,
        named: bool,
        depth: u32,
        out: &mut Vec<RollResult>,
        rng: &mut StdRng,
    ) -> OracleResult<()> {
        if depth > self.depth_limit {
            return Err(OracleError::RecursionLimitExceeded(self.depth_limit));
        }
        if table.die == 0 {
            return Err(OracleError::EntryLookupFailed {
                table: table.name.clone(),
                roll: 0,
            });
        }

        let roll = rng.random_range(1..=table.die);
        let entry =
            lookup::entry_for(table, roll).ok_or_else(|| OracleError::EntryLookupFailed {
                table: table.name.clone(),
                roll,
            })?;
        out.push(RollResult {
            roll,
            table_name: named.then(|| table.name.clone()),
            game: table.game,
            entry: entry.clone(),
            depth,
        });

        if let Some(nested) = &entry.table {
            self.roll_on(nested, false, depth + 1, out, rng)?;
        }

        if is_chained(&entry.description) {
            let expr = parse_reference(&entry.description)?;
            self.resolve_expr(&expr, depth + 1, Some(table), out, rng)?;
        }
        Ok(())
    }

    // Exactly one table for a repeat target, by the same matching rules as
    // a single name. Same-game duplicates fall back to the first.
    fn single_candidate(&self, name: &str) -> OracleResult<&'a OracleTable> {
        let candidates = self.registry.find_candidates(name, self.game);
        let Some(&first) = candidates.first() else {
            return Err(OracleError::UnknownTable(name.to_string()));
        };
        if self.game.is_none() {
            let games = distinct_games(&candidates);
            if games.len() > 1 {
                return Err(OracleError::AmbiguousTable {
                    name: name.to_string(),
                    games,
                });
            }
        }
        Ok(first)
    }
}

// Chained references must be the entry's whole text, brackets included.
fn is_chained(description: &str) -> bool {
    description.len() >= 2 && description.starts_with('[') && description.ends_with(']')
}

fn distinct_games(candidates: &[&OracleTable]) -> Vec<String> {
    let mut games: Vec<String> = Vec::new();
    for table in candidates {
        let label = game_label(table.game).to_string();
        if !games.contains(&label) {
            games.push(label);
        }
    }
    games
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::SeedableRng;

    use super::*;

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    fn test_registry() -> TableRegistry {
        let mut reg = TableRegistry::new();
        reg.insert(
            OracleTable::new("Action", 6)
                .with_game(Game::Ironsworn)
                .with_alias("act")
                .with_entry(OracleEntry::range(1, 2, "Strike"))
                .with_entry(OracleEntry::range(3, 4, "Search"))
                .with_entry(OracleEntry::range(5, 6, "Withdraw")),
        );
        reg.insert(
            OracleTable::new("Theme", 6)
                .with_game(Game::Ironsworn)
                .with_entry(OracleEntry::range(1, 3, "Peril"))
                .with_entry(OracleEntry::range(4, 6, "Memory")),
        );
        // Single-entry tables give chains a deterministic shape.
        reg.insert(
            OracleTable::new("Pay the Price", 1)
                .with_game(Game::Ironsworn)
                .with_alias("ptp")
                .with_entry(OracleEntry::range(1, 1, "[Action/Theme]")),
        );
        reg.insert(
            OracleTable::new("Deep", 1).with_entry(OracleEntry::range(1, 1, "[Mid]")),
        );
        reg.insert(OracleTable::new("Mid", 1).with_entry(OracleEntry::range(1, 1, "[Leaf]")));
        reg.insert(
            OracleTable::new("Leaf", 6)
                .with_entry(OracleEntry::range(1, 6, "Moss")),
        );
        reg.insert(OracleTable::new("Loop", 1).with_entry(OracleEntry::range(1, 1, "[Loop]")));
        reg.insert(
            OracleTable::new("Relic", 1).with_entry(
                OracleEntry::range(1, 1, "An old relic").with_table(
                    OracleTable::new("", 4)
                        .with_entry(OracleEntry::ceiling(2, "humming"))
                        .with_entry(OracleEntry::ceiling(4, "silent")),
                ),
            ),
        );
        reg.insert(
            OracleTable::new("Tale", 1)
                .with_entry(OracleEntry::range(1, 1, "Find the [Theme] stone")),
        );
        reg.insert(
            OracleTable::new("Foo", 6)
                .with_game(Game::Ironsworn)
                .with_entry(OracleEntry::range(1, 6, "iron foo")),
        );
        reg.insert(
            OracleTable::new("Foo", 6)
                .with_game(Game::Starforged)
                .with_entry(OracleEntry::range(1, 6, "star foo")),
        );
        reg.insert(
            OracleTable::new("Coast", 6)
                .with_game(Game::Ironsworn)
                .with_entry(OracleEntry::range(1, 6, "north coast")),
        );
        reg.insert(
            OracleTable::new("Coast", 6)
                .with_game(Game::Ironsworn)
                .with_entry(OracleEntry::range(1, 6, "south coast")),
        );
        reg.insert(
            OracleTable::new("Gappy", 1).with_entry(OracleEntry::range(2, 2, "unreachable")),
        );
        reg.insert(OracleTable::new("Void", 0));
        reg
    }

    #[test]
    fn single_roll_stays_on_the_die() {
        let reg = test_registry();
        let roller = OracleRoller::new(&reg);
        for seed in 0..32 {
            let results = roller.resolve("Action", &mut rng(seed)).unwrap();
            assert_eq!(results.len(), 1);
            let r = &results[0];
            assert!((1..=6).contains(&r.roll));
            assert_eq!(r.table_name.as_deref(), Some("Action"));
            assert_eq!(r.game, Some(Game::Ironsworn));
            assert_eq!(r.depth, 0);
        }
    }

    #[test]
    fn aliases_resolve_like_names() {
        let reg = test_registry();
        let results = OracleRoller::new(&reg)
            .resolve("ACT", &mut rng(7))
            .unwrap();
        assert_eq!(results[0].table_name.as_deref(), Some("Action"));
    }

    #[test]
    fn group_resolves_every_member_in_order() {
        let reg = test_registry();
        let results = OracleRoller::new(&reg)
            .resolve("[Action/Theme]", &mut rng(11))
            .unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].table_name.as_deref(), Some("Action"));
        assert_eq!(results[1].table_name.as_deref(), Some("Theme"));
        assert_eq!(results[0].depth, 0);
        assert_eq!(results[1].depth, 0);
    }

    #[test]
    fn bracketed_single_name_resolves_at_depth_zero() {
        let reg = test_registry();
        let results = OracleRoller::new(&reg)
            .resolve("[Theme]", &mut rng(3))
            .unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].table_name.as_deref(), Some("Theme"));
        assert_eq!(results[0].depth, 0);
    }

    #[test]
    fn chained_description_rolls_one_level_down() {
        let reg = test_registry();
        let results = OracleRoller::new(&reg)
            .resolve("Pay the Price", &mut rng(5))
            .unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].table_name.as_deref(), Some("Pay the Price"));
        assert_eq!(results[0].text(), "[Action/Theme]");
        assert_eq!(results[0].depth, 0);
        assert_eq!(results[1].table_name.as_deref(), Some("Action"));
        assert_eq!(results[1].depth, 1);
        assert_eq!(results[2].table_name.as_deref(), Some("Theme"));
        assert_eq!(results[2].depth, 1);
    }

    #[test]
    fn chains_increment_depth_monotonically() {
        let reg = test_registry();
        let results = OracleRoller::new(&reg).resolve("Deep", &mut rng(9)).unwrap();
        let depths: Vec<u32> = results.iter().map(|r| r.depth).collect();
        assert_eq!(depths, vec![0, 1, 2]);
        let names: Vec<Option<&str>> = results.iter().map(|r| r.table_name.as_deref()).collect();
        assert_eq!(names, vec![Some("Deep"), Some("Mid"), Some("Leaf")]);
    }

    #[test]
    fn partial_bracket_text_does_not_chain() {
        let reg = test_registry();
        let results = OracleRoller::new(&reg).resolve("Tale", &mut rng(2)).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].text(), "Find the [Theme] stone");
    }

    #[test]
    fn nested_table_rolls_its_own_die() {
        let reg = test_registry();
        for seed in 0..16 {
            let results = OracleRoller::new(&reg).resolve("Relic", &mut rng(seed)).unwrap();
            assert_eq!(results.len(), 2);
            assert_eq!(results[0].table_name.as_deref(), Some("Relic"));
            assert_eq!(results[0].depth, 0);
            let nested = &results[1];
            assert_eq!(nested.table_name, None);
            assert!((1..=4).contains(&nested.roll));
            assert_eq!(nested.depth, 1);
        }
    }

    #[test]
    fn repeat_draws_against_the_continuation() {
        let reg = test_registry();
        let results = OracleRoller::new(&reg)
            .with_continuation("Action")
            .resolve("[3x]", &mut rng(21))
            .unwrap();
        assert_eq!(results.len(), 3);
        for r in &results {
            assert_eq!(r.table_name.as_deref(), Some("Action"));
            assert_eq!(r.depth, 1);
            assert!((1..=6).contains(&r.roll));
        }
    }

    #[test]
    fn repeat_without_context_is_invalid() {
        let reg = test_registry();
        let err = OracleRoller::new(&reg)
            .resolve("[3x]", &mut rng(0))
            .unwrap_err();
        assert!(matches!(err, OracleError::InvalidReference(_)));
    }

    #[test]
    fn unknown_table_fails_with_its_name() {
        let reg = test_registry();
        let err = OracleRoller::new(&reg)
            .resolve("NotATable", &mut rng(0))
            .unwrap_err();
        match err {
            OracleError::UnknownTable(name) => assert_eq!(name, "NotATable"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn ambiguous_name_reports_every_game() {
        let reg = test_registry();
        let err = OracleRoller::new(&reg).resolve("Foo", &mut rng(0)).unwrap_err();
        match err {
            OracleError::AmbiguousTable { name, games } => {
                assert_eq!(name, "Foo");
                assert_eq!(games, ["Ironsworn", "Starforged"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn game_filter_disambiguates() {
        let reg = test_registry();
        let results = OracleRoller::new(&reg)
            .with_game(Some(Game::Ironsworn))
            .resolve("Foo", &mut rng(4))
            .unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].text(), "iron foo");
        assert_eq!(results[0].game, Some(Game::Ironsworn));
    }

    #[test]
    fn same_game_duplicates_roll_together() {
        let reg = test_registry();
        let results = OracleRoller::new(&reg).resolve("Coast", &mut rng(6)).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].text(), "north coast");
        assert_eq!(results[1].text(), "south coast");
    }

    #[test]
    fn group_may_mix_games_without_ambiguity() {
        let mut reg = test_registry();
        reg.insert(
            OracleTable::new("Sighting", 6)
                .with_game(Game::Starforged)
                .with_entry(OracleEntry::range(1, 6, "Debris field")),
        );
        let results = OracleRoller::new(&reg)
            .resolve("[Action/Sighting]", &mut rng(13))
            .unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].game, Some(Game::Ironsworn));
        assert_eq!(results[1].game, Some(Game::Starforged));
    }

    #[test]
    fn group_fails_fast_on_an_unknown_member() {
        let reg = test_registry();
        let err = OracleRoller::new(&reg)
            .resolve("[Action/NotATable]", &mut rng(0))
            .unwrap_err();
        assert!(matches!(err, OracleError::UnknownTable(name) if name == "NotATable"));
    }

    #[test]
    fn self_referencing_chain_hits_the_depth_limit() {
        let reg = test_registry();
        let err = OracleRoller::new(&reg).resolve("Loop", &mut rng(0)).unwrap_err();
        assert!(matches!(
            err,
            OracleError::RecursionLimitExceeded(DEFAULT_DEPTH_LIMIT)
        ));

        let err = OracleRoller::new(&reg)
            .with_depth_limit(3)
            .resolve("Loop", &mut rng(0))
            .unwrap_err();
        assert!(matches!(err, OracleError::RecursionLimitExceeded(3)));
    }

    #[test]
    fn uncovered_roll_is_a_lookup_failure() {
        let reg = test_registry();
        let err = OracleRoller::new(&reg).resolve("Gappy", &mut rng(0)).unwrap_err();
        match err {
            OracleError::EntryLookupFailed { table, roll } => {
                assert_eq!(table, "Gappy");
                assert_eq!(roll, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn zero_die_table_cannot_roll() {
        let reg = test_registry();
        let err = OracleRoller::new(&reg).resolve("Void", &mut rng(0)).unwrap_err();
        assert!(matches!(err, OracleError::EntryLookupFailed { roll: 0, .. }));
    }

    proptest! {
        #[test]
        fn identical_seeds_give_identical_sequences(seed in any::<u64>()) {
            let reg = test_registry();
            let roller = OracleRoller::new(&reg);
            let first = roller.resolve("[Action/Relic/Deep]", &mut rng(seed)).unwrap();
            let second = roller.resolve("[Action/Relic/Deep]", &mut rng(seed)).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn every_roll_lands_inside_its_table_die(seed in any::<u64>()) {
            let reg = test_registry();
            // Largest die in this registry is a d6.
            let results = OracleRoller::new(&reg)
                .resolve("[ptp/Relic]", &mut rng(seed))
                .unwrap();
            for r in &results {
                prop_assert!((1..=6).contains(&r.roll));
            }
        }
    }
}
