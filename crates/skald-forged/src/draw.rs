//! Shared oracle-draw helper for the generators.

use rand::rngs::StdRng;
use skald_core::{Game, OracleRoller, TableRegistry};

use crate::error::{ForgedError, ForgedResult};

/// Draw one outcome text from a named table, scoped to Starforged. When
/// the table chains or nests, the deepest result is the concrete one.
pub(crate) fn draw_text(
    registry: &TableRegistry,
    table: &str,
    rng: &mut StdRng,
) -> ForgedResult<String> {
    let mut results = OracleRoller::new(registry)
        .with_game(Some(Game::Starforged))
        .resolve(table, rng)?;
    match results.pop() {
        Some(last) => Ok(last.entry.description),
        None => Err(ForgedError::EmptyDraw(table.to_string())),
    }
}
