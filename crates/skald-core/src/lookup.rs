//! Entry lookup: mapping a die roll to the entry that claims it.

use crate::table::{OracleEntry, OracleTable};

/// The entry claiming `roll`, first match in declared order.
///
/// Range windows claim exactly their span. Ceiling windows claim every roll
/// at or below the ceiling, so on an ascending table the first ceiling at or
/// above the roll wins. Overlapping windows are legal; the earlier entry
/// shadows the later one. `None` means no entry claims the roll, which is
/// malformed table data.
pub fn entry_for(table: &OracleTable, roll: u32) -> Option<&OracleEntry> {
    table.entries.iter().find(|e| e.window.contains(roll))
}

/// Every roll in `[1, die]` that no entry claims. Empty for a well-formed
/// table.
pub fn coverage_gaps(table: &OracleTable) -> Vec<u32> {
    (1..=table.die)
        .filter(|&roll| entry_for(table, roll).is_none())
        .collect()
}

/// The effective roll span of each entry in declared order, accounting for
/// earlier entries shadowing later ones. `None` marks an entry no roll can
/// reach.
pub fn entry_spans(table: &OracleTable) -> Vec<Option<(u32, u32)>> {
    let mut spans: Vec<Option<(u32, u32)>> = vec![None; table.entries.len()];
    for roll in 1..=table.die {
        if let Some(idx) = table.entries.iter().position(|e| e.window.contains(roll)) {
            spans[idx] = match spans[idx] {
                None => Some((roll, roll)),
                Some((lo, hi)) => Some((lo.min(roll), hi.max(roll))),
            };
        }
    }
    spans
}
