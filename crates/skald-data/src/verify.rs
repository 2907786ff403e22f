//! Table validation beyond what loading can catch.
//!
//! Load-time checks reject structurally broken entries; these checks find
//! tables that load fine but cannot roll cleanly: dies nothing covers,
//! windows outside the die, inverted ranges.

use skald_core::{OracleTable, RollWindow, TableRegistry, lookup};

/// One problem found in a loaded table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataIssue {
    /// Name of the table with the problem.
    pub table: String,
    /// What is wrong.
    pub message: String,
}

impl std::fmt::Display for DataIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.table, self.message)
    }
}

/// Check every table in the registry. An empty result means the data can
/// answer any roll it will be asked for.
pub fn verify(registry: &TableRegistry) -> Vec<DataIssue> {
    let mut issues = Vec::new();
    for table in registry.iter() {
        verify_table(table, &table.name, &mut issues);
    }
    issues
}

fn verify_table(table: &OracleTable, label: &str, issues: &mut Vec<DataIssue>) {
    let mut push = |message: String| {
        issues.push(DataIssue {
            table: label.to_string(),
            message,
        });
    };

    if table.die == 0 {
        push("die size is zero".to_string());
        return;
    }
    if table.entries.is_empty() {
        push("has no entries".to_string());
        return;
    }

    for entry in &table.entries {
        match entry.window {
            RollWindow::Range { min, max } if min > max => {
                push(format!(
                    "entry \"{}\" has an inverted range {min}-{max}",
                    entry.description
                ));
            }
            RollWindow::Range { min, max } if min < 1 || max > table.die => {
                push(format!(
                    "entry \"{}\" window {min}-{max} falls outside 1-{}",
                    entry.description, table.die
                ));
            }
            RollWindow::Ceiling(limit) if limit < 1 || limit > table.die => {
                push(format!(
                    "entry \"{}\" ceiling {limit} falls outside 1-{}",
                    entry.description, table.die
                ));
            }
            _ => {}
        }
    }

    let gaps = lookup::coverage_gaps(table);
    if !gaps.is_empty() {
        let noun = if gaps.len() == 1 { "roll" } else { "rolls" };
        let verb = if gaps.len() == 1 { "has" } else { "have" };
        push(format!("{noun} {} {verb} no entry", format_rolls(&gaps)));
    }

    for entry in &table.entries {
        if let Some(nested) = &entry.table {
            verify_table(nested, &format!("{label} (nested)"), issues);
        }
    }
}

// Ascending rolls, compressed into spans: [4, 5, 6, 9] -> "4-6, 9".
fn format_rolls(rolls: &[u32]) -> String {
    let mut spans: Vec<(u32, u32)> = Vec::new();
    for &roll in rolls {
        match spans.last_mut() {
            Some((_, end)) if *end + 1 == roll => *end = roll,
            _ => spans.push((roll, roll)),
        }
    }
    let parts: Vec<String> = spans
        .iter()
        .map(|&(start, end)| {
            if start == end {
                start.to_string()
            } else {
                format!("{start}-{end}")
            }
        })
        .collect();
    parts.join(", ")
}
