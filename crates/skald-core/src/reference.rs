//! Reference expression parsing: `Name`, `[a/b]`, `[Nx]`.

use crate::error::{OracleError, OracleResult};

/// A parsed table reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceExpr {
    /// A bare table name or alias.
    Single(String),
    /// A bracketed alternation: every member resolves, in declared order.
    Group(Vec<String>),
    /// A bracketed repeat directive `[Nx]`: `count` extra draws.
    Repeat {
        /// Number of draws.
        count: u32,
        /// Explicit target table. The parser always leaves this empty; the
        /// engine fills in the table the repeat applies to.
        table: Option<String>,
    },
}

/// Parse one request string into a [`ReferenceExpr`].
///
/// The input is trimmed first. `[Nx]` (either case of `x`) is a repeat; any
/// other bracketed text is a group split on `/` (a single member is fine,
/// so `[Theme]` names the table `Theme`); anything unbracketed is a single
/// name. Blank input, blank group members, and repeat counts that are zero
/// or not a number fail with [`OracleError::InvalidReference`].
pub fn parse_reference(input: &str) -> OracleResult<ReferenceExpr> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(OracleError::InvalidReference(input.to_string()));
    }

    let Some(interior) = trimmed
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
    else {
        return Ok(ReferenceExpr::Single(trimmed.to_string()));
    };

    if looks_like_repeat(interior) {
        let count = interior[..interior.len() - 1]
            .parse::<u32>()
            .ok()
            .filter(|&n| n > 0)
            .ok_or_else(|| OracleError::InvalidReference(trimmed.to_string()))?;
        return Ok(ReferenceExpr::Repeat { count, table: None });
    }

    let members: Vec<String> = interior.split('/').map(|m| m.trim().to_string()).collect();
    if members.iter().any(String::is_empty) {
        return Err(OracleError::InvalidReference(trimmed.to_string()));
    }
    Ok(ReferenceExpr::Group(members))
}

// A bracket interior is a repeat attempt when it starts with a digit and
// ends with the `x` marker. `3x` repeats; a table named `Phoenix` does not.
// A failed attempt is an invalid reference, it never falls back to a group.
fn looks_like_repeat(interior: &str) -> bool {
    interior.starts_with(|c: char| c.is_ascii_digit())
        && (interior.ends_with('x') || interior.ends_with('X'))
}
