//! Dynamic multi-field LIKE filter assembly.
//!
//! Turns per-column raw search strings into a single WHERE clause with
//! numbered placeholders plus the parallel parameter vector to bind.
//! Column names come from the fixed lists in the typed search functions;
//! user input only ever lands in the parameter vector, never in the SQL
//! text.

use std::fmt::Write;

/// A WHERE clause fragment and the values to bind to it, in placeholder
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikeFilter {
    /// `name LIKE ?1 AND class LIKE ?2 ...`
    pub clause: String,
    /// One pattern per placeholder: `%%` or `%value%`.
    pub params: Vec<String>,
}

/// Build an AND-combined substring filter over `(column, raw_value)`
/// pairs.
///
/// An empty raw value matches anything (`%%`); a non-empty value becomes
/// a substring pattern (`%value%`). A row must satisfy every supplied
/// condition simultaneously. Case behavior is whatever the engine's
/// `LIKE` does natively (ASCII case-insensitive in SQLite) — no
/// special-casing here.
///
/// `fields` must be non-empty; an empty slice yields an empty clause the
/// caller cannot splice after `WHERE`.
#[must_use]
pub fn build_filter(fields: &[(&str, &str)]) -> LikeFilter {
    let mut clause = String::new();
    let mut params = Vec::with_capacity(fields.len());

    for (idx, (column, raw)) in fields.iter().enumerate() {
        if idx > 0 {
            clause.push_str(" AND ");
        }
        let n = idx.saturating_add(1);
        // Infallible: writing into a String cannot error.
        let _ = write!(clause, "{column} LIKE ?{n}");
        params.push(like_pattern(raw));
    }

    LikeFilter { clause, params }
}

/// Wrap a raw search string as a LIKE pattern; empty means wildcard.
fn like_pattern(raw: &str) -> String {
    if raw.is_empty() {
        "%%".to_owned()
    } else {
        format!("%{raw}%")
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
