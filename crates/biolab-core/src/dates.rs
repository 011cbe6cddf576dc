//! ISO date validation and expiry classification.
//!
//! Expiry strings live in the database as plain `TEXT`. Validation runs
//! at the edge before a write, and classification runs per row at render
//! time. Classification is advisory: it never changes a query result and
//! never writes anything back.

use chrono::{Local, NaiveDate};

/// Check that `s` is exactly `YYYY-MM-DD` and names a real calendar date.
///
/// The shape check is strict: `2024-1-5` is rejected even though a
/// lenient parser would take it, and `2024-13-01` fails the calendar
/// check.
#[must_use]
pub fn is_valid_date(s: &str) -> bool {
    parse_iso_date(s).is_some()
}

/// Classify an expiry string relative to `reference`.
///
/// True iff the expiry parses and is strictly earlier than `reference` —
/// a record is still usable on its expiry date itself. Fail-open: a
/// malformed expiry never reads as expired.
#[must_use]
pub fn is_expired(expiry: &str, reference: NaiveDate) -> bool {
    parse_iso_date(expiry).is_some_and(|date| date < reference)
}

/// Today's local date, the default classification reference.
///
/// Kept separate from [`is_expired`] so tests can pin the reference.
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a strict `YYYY-MM-DD` string.
fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    if !has_iso_shape(s) {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Literal `\d{4}-\d{2}-\d{2}` shape check, no calendar semantics.
fn has_iso_shape(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 10
        && b[4] == b'-'
        && b[7] == b'-'
        && [0usize, 1, 2, 3, 5, 6, 8, 9]
            .iter()
            .all(|&i| b[i].is_ascii_digit())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
