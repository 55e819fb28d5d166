//! Timestamp cleanup and parsing helpers.
//!
//! Capture logs wrap their datetime values in literal double quotes and do
//! not commit to a single datetime layout, so parsing tries a small list of
//! ISO-like candidate formats instead of enforcing one.

use chrono::NaiveDateTime;

/// Candidate layouts, tried in order. `%.f` also matches values without a
/// fractional part, but the plain variants are kept explicit.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y/%m/%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M:%S",
];

/// Remove surrounding whitespace and one pair of literal double quotes.
///
/// Only a single leading and a single trailing quote character are
/// stripped; anything else is left for the datetime parser to reject.
pub fn strip_quotes(value: &str) -> &str {
    let trimmed = value.trim();
    let stripped = trimmed.strip_prefix('"').unwrap_or(trimmed);
    stripped.strip_suffix('"').unwrap_or(stripped)
}

/// Parse a datetime string against the accepted layouts.
///
/// Returns `None` when no candidate format matches.
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}
