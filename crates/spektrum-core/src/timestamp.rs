//! Interpretation of the server's ISO-8601 timestamp strings.
//!
//! Entities keep timestamps as the exact text the server sent so a task can
//! be sent back unchanged. These helpers parse that text on demand.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Parse an ISO-8601 timestamp.
///
/// Accepts RFC 3339 (`2025-03-01T09:00:00.000Z`, `+02:00` offsets) and the
/// offset-less form (`2025-03-01T09:00:00`), which is read as UTC.
#[must_use]
pub fn parse(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}
