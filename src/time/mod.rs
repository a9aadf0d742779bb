//! Release-date utilities for embargoes.
//!
//! Embargo records carry whatever offset they were written with. Everything
//! the engine emits is UTC, truncated to whole seconds.

use chrono::{DateTime, FixedOffset, NaiveDate, Timelike, Utc};

use crate::error::TimeError;

/// Converts a release date to UTC and drops sub-second precision.
pub fn normalize_release_date(date: &DateTime<FixedOffset>) -> DateTime<Utc> {
    truncate_to_seconds(date.with_timezone(&Utc))
}

/// Parses a release date from RFC 3339 (any offset) or a bare `YYYY-MM-DD`.
///
/// A bare date is read as midnight UTC.
pub fn parse_release_date(s: &str) -> Result<DateTime<FixedOffset>, TimeError> {
    let trimmed = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt);
    }
    let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|e| TimeError::InvalidReleaseDate(format!("{trimmed:?}: {e}")))?;
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| TimeError::InvalidReleaseDate(format!("{trimmed:?}: no midnight")))?;
    Ok(midnight.and_utc().fixed_offset())
}

fn truncate_to_seconds(dt: DateTime<Utc>) -> DateTime<Utc> {
    dt.with_nanosecond(0).unwrap_or(dt)
}
