//! `added_at` timestamp handling.

use crate::error::Result;
use chrono::{DateTime, NaiveDateTime, Utc};

/// Layout of `added_at` and similar timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Date-only layout, for display and comparison.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a timestamp in [`TIMESTAMP_FORMAT`].
pub fn parse(s: &str) -> Result<DateTime<Utc>> {
    let naive = NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)?;
    Ok(naive.and_utc())
}

/// Format a timestamp as a [`DATE_FORMAT`] date.
pub fn format_date(time: &DateTime<Utc>) -> String {
    time.format(DATE_FORMAT).to_string()
}
