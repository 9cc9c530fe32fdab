//! Creation date display.

use chrono::{Datelike, Local, TimeZone};

/// Placeholder for missing or unrepresentable dates.
pub const NOT_AVAILABLE: &str = "N/A";

/// Render a Unix timestamp as local `DD Mon YYYY` (e.g. "14 Mar 2024").
/// Absent, non-positive or out-of-range values give "N/A".
pub fn format_timestamp(ts: Option<i64>) -> String {
    ts.filter(|&secs| secs > 0)
        .and_then(|secs| Local.timestamp_opt(secs, 0).single())
        .filter(|dt| dt.year() <= 9999)
        .map(|dt| dt.format("%d %b %Y").to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}
