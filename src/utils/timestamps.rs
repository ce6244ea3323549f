use chrono::{DateTime, Utc};

/// Log timestamp layout: second precision, UTC, no zone suffix.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format a timestamp the way every log file stores it, e.g. `2025-01-15 09:30:00`
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}
