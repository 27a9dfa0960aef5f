//! Timestamp utilities: stored values are RFC 3339 strings in UTC.

use chrono::{DateTime, Local};

/// Render a stored timestamp in local time ("YYYY-MM-DD HH:MM"), or the raw value if unparsable.
pub fn format_timestamp(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

pub fn format_optional_timestamp(raw: Option<&str>) -> String {
    raw.map(format_timestamp).unwrap_or_else(|| "--".to_string())
}

pub fn format_millis(ms: Option<i64>) -> String {
    match ms {
        Some(ms) if ms >= 1000 => format!("{:.2}s", ms as f64 / 1000.0),
        Some(ms) => format!("{ms}ms"),
        None => "--".to_string(),
    }
}
