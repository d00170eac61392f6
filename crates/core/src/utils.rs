use crate::domain::VideoRecord;
use chrono::{DateTime, Local, NaiveDateTime};
use std::collections::HashSet;

pub const DESCRIPTION_LIMIT: usize = 200;
pub const ELLIPSIS: &str = "...";

/// Keeps the first 200 characters and always appends `...`, even to short descriptions.
pub fn truncate_description(description: &str) -> String {
    let mut truncated: String = description.chars().take(DESCRIPTION_LIMIT).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}

/// Drops every record whose `video_id` was already seen, keeping first occurrences in order.
pub fn dedup_by_video_id(records: Vec<VideoRecord>) -> Vec<VideoRecord> {
    let mut seen = HashSet::with_capacity(records.len());
    records
        .into_iter()
        .filter(|record| seen.insert(record.video_id.clone()))
        .collect()
}

/// Parses a timestamp string and converts it to local timezone
/// Supports ISO 8601 with or without offset; anything else is returned unchanged
pub fn format_timestamp_to_local(timestamp_str: &str) -> String {
    if timestamp_str.is_empty() {
        return String::new();
    }

    // e.g. "2025-12-16T10:30:00Z" or "2025-12-16T10:30:00+00:00"
    if let Ok(dt) = DateTime::parse_from_rfc3339(timestamp_str) {
        return dt.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S %Z").to_string();
    }

    // No offset, assume UTC
    if let Ok(naive_dt) = NaiveDateTime::parse_from_str(timestamp_str, "%Y-%m-%dT%H:%M:%S") {
        let utc_dt = naive_dt.and_utc();
        return utc_dt.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S %Z").to_string();
    }

    timestamp_str.to_string()
}

/// Shortens a cell for console display
pub fn clip(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut clipped: String = text.chars().take(width.saturating_sub(1)).collect();
    clipped.push('…');
    clipped
}
