//! Reusable formatting utilities for CLI output

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

/// Format an ISO-8601 timestamp as a local date/time string.
///
/// Accepts RFC 3339 (with offset) and naive timestamps such as
/// `2025-01-15T12:00:00.123456`, which are taken to be local time already.
/// Anything else is returned unchanged.
///
/// # Example output
/// `01/15/2025 14:30:00 PST`
pub fn format_timestamp_local(timestamp: &str) -> String {
    let trimmed = timestamp.trim();

    let local = if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        Some(dt.with_timezone(&Local))
    } else {
        NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .and_then(|naive| Local.from_local_datetime(&naive).earliest())
    };

    match local {
        Some(local) => {
            let date_time = local.format("%m/%d/%Y %H:%M:%S").to_string();
            let tz_abbrev = offset_to_tz_abbrev(local.offset().local_minus_utc());
            format!("{} {}", date_time, tz_abbrev)
        }
        None => timestamp.to_string(),
    }
}

/// Convert UTC offset (seconds) to timezone abbreviation.
///
/// Maps common UTC offsets to standard timezone abbreviations. Falls back to
/// `UTC+N` format for uncommon offsets.
pub fn offset_to_tz_abbrev(offset_secs: i32) -> String {
    let offset_hours = offset_secs / 3600;
    let abbrev = match offset_hours {
        -10 => "HST",
        -9 => "AKST",
        -8 => "PST",
        -7 => "MST",
        -6 => "CST",
        -5 => "EST",
        -4 => "AST",
        0 => "UTC",
        1 => "CET",
        2 => "EET",
        3 => "MSK",
        9 => "JST",
        10 => "AEST",
        12 => "NZST",
        _ => return format!("UTC{:+}", offset_hours),
    };
    abbrev.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp_rfc3339() {
        // Noon UTC stays on the same calendar day for common offsets
        let result = format_timestamp_local("2025-01-15T12:00:00+00:00");
        assert!(result.contains("01/15/2025"));
    }

    #[test]
    fn test_format_timestamp_naive_is_local() {
        let result = format_timestamp_local("2025-01-15T12:34:56.123456");
        assert!(result.starts_with("01/15/2025 12:34:56"));
    }

    #[test]
    fn test_format_timestamp_invalid_passthrough() {
        assert_eq!(format_timestamp_local("yesterday"), "yesterday");
        assert_eq!(format_timestamp_local(""), "");
    }

    #[test]
    fn test_offset_to_tz_abbrev_common() {
        assert_eq!(offset_to_tz_abbrev(-8 * 3600), "PST");
        assert_eq!(offset_to_tz_abbrev(-5 * 3600), "EST");
        assert_eq!(offset_to_tz_abbrev(0), "UTC");
        assert_eq!(offset_to_tz_abbrev(9 * 3600), "JST");
    }

    #[test]
    fn test_offset_to_tz_abbrev_uncommon() {
        assert_eq!(offset_to_tz_abbrev(7 * 3600), "UTC+7");
        assert_eq!(offset_to_tz_abbrev(-3 * 3600), "UTC-3");
    }
}
