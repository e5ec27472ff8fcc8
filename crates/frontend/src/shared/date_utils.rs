/// Utilities for formatting timestamps sent by the assistant service
///
/// The service stamps pipeline steps with Python `isoformat()` output:
/// local time, no offset, optional microseconds.
use chrono::NaiveDateTime;

const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Format an ISO datetime to HH:MM:SS
/// Example: "2024-03-15T14:02:26.123456" -> "14:02:26"
pub fn format_time(datetime_str: &str) -> String {
    match NaiveDateTime::parse_from_str(datetime_str, ISO_FORMAT) {
        Ok(dt) => dt.format("%H:%M:%S").to_string(),
        Err(_) => datetime_str.to_string(),
    }
}

/// Format an ISO datetime to DD.MM.YYYY HH:MM:SS
/// Example: "2024-03-15T14:02:26.123456" -> "15.03.2024 14:02:26"
pub fn format_datetime(datetime_str: &str) -> String {
    match NaiveDateTime::parse_from_str(datetime_str, ISO_FORMAT) {
        Ok(dt) => dt.format("%d.%m.%Y %H:%M:%S").to_string(),
        Err(_) => datetime_str.to_string(),
    }
}
