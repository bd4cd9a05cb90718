//! Timestamp converter

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::Serialize;

use crate::error::ToolError;

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Read a Unix timestamp. Exactly ten digits means seconds, anything else
/// milliseconds.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, ToolError> {
    let value: i64 = raw.trim().parse().map_err(|_| ToolError::InvalidTimestamp)?;

    let date = if value.to_string().len() == 10 {
        DateTime::from_timestamp(value, 0)
    } else {
        DateTime::from_timestamp_millis(value)
    };
    date.ok_or(ToolError::InvalidTimestamp)
}

/// Read a date-time. Text without an offset is taken as UTC.
pub fn parse_datetime(raw: &str) -> Result<DateTime<Utc>, ToolError> {
    let raw = raw.trim();

    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return Ok(date.with_timezone(&Utc));
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(Utc.from_utc_datetime(&naive));
        }
    }
    if let Ok(day) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        if let Some(midnight) = day.and_hms_opt(0, 0, 0) {
            return Ok(Utc.from_utc_datetime(&midnight));
        }
    }

    Err(ToolError::InvalidDate)
}

/// ISO 8601 with milliseconds, e.g. 2024-01-01T00:00:00.000Z
pub fn to_iso(date: &DateTime<Utc>) -> String {
    date.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

/// Timestamp text to ISO 8601
pub fn timestamp_to_iso(raw: &str) -> Result<String, ToolError> {
    parse_timestamp(raw).map(|date| to_iso(&date))
}

/// Date-time text to whole Unix seconds
pub fn datetime_to_timestamp(raw: &str) -> Result<i64, ToolError> {
    parse_datetime(raw).map(|date| date.timestamp())
}

/// "N seconds/minutes/hours/days ago", or the date for anything 30 days or
/// older. Future instants read "in N ...".
pub fn relative(date: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let secs = (*now - *date).num_seconds();
    if secs < 0 {
        return match describe(-secs) {
            Some(span) => format!("in {}", span),
            None => date.format("%Y-%m-%d").to_string(),
        };
    }
    match describe(secs) {
        Some(span) => format!("{} ago", span),
        None => date.format("%Y-%m-%d").to_string(),
    }
}

fn describe(secs: i64) -> Option<String> {
    let mins = secs / 60;
    let hours = mins / 60;
    let days = hours / 24;

    if secs < 60 {
        Some(format!("{} seconds", secs))
    } else if mins < 60 {
        Some(format!("{} minutes", mins))
    } else if hours < 24 {
        Some(format!("{} hours", hours))
    } else if days < 30 {
        Some(format!("{} days", days))
    } else {
        None
    }
}

/// One instant in several notations
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeFormats {
    pub iso: String,
    pub utc: String,
    pub local: String,
    pub timestamp: i64,
    pub timestamp_ms: i64,
    pub date: String,
    pub time: String,
    pub relative: String,
}

pub fn formats(date: &DateTime<Utc>, now: &DateTime<Utc>) -> TimeFormats {
    let local = date.with_timezone(&Local);
    TimeFormats {
        iso: to_iso(date),
        utc: date.format("%a, %d %b %Y %H:%M:%S GMT").to_string(),
        local: local.format("%Y-%m-%d %H:%M:%S %:z").to_string(),
        timestamp: date.timestamp(),
        timestamp_ms: date.timestamp_millis(),
        date: date.format("%a %b %d %Y").to_string(),
        time: date.format("%H:%M:%S UTC").to_string(),
        relative: relative(date, now),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seconds_and_millis() {
        assert_eq!(timestamp_to_iso("1700000000").unwrap(), "2023-11-14T22:13:20.000Z");
        assert_eq!(timestamp_to_iso("1700000000123").unwrap(), "2023-11-14T22:13:20.123Z");
        // not ten digits, so milliseconds
        assert_eq!(timestamp_to_iso("0").unwrap(), "1970-01-01T00:00:00.000Z");
        assert_eq!(timestamp_to_iso("86400000").unwrap(), "1970-01-02T00:00:00.000Z");
    }

    #[test]
    fn test_invalid_timestamp() {
        assert_eq!(timestamp_to_iso("soon").unwrap_err().to_string(), "Invalid timestamp");
        assert!(timestamp_to_iso("").is_err());
    }

    #[test]
    fn test_datetime_to_timestamp() {
        assert_eq!(datetime_to_timestamp("2023-11-14T22:13:20Z").unwrap(), 1_700_000_000);
        assert_eq!(datetime_to_timestamp("2023-11-14T23:13:20+01:00").unwrap(), 1_700_000_000);
        assert_eq!(datetime_to_timestamp("2023-11-14T22:13").unwrap(), 1_699_999_980);
        assert_eq!(datetime_to_timestamp("2023-11-14 22:13:20").unwrap(), 1_700_000_000);
        assert_eq!(datetime_to_timestamp("1970-01-02").unwrap(), 86_400);
        assert_eq!(datetime_to_timestamp("yesterday").unwrap_err(), ToolError::InvalidDate);
    }

    #[test]
    fn test_relative() {
        let now = parse_datetime("2024-03-01T12:00:00Z").unwrap();
        let at = |s: &str| parse_datetime(s).unwrap();

        assert_eq!(relative(&at("2024-03-01T11:59:15Z"), &now), "45 seconds ago");
        assert_eq!(relative(&at("2024-03-01T11:30:00Z"), &now), "30 minutes ago");
        assert_eq!(relative(&at("2024-03-01T07:00:00Z"), &now), "5 hours ago");
        assert_eq!(relative(&at("2024-02-20T12:00:00Z"), &now), "10 days ago");
        assert_eq!(relative(&at("2023-12-25T08:00:00Z"), &now), "2023-12-25");
        assert_eq!(relative(&at("2024-03-01T12:02:00Z"), &now), "in 2 minutes");
    }

    #[test]
    fn test_formats() {
        let date = parse_timestamp("1700000000").unwrap();
        let view = formats(&date, &date);
        assert_eq!(view.timestamp, 1_700_000_000);
        assert_eq!(view.timestamp_ms, 1_700_000_000_000);
        assert_eq!(view.utc, "Tue, 14 Nov 2023 22:13:20 GMT");
        assert_eq!(view.date, "Tue Nov 14 2023");
        assert_eq!(view.relative, "0 seconds ago");
    }
}
