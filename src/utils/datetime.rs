use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::error::{ConversionError, ConversionResult};

/// Date-only format, `YYYY-MM-DD`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Minute-precision format, `YYYY-MM-DD HH:mm`.
pub const MINUTES_FORMAT: &str = "%Y-%m-%d %H:%M";
/// Second-precision format, `YYYY-MM-DD HH:mm:ss`. Also the canonical
/// storage format for UTC instants.
pub const STORAGE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[allow(clippy::expect_used)]
fn shape(pattern: &str) -> Regex {
    Regex::new(pattern).expect("hard-coded shape pattern compiles")
}

static DATE_ONLY: Lazy<Regex> = Lazy::new(|| shape(r"^\d{4}-\d{2}-\d{2}$"));
static DATE_MINUTES: Lazy<Regex> = Lazy::new(|| shape(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}$"));
static DATE_SECONDS: Lazy<Regex> = Lazy::new(|| shape(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}$"));

/// Returns true if the text has the exact `YYYY-MM-DD` shape.
pub fn is_date_shape(text: &str) -> bool {
    DATE_ONLY.is_match(text)
}

/// Returns true if the text has the exact `YYYY-MM-DD HH:mm` shape.
pub fn is_minutes_shape(text: &str) -> bool {
    DATE_MINUTES.is_match(text)
}

/// Returns true if the text has the exact `YYYY-MM-DD HH:mm:ss` shape.
pub fn is_seconds_shape(text: &str) -> bool {
    DATE_SECONDS.is_match(text)
}

/// Returns true if the text matches any of the accepted wall-clock shapes.
///
/// The shapes are zero-padded and case-sensitive; values are not range
/// checked here (`2025-13-40` passes the shape check but fails parsing).
pub fn matches_accepted_shape(text: &str) -> bool {
    is_date_shape(text) || is_minutes_shape(text) || is_seconds_shape(text)
}

/// A wall-clock date and time with no timezone attached.
///
/// Carries no absolute-time meaning until interpreted in a reference zone.
/// Constructed transiently from inbound request strings and from stored UTC
/// instants on the read path; never persisted in this form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CivilDateTime(NaiveDateTime);

impl CivilDateTime {
    /// Wraps a naive date/time as a civil wall-clock value.
    pub fn new(naive: NaiveDateTime) -> Self {
        Self(naive)
    }

    /// The underlying naive date/time components.
    pub fn naive(&self) -> NaiveDateTime {
        self.0
    }

    /// Formats the wall-clock value at the requested display precision.
    ///
    /// Seconds are truncated, never rounded: `14:30:59` renders as `14:30`.
    pub fn format(&self, precision: DisplayPrecision) -> String {
        match precision {
            DisplayPrecision::DateOnly => self.0.format(DATE_FORMAT).to_string(),
            DisplayPrecision::DateTimeMinutes => self.0.format(MINUTES_FORMAT).to_string(),
        }
    }
}

impl From<NaiveDateTime> for CivilDateTime {
    fn from(naive: NaiveDateTime) -> Self {
        Self(naive)
    }
}

impl fmt::Display for CivilDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(STORAGE_FORMAT))
    }
}

/// Display precision for outbound API responses and email bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayPrecision {
    /// `YYYY-MM-DD`
    DateOnly,
    /// `YYYY-MM-DD HH:mm`, seconds truncated
    DateTimeMinutes,
}

/// Parses a civil date/time string into its wall-clock components.
///
/// Accepts the three documented shapes, with a best-effort fallback for ISO
/// 8601 `T`-separated wall-clock input. A bare date means midnight. Offset
/// markers are not handled here; `parse_from_str` rejects trailing input, so
/// `2025-01-15T03:30:00Z` falls through to the caller's RFC 3339 handling.
pub fn parse_civil(text: &str) -> ConversionResult<CivilDateTime> {
    let trimmed = text.trim();

    let invalid = || ConversionError::InvalidFormat {
        input: text.to_string(),
    };

    if is_date_shape(trimmed) {
        return NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
            .map(|date| CivilDateTime::new(date.and_time(NaiveTime::MIN)))
            .map_err(|_| invalid());
    }

    if is_minutes_shape(trimmed) {
        return NaiveDateTime::parse_from_str(trimmed, MINUTES_FORMAT)
            .map(CivilDateTime::new)
            .map_err(|_| invalid());
    }

    if is_seconds_shape(trimmed) {
        return NaiveDateTime::parse_from_str(trimmed, STORAGE_FORMAT)
            .map(CivilDateTime::new)
            .map_err(|_| invalid());
    }

    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M"))
        .map(CivilDateTime::new)
        .map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepted_shapes() {
        assert!(is_date_shape("2025-01-15"));
        assert!(is_minutes_shape("2025-01-15 14:30"));
        assert!(is_seconds_shape("2025-01-15 14:30:59"));

        // Shapes are exact: no single digits, no T separator, no offsets
        assert!(!is_date_shape("2025-1-15"));
        assert!(!is_minutes_shape("2025-01-15 9:30"));
        assert!(!is_minutes_shape("2025-01-15T14:30"));
        assert!(!is_seconds_shape("2025-01-15 14:30:59Z"));
        assert!(!matches_accepted_shape("15/01/2025"));
        assert!(!matches_accepted_shape(""));
    }

    #[test]
    fn test_parse_civil_shapes() {
        let date_only = parse_civil("2025-01-15").unwrap();
        let midnight = parse_civil("2025-01-15 00:00").unwrap();
        assert_eq!(date_only, midnight);

        let with_seconds = parse_civil("2025-01-15 14:30:59").unwrap();
        assert_eq!(with_seconds.to_string(), "2025-01-15 14:30:59");
    }

    #[test]
    fn test_parse_civil_trims_whitespace() {
        assert_eq!(
            parse_civil("  2025-01-15 14:30  ").unwrap(),
            parse_civil("2025-01-15 14:30").unwrap()
        );
    }

    #[test]
    fn test_parse_civil_iso_fallback() {
        assert_eq!(
            parse_civil("2025-01-15T14:30:00").unwrap(),
            parse_civil("2025-01-15 14:30").unwrap()
        );
        assert_eq!(
            parse_civil("2025-01-15T14:30").unwrap(),
            parse_civil("2025-01-15 14:30").unwrap()
        );
        // Offset-bearing input is not a wall-clock value
        assert!(parse_civil("2025-01-15T14:30:00+11:00").is_err());
        assert!(parse_civil("2025-01-15T14:30:00Z").is_err());
    }

    #[test]
    fn test_parse_civil_rejects_impossible_values() {
        assert!(parse_civil("2025-13-01 10:00").is_err());
        assert!(parse_civil("2025-02-30").is_err());
        assert!(parse_civil("2025-01-15 24:00").is_err());
        assert!(parse_civil("2025-01-15 14:61").is_err());
    }

    #[test]
    fn test_format_truncates_seconds() {
        let civil = parse_civil("2025-01-15 14:30:59").unwrap();
        assert_eq!(civil.format(DisplayPrecision::DateTimeMinutes), "2025-01-15 14:30");
        assert_eq!(civil.format(DisplayPrecision::DateOnly), "2025-01-15");
    }
}
