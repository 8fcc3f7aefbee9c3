//! Lenient timestamp parsing shared by every model.
//!
//! Most HIBP timestamps are RFC 3339 with a `Z` suffix, but some are sent
//! without an offset; those are read as UTC.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S"];

/// Parses an RFC 3339 timestamp, or an offset-less ISO 8601 one as UTC.
#[must_use]
pub fn parse_utc(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// `deserialize_with` helper for required `DateTime<Utc>` fields.
///
/// # Errors
///
/// Fails when the value is not a string or does not parse as a timestamp.
pub fn required<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_utc(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp '{raw}'")))
}

/// `deserialize_with` helper for `Option<DateTime<Utc>>` fields.
///
/// `null` and a missing key both yield `None`; a present but unparseable
/// string is an error.
pub fn option<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(s) => parse_utc(&s)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp '{s}'"))),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_utc_rfc3339() {
        let ts = parse_utc("2014-03-04T19:14:54Z").unwrap();
        assert_eq!((ts.year(), ts.month(), ts.day()), (2014, 3, 4));
        assert_eq!(ts.hour(), 19);
    }

    #[test]
    fn test_parse_utc_offset_is_normalized() {
        let ts = parse_utc("2014-03-04T21:14:54+02:00").unwrap();
        assert_eq!(ts.hour(), 19);
    }

    #[test]
    fn test_parse_utc_naive_treated_as_utc() {
        let ts = parse_utc("2023-10-13T12:20:00").unwrap();
        assert_eq!(ts.hour(), 12);
        assert_eq!(ts.minute(), 20);
    }

    #[test]
    fn test_parse_utc_rejects_garbage() {
        assert!(parse_utc("next tuesday").is_none());
        assert!(parse_utc("").is_none());
    }
}
