//! Timestamps of data points
//!
//! Stores hold creation dates without a time zone, so a timestamp is a
//! `NaiveDateTime`. The textual layout is the one written to store files and
//! rendered into where clauses: `2021-03-01T12:00:00.000`.

use chrono::{NaiveDate, NaiveDateTime, SubsecRound};

use crate::error::{TypeError, TypeResult};

/// Creation time of a data point
pub type Timestamp = NaiveDateTime;

/// Canonical textual layout (millisecond precision)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

const DATE_TIME_LAYOUT: &str = "%Y-%m-%dT%H:%M:%S%.f";
const DATE_LAYOUT: &str = "%Y-%m-%d";

/// Render a timestamp in the canonical layout
pub fn format_timestamp(ts: &Timestamp) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Drop sub-millisecond digits, keeping exactly what the canonical layout shows
pub fn truncate_to_millis(ts: Timestamp) -> Timestamp {
    ts.trunc_subsecs(3)
}

/// Parse a timestamp.
///
/// Accepts the canonical layout, the same layout without fractional seconds,
/// and a bare date (read as midnight).
pub fn parse_timestamp(text: &str) -> TypeResult<Timestamp> {
    let text = text.trim();

    if let Ok(ts) = NaiveDateTime::parse_from_str(text, DATE_TIME_LAYOUT) {
        return Ok(ts);
    }

    NaiveDate::parse_from_str(text, DATE_LAYOUT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| TypeError::invalid_timestamp(text))
}

/// Serde adapter writing timestamps in the canonical layout.
///
/// Use with `#[serde(with = "dvcalc_types::timestamp::canonical")]`.
pub mod canonical {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{Timestamp, format_timestamp, parse_timestamp};

    pub fn serialize<S>(ts: &Timestamp, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_timestamp(ts))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Timestamp, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        parse_timestamp(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_format_has_millis() {
        let ts = parse_timestamp("2021-03-01T12:30:05").unwrap();
        assert_eq!(format_timestamp(&ts), "2021-03-01T12:30:05.000");
    }

    #[test]
    fn test_parse_fractional_seconds() {
        let ts = parse_timestamp("2021-03-01T12:30:05.250").unwrap();
        assert_eq!(ts.nanosecond(), 250_000_000);
    }

    #[test]
    fn test_parse_bare_date_is_midnight() {
        let ts = parse_timestamp("2021-03-01").unwrap();
        assert_eq!(format_timestamp(&ts), "2021-03-01T00:00:00.000");
    }

    #[test]
    fn test_truncate_to_millis() {
        let ts = parse_timestamp("2021-03-01T12:30:05.250999").unwrap();
        assert_eq!(truncate_to_millis(ts).nanosecond(), 250_000_000);
        assert_eq!(format_timestamp(&truncate_to_millis(ts)), format_timestamp(&ts));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse_timestamp("yesterday").unwrap_err();
        assert!(matches!(err, TypeError::InvalidTimestamp { .. }));
    }
}
