//! Point-in-time handling for historical queries.

use std::fmt;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TypeError};

/// A UTC instant used as the "as of" bound in historical queries.
///
/// Wire input is parsed through [`PointInTime::parse`], which accepts
/// either an ISO-8601 string or a Unix numeric timestamp. Internally this
/// is always an already-parsed `DateTime<Utc>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointInTime(DateTime<Utc>);

impl PointInTime {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }

    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Parse a timestamp from wire input.
    ///
    /// Accepted forms, tried in order:
    /// - ISO-8601 / RFC 3339 with `Z` or an explicit offset
    /// - ISO-8601 without an offset, interpreted as UTC
    /// - Unix seconds, integer or fractional
    pub fn parse(input: &str) -> Result<Self> {
        if let Ok(parsed) = DateTime::parse_from_rfc3339(input) {
            return Ok(Self(parsed.with_timezone(&Utc)));
        }

        for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
            if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
                return Ok(Self(naive.and_utc()));
            }
        }

        if let Ok(seconds) = input.parse::<f64>() {
            if let Some(instant) = from_unix_seconds(seconds) {
                return Ok(Self(instant));
            }
        }

        Err(TypeError::InvalidTimestamp {
            input: input.to_string(),
        })
    }

    pub fn instant(&self) -> DateTime<Utc> {
        self.0
    }
}

impl From<DateTime<Utc>> for PointInTime {
    fn from(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }
}

impl fmt::Display for PointInTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

fn from_unix_seconds(seconds: f64) -> Option<DateTime<Utc>> {
    if !seconds.is_finite() {
        return None;
    }
    let whole = seconds.floor();
    let nanos = ((seconds - whole) * 1e9).round() as u32;
    DateTime::from_timestamp(whole as i64, nanos.min(999_999_999))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parse_iso_with_z() {
        let at = PointInTime::parse("2026-03-01T12:30:00Z").unwrap();
        assert_eq!(
            at.instant(),
            Utc.with_ymd_and_hms(2026, 3, 1, 12, 30, 0).unwrap()
        );
    }

    #[test]
    fn parse_iso_with_offset() {
        let at = PointInTime::parse("2026-03-01T14:30:00+02:00").unwrap();
        assert_eq!(
            at.instant(),
            Utc.with_ymd_and_hms(2026, 3, 1, 12, 30, 0).unwrap()
        );
    }

    #[test]
    fn parse_naive_iso_as_utc() {
        let at = PointInTime::parse("2026-03-01T12:30:00").unwrap();
        assert_eq!(
            at.instant(),
            Utc.with_ymd_and_hms(2026, 3, 1, 12, 30, 0).unwrap()
        );
    }

    #[test]
    fn parse_unix_integer_seconds() {
        let at = PointInTime::parse("1700000000").unwrap();
        assert_eq!(at.instant().timestamp(), 1_700_000_000);
    }

    #[test]
    fn parse_unix_fractional_seconds() {
        let at = PointInTime::parse("1700000000.5").unwrap();
        assert_eq!(at.instant().timestamp(), 1_700_000_000);
        assert_eq!(at.instant().timestamp_subsec_millis(), 500);
    }

    #[test]
    fn reject_garbage() {
        assert!(PointInTime::parse("yesterday").is_err());
        assert!(PointInTime::parse("").is_err());
        assert!(PointInTime::parse("2026-13-45T99:99:99Z").is_err());
        assert!(PointInTime::parse("NaN").is_err());
        assert!(PointInTime::parse("inf").is_err());
    }

    #[test]
    fn ordering_follows_instant() {
        let earlier = PointInTime::parse("2026-01-01T00:00:00Z").unwrap();
        let later = PointInTime::parse("2026-01-02T00:00:00Z").unwrap();
        assert!(earlier < later);
    }

    #[test]
    fn serde_round_trip() {
        let at = PointInTime::parse("2026-03-01T12:30:00Z").unwrap();
        let json = serde_json::to_string(&at).unwrap();
        let parsed: PointInTime = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, at);
    }
}
