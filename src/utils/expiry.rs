use chrono::{DateTime, Duration, NaiveDateTime, Timelike, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::utils::error::{AppError, AppResult};

/// The one pattern poll expiries are parsed from and formatted to.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

const DEFAULT_POLL_DAYS: i64 = 30;

/// Expiration timestamp of a poll, at minute resolution. All parsing and
/// formatting of the wire pattern goes through this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExpireAt(NaiveDateTime);

impl ExpireAt {
    /// Strict parse: the input must match `YYYY-MM-DD HH:mm` exactly.
    pub fn parse(raw: &str) -> AppResult<Self> {
        NaiveDateTime::parse_from_str(raw, DATE_FORMAT)
            .map(Self)
            .map_err(|_| {
                AppError::ValidationError(
                    "expireAt must match the pattern YYYY-MM-DD HH:mm".to_string(),
                )
            })
    }

    /// Expiry substituted when a poll is created without one: now + 30 days,
    /// truncated to the minute so the stored value equals its wire form.
    pub fn default_from(now: DateTime<Utc>) -> Self {
        let at = now.naive_utc() + Duration::days(DEFAULT_POLL_DAYS);
        Self(
            at.with_second(0)
                .and_then(|t| t.with_nanosecond(0))
                .unwrap_or(at),
        )
    }

    /// A poll is expired once `now` is strictly after its expiry.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now.naive_utc() > self.0
    }
}

impl fmt::Display for ExpireAt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl Serialize for ExpireAt {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ExpireAt {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        ExpireAt::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[test]
    fn parses_the_fixed_pattern() {
        let at = ExpireAt::parse("2022-02-28 01:00").unwrap();
        assert_eq!(at.to_string(), "2022-02-28 01:00");
    }

    #[test]
    fn rejects_other_shapes() {
        for raw in [
            "",
            "2022/02/28 01:00",
            "2022-02-28",
            "01:00 2022-02-28",
            "2022-02-28 01:00:00",
            "2022-02-28T01:00",
            "2022-13-01 01:00",
            "not a date",
        ] {
            assert!(ExpireAt::parse(raw).is_err(), "accepted {:?}", raw);
        }
    }

    #[test]
    fn default_is_thirty_days_out_at_minute_resolution() {
        let now = Utc.with_ymd_and_hms(2022, 2, 28, 1, 0, 42).unwrap();
        let at = ExpireAt::default_from(now);
        assert_eq!(at.to_string(), "2022-03-30 01:00");
    }

    #[test]
    fn default_round_trips_through_the_wire_pattern() {
        let at = ExpireAt::default_from(Utc.with_ymd_and_hms(2023, 7, 1, 15, 9, 59).unwrap());
        let reparsed = ExpireAt::parse(&at.to_string()).unwrap();
        assert_eq!(reparsed, at);
    }

    #[test]
    fn expiry_is_strictly_after() {
        let at = ExpireAt::parse("2022-02-28 01:00").unwrap();

        assert!(!at.is_expired(utc(2022, 2, 28, 0, 59)));
        assert!(!at.is_expired(utc(2022, 2, 28, 1, 0)));
        assert!(at.is_expired(utc(2022, 2, 28, 1, 1)));
    }

    #[test]
    fn serializes_as_the_wire_pattern() {
        let at = ExpireAt::parse("2022-02-28 01:00").unwrap();
        assert_eq!(
            serde_json::to_value(at).unwrap(),
            serde_json::json!("2022-02-28 01:00")
        );
    }

    #[test]
    fn deserializes_strictly() {
        let ok: Result<ExpireAt, _> = serde_json::from_str("\"2022-02-28 01:00\"");
        assert!(ok.is_ok());

        let bad: Result<ExpireAt, _> = serde_json::from_str("\"2022-02-28\"");
        assert!(bad.is_err());
    }
}
