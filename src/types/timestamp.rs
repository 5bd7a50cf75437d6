//!
//! Timestamps reported by the runtime
//!
//! Instance and statistics endpoints are served by different backends
//! depending on the platform version, and each picked its own encoding:
//! fractional Unix epoch seconds (number or string), RFC3339 with or without
//! fractional seconds, `2016-09-17 15:46:17 +0000` and
//! `2017-04-12 15:27:44 UTC`. All of them decode into a [`Timestamp`].
use chrono::{DateTime, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A point in time, always held in UTC
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

/// The text is not a timestamp in any known layout
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized timestamp '{0}'")]
pub struct ParseTimestampError(String);

const OFFSET_LAYOUT: &str = "%Y-%m-%d %H:%M:%S %z";
const ZONE_NAME_LAYOUT: &str = "%Y-%m-%d %H:%M:%S";

impl Timestamp {
    /// Timestamp from fractional seconds since the Unix epoch
    #[must_use]
    pub fn from_epoch_seconds(seconds: f64) -> Option<Self> {
        if !seconds.is_finite() {
            return None;
        }
        let whole = seconds.floor();
        let nanos = ((seconds - whole) * 1e9).round();
        // rounding may carry into the next second
        let (whole, nanos) = if nanos >= 1e9 {
            (whole + 1.0, 0.0)
        } else {
            (whole, nanos)
        };

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Utc.timestamp_opt(whole as i64, nanos as u32)
            .single()
            .map(Self)
    }

    /// Parse any of the textual encodings used by the API
    pub fn parse(value: &str) -> Result<Self, ParseTimestampError> {
        let value = value.trim();

        if value.starts_with(|c: char| c.is_ascii_digit()) && !value.contains(&[' ', '-', ':'][..]) {
            if let Some(ts) = value.parse::<f64>().ok().and_then(Self::from_epoch_seconds) {
                return Ok(ts);
            }
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
            return Ok(Self(dt.with_timezone(&Utc)));
        }

        if let Ok(dt) = DateTime::parse_from_str(value, OFFSET_LAYOUT) {
            return Ok(Self(dt.with_timezone(&Utc)));
        }

        // Zone abbreviations carry no offset, they are taken as UTC
        if let Some((local, zone)) = value.rsplit_once(' ') {
            if !zone.is_empty() && zone.chars().all(|c| c.is_ascii_alphabetic()) {
                if let Ok(naive) = NaiveDateTime::parse_from_str(local, ZONE_NAME_LAYOUT) {
                    return Ok(Self(Utc.from_utc_datetime(&naive)));
                }
            }
        }

        Err(ParseTimestampError(value.to_string()))
    }

    /// The instant as a chrono value
    #[must_use]
    pub const fn to_datetime(&self) -> DateTime<Utc> {
        self.0
    }

    /// Format with a chrono layout, e.g. `"%a %b %e %H:%M:%S UTC %Y"`
    #[must_use]
    pub fn format<'a>(&self, layout: &'a str) -> chrono::format::DelayedFormat<chrono::format::StrftimeItems<'a>> {
        self.0.format(layout)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

impl std::str::FromStr for Timestamp {
    type Err = ParseTimestampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

struct TimestampVisitor;

impl<'de> Visitor<'de> for TimestampVisitor {
    type Value = Timestamp;

    fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str("Unix epoch seconds or a date-time string")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Timestamp::from_epoch_seconds(v)
            .ok_or_else(|| E::custom(format!("epoch seconds {v} out of range")))
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        self.visit_f64(v as f64)
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        self.visit_f64(v as f64)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Timestamp::parse(v).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(TimestampVisitor)
    }
}
