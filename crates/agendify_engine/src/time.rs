//! Time-of-day arithmetic over naive local `"HH:MM"` strings.
//!
//! Schedules are configured as wall-clock strings. Everything downstream works
//! in minutes since midnight, so the conversions here are the only place where
//! the string format is interpreted.

use crate::error::{EngineError, Result};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Returns `true` iff `s` is a 24-hour `H:MM` or `HH:MM` time.
///
/// The hour may have one or two digits; the minute always has two.
pub fn is_valid_time(s: &str) -> bool {
    parse_parts(s).is_some()
}

/// Converts `"HH:MM"` to minutes since midnight.
pub fn to_minutes(s: &str) -> Result<u32> {
    parse_parts(s)
        .map(|(h, m)| h * 60 + m)
        .ok_or_else(|| EngineError::InvalidTime(s.to_string()))
}

/// Formats minutes since midnight as a zero-padded `"HH:MM"`.
///
/// Inverse of [`to_minutes`] for every value in `0..1440`.
pub fn from_minutes(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// `a` is strictly earlier in the day than `b`.
pub fn is_before(a: &str, b: &str) -> Result<bool> {
    Ok(to_minutes(a)? < to_minutes(b)?)
}

/// Signed number of minutes from `start` to `end`. Negative when `end` is earlier.
pub fn duration_minutes(start: &str, end: &str) -> Result<i64> {
    Ok(i64::from(to_minutes(end)?) - i64::from(to_minutes(start)?))
}

fn parse_parts(s: &str) -> Option<(u32, u32)> {
    let (hours, minutes) = s.split_once(':')?;
    if hours.is_empty() || hours.len() > 2 || minutes.len() != 2 {
        return None;
    }
    if !hours.bytes().chain(minutes.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }
    let h: u32 = hours.parse().ok()?;
    let m: u32 = minutes.parse().ok()?;
    (h < 24 && m < 60).then_some((h, m))
}

/// A validated time of day, stored as minutes since midnight.
///
/// Serializes as the `"HH:MM"` string so malformed values are rejected when a
/// request or configuration row is deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "openapi", schema(value_type = String, example = "09:00"))]
pub struct ClockTime(u16);

impl ClockTime {
    /// Builds a time from minutes since midnight; `None` outside `0..1440`.
    pub fn from_minutes(minutes: u32) -> Option<Self> {
        (minutes < MINUTES_PER_DAY).then(|| ClockTime(minutes as u16))
    }

    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        if minute >= 60 {
            return None;
        }
        Self::from_minutes(hour.checked_mul(60)?.checked_add(minute)?)
    }

    pub fn minutes(self) -> u32 {
        u32::from(self.0)
    }

    pub fn hour(self) -> u32 {
        self.minutes() / 60
    }

    pub fn minute(self) -> u32 {
        self.minutes() % 60
    }

    pub fn to_naive_time(self) -> NaiveTime {
        // minutes < 1440 is guaranteed by construction
        NaiveTime::from_num_seconds_from_midnight_opt(self.minutes() * 60, 0)
            .unwrap_or(NaiveTime::MIN)
    }

    /// Truncates a wall-clock time to minute precision.
    pub fn from_naive_time(time: NaiveTime) -> Self {
        use chrono::Timelike;
        ClockTime((time.hour() * 60 + time.minute()) as u16)
    }
}

impl FromStr for ClockTime {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        to_minutes(s).map(|m| ClockTime(m as u16))
    }
}

impl TryFrom<String> for ClockTime {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(value: ClockTime) -> Self {
        from_minutes(value.minutes())
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}
