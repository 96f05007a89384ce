//! Business time-zone handling.
//!
//! Every business has one IANA time zone. Schedule times are wall-clock times
//! in that zone; appointments are UTC instants.

use crate::error::{EngineError, Result};
use crate::time::ClockTime;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use std::str::FromStr;

pub const DEFAULT_TIME_ZONE: Tz = Tz::America__Sao_Paulo;

pub fn parse_time_zone(name: &str) -> Result<Tz> {
    Tz::from_str(name).map_err(|_| EngineError::InvalidTimezone(name.to_string()))
}

/// The UTC instant of `time` on `date` in `time_zone`.
///
/// Ambiguous wall-clock times (clocks falling back) resolve to the earlier
/// instant; times skipped by a DST gap do not exist and yield `None`.
pub fn local_instant(date: NaiveDate, time: ClockTime, time_zone: Tz) -> Option<DateTime<Utc>> {
    time_zone
        .from_local_datetime(&date.and_time(time.to_naive_time()))
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}
