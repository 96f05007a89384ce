// --- File: crates/agendify_engine/src/models.rs ---
use crate::error::{EngineError, Result};
use crate::time::{ClockTime, MINUTES_PER_DAY};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Recurring opening hours for one day of the week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct WeeklyHour {
    /// 0 = Sunday … 6 = Saturday
    #[cfg_attr(feature = "openapi", schema(example = 1, minimum = 0, maximum = 6))]
    pub day_of_week: u8,
    pub is_open: bool,
    #[serde(default)]
    pub open_time: Option<ClockTime>,
    #[serde(default)]
    pub close_time: Option<ClockTime>,
}

impl WeeklyHour {
    pub fn open(day_of_week: u8, open_time: ClockTime, close_time: ClockTime) -> Self {
        Self {
            day_of_week,
            is_open: true,
            open_time: Some(open_time),
            close_time: Some(close_time),
        }
    }

    pub fn closed(day_of_week: u8) -> Self {
        Self {
            day_of_week,
            is_open: false,
            open_time: None,
            close_time: None,
        }
    }
}

/// One-off override of a calendar date's hours (holiday, vacation, event).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct DateException {
    #[cfg_attr(
        feature = "openapi",
        schema(value_type = String, format = Date, example = "2025-12-25")
    )]
    pub date: NaiveDate,
    pub is_open: bool,
    /// Falls back to the weekly hour's open time when absent.
    #[serde(default)]
    pub open_time: Option<ClockTime>,
    /// Falls back to the weekly hour's close time when absent.
    #[serde(default)]
    pub close_time: Option<ClockTime>,
    #[serde(default)]
    pub reason: Option<String>,
}

impl DateException {
    pub fn closed(date: NaiveDate, reason: Option<&str>) -> Self {
        Self {
            date,
            is_open: false,
            open_time: None,
            close_time: None,
            reason: reason.map(str::to_string),
        }
    }
}

/// Per-business booking policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct BookingSettings {
    /// Slot length in minutes.
    #[cfg_attr(feature = "openapi", schema(example = 30))]
    pub default_duration: u32,
    /// Idle minutes between the end of one slot and the start of the next.
    #[serde(default)]
    pub buffer_time: u32,
    #[cfg_attr(feature = "openapi", schema(example = 30))]
    pub max_advance_booking_days: u32,
    #[serde(default)]
    pub min_advance_booking_hours: f64,
    #[serde(default = "default_allow_same_day")]
    pub allow_same_day_booking: bool,
}

fn default_allow_same_day() -> bool {
    true
}

impl Default for BookingSettings {
    fn default() -> Self {
        Self {
            default_duration: 30,
            buffer_time: 0,
            max_advance_booking_days: 30,
            min_advance_booking_hours: 0.0,
            allow_same_day_booking: true,
        }
    }
}

impl BookingSettings {
    pub fn validate(&self) -> Result<()> {
        if self.default_duration == 0 || self.default_duration > MINUTES_PER_DAY {
            return Err(EngineError::InvalidSettings(format!(
                "defaultDuration must be between 1 and {}, got {}",
                MINUTES_PER_DAY, self.default_duration
            )));
        }
        if self.buffer_time > MINUTES_PER_DAY {
            return Err(EngineError::InvalidSettings(format!(
                "bufferTime must be at most {}, got {}",
                MINUTES_PER_DAY, self.buffer_time
            )));
        }
        if self.max_advance_booking_days == 0 {
            return Err(EngineError::InvalidSettings(
                "maxAdvanceBookingDays must be greater than zero".to_string(),
            ));
        }
        if !self.min_advance_booking_hours.is_finite() || self.min_advance_booking_hours < 0.0 {
            return Err(EngineError::InvalidSettings(format!(
                "minAdvanceBookingHours must be a non-negative number, got {}",
                self.min_advance_booking_hours
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    #[default]
    Scheduled,
    Confirmed,
    Completed,
    Cancelled,
    NoShow,
}

/// A booked appointment as seen by the engine: the half-open interval `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ExistingAppointment {
    #[cfg_attr(
        feature = "openapi",
        schema(value_type = String, format = DateTime, example = "2025-05-05T13:00:00Z")
    )]
    pub start: DateTime<Utc>,
    #[cfg_attr(
        feature = "openapi",
        schema(value_type = String, format = DateTime, example = "2025-05-05T13:30:00Z")
    )]
    pub end: DateTime<Utc>,
    #[serde(default)]
    pub status: AppointmentStatus,
}

impl ExistingAppointment {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start,
            end,
            status: AppointmentStatus::Scheduled,
        }
    }

    /// Cancelled and no-show appointments release their time.
    pub fn blocks_time(&self) -> bool {
        !matches!(
            self.status,
            AppointmentStatus::Cancelled | AppointmentStatus::NoShow
        )
    }
}

/// The open/closed state and hours that actually apply on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct EffectiveWindow {
    pub is_open: bool,
    pub open_time: Option<ClockTime>,
    pub close_time: Option<ClockTime>,
}

impl EffectiveWindow {
    pub const CLOSED: EffectiveWindow = EffectiveWindow {
        is_open: false,
        open_time: None,
        close_time: None,
    };

    /// The usable `(open, close)` pair, or `None` if closed, incomplete or empty.
    pub fn bounds(&self) -> Option<(ClockTime, ClockTime)> {
        match (self.is_open, self.open_time, self.close_time) {
            (true, Some(open), Some(close)) if open < close => Some((open, close)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SlotAvailability {
    pub time: ClockTime,
    pub available: bool,
}

/// One day of the weekly availability view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct DayAvailability {
    #[cfg_attr(
        feature = "openapi",
        schema(value_type = String, format = Date, example = "2025-05-05")
    )]
    pub date: NaiveDate,
    #[cfg_attr(feature = "openapi", schema(example = "Segunda-feira"))]
    pub day_name: String,
    pub slots: Vec<SlotAvailability>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct BookingDecision {
    pub is_valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl BookingDecision {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            reason: None,
        }
    }

    pub fn rejected(reason: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            reason: Some(reason.into()),
        }
    }
}
