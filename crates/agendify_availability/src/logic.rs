// --- File: crates/agendify_availability/src/logic.rs ---
//! Request/response types and the glue between stored calendars and the engine.

use crate::error::AvailabilityError;
use agendify_common::BusinessCalendarRecord;
use agendify_config::SchedulingConfig;
use agendify_engine::{
    blocking_intervals, compute_day_availability, compute_weekly_availability, evaluate_booking,
    parse_time_zone, resolve_day, validate_exception_windows, validate_exceptions,
    validate_weekly_hours, BookingDecision, BookingSettings, BusinessCalendar, DateException,
    DayAvailability, EffectiveWindow, ExistingAppointment, SlotAvailability, WeeklyHour,
    DEFAULT_TIME_ZONE,
};
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Days covered by the weekly view.
pub const WEEK_DAYS: i64 = 7;

// --- Data Structures ---
// Query strings keep snake_case names; JSON bodies are camelCase.
#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams, utoipa::ToSchema))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct AvailabilityQuery {
    /// First day of the week view, YYYY-MM-DD
    #[cfg_attr(feature = "openapi", schema(format = "date", example = "2025-05-05"))]
    pub start_date: String,

    /// Slot length in minutes, defaults to the business's default duration
    #[cfg_attr(feature = "openapi", schema(example = 30))]
    pub duration_minutes: Option<u32>,
}

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams, utoipa::ToSchema))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct DayQuery {
    /// Day to inspect, YYYY-MM-DD
    #[cfg_attr(feature = "openapi", schema(format = "date", example = "2025-05-05"))]
    pub date: String,

    #[cfg_attr(feature = "openapi", schema(example = 30))]
    pub duration_minutes: Option<u32>,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct WeeklyAvailabilityResponse {
    pub business_id: String,
    pub time_zone: String,
    pub duration_minutes: u32,
    pub days: Vec<DayAvailability>,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct DayViewResponse {
    pub business_id: String,
    #[cfg_attr(
        feature = "openapi",
        schema(value_type = String, format = Date, example = "2025-05-05")
    )]
    pub date: NaiveDate,
    pub day_name: String,
    pub window: EffectiveWindow,
    pub slots: Vec<SlotAvailability>,
}

#[derive(Deserialize, Debug, Clone)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ValidateBookingRequest {
    /// Proposed start as an RFC3339 timestamp
    #[cfg_attr(feature = "openapi", schema(example = "2025-05-05T12:00:00Z"))]
    pub start_time: String,
    /// Defaults to the business's default duration
    #[serde(default)]
    pub duration_minutes: Option<u32>,
}

/// Everything needed to compute a week without touching the store.
#[derive(Deserialize, Debug, Clone)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityPreviewRequest {
    #[cfg_attr(
        feature = "openapi",
        schema(value_type = String, format = Date, example = "2025-05-05")
    )]
    pub start_date: NaiveDate,
    #[serde(default)]
    pub time_zone: Option<String>,
    pub weekly_hours: Vec<WeeklyHour>,
    #[serde(default)]
    pub exceptions: Vec<DateException>,
    #[serde(default)]
    pub appointments: Vec<ExistingAppointment>,
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    #[serde(default)]
    pub buffer_minutes: Option<u32>,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityPreviewResponse {
    pub time_zone: String,
    pub duration_minutes: u32,
    pub days: Vec<DayAvailability>,
}

#[derive(Deserialize, Debug, Clone)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CalendarUpdateRequest {
    #[serde(default)]
    pub time_zone: Option<String>,
    pub weekly_hours: Vec<WeeklyHour>,
    #[serde(default)]
    pub exceptions: Vec<DateException>,
    #[serde(default)]
    pub settings: Option<BookingSettings>,
}

#[derive(Deserialize, Debug, Clone)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct AppointmentsUpdateRequest {
    pub appointments: Vec<ExistingAppointment>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct UpdateResponse {
    pub success: bool,
    pub message: String,
}

// --- Logic ---

/// Booking policy used when a business has none of its own.
pub fn fallback_settings(scheduling: Option<&SchedulingConfig>) -> BookingSettings {
    match scheduling {
        Some(s) => BookingSettings {
            default_duration: s.default_duration_minutes,
            buffer_time: s.buffer_minutes,
            max_advance_booking_days: s.max_advance_booking_days,
            min_advance_booking_hours: s.min_advance_booking_hours,
            allow_same_day_booking: s.allow_same_day_booking,
        },
        None => BookingSettings::default(),
    }
}

/// Zone used when a business has none of its own.
pub fn fallback_time_zone(scheduling: Option<&SchedulingConfig>) -> Result<Tz, AvailabilityError> {
    match scheduling {
        Some(s) => parse_time_zone(&s.time_zone).map_err(|_| {
            AvailabilityError::Config(format!("invalid scheduling.time_zone '{}'", s.time_zone))
        }),
        None => Ok(DEFAULT_TIME_ZONE),
    }
}

fn time_zone_or_fallback(
    zone: Option<&str>,
    scheduling: Option<&SchedulingConfig>,
) -> Result<Tz, AvailabilityError> {
    match zone {
        Some(name) => Ok(parse_time_zone(name)?),
        None => fallback_time_zone(scheduling),
    }
}

pub fn parse_date(value: &str, field: &str) -> Result<NaiveDate, AvailabilityError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        AvailabilityError::InvalidRequest(format!("Invalid {} format (YYYY-MM-DD)", field))
    })
}

pub fn parse_start_time(value: &str) -> Result<DateTime<Utc>, AvailabilityError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            AvailabilityError::InvalidRequest("Invalid startTime format (RFC3339)".to_string())
        })
}

/// UTC range of appointments that can touch local days `[start_date, start_date + days)`.
///
/// Padded by a day on each side so any zone offset is covered.
pub fn appointment_range(start_date: NaiveDate, days: i64) -> (DateTime<Utc>, DateTime<Utc>) {
    let midnight = start_date.and_time(NaiveTime::MIN).and_utc();
    (
        midnight - Duration::days(1),
        midnight + Duration::days(days + 1),
    )
}

/// Weekly hours and exceptions, each on its own and merged per date.
fn validate_schedule(
    weekly_hours: &[WeeklyHour],
    exceptions: &[DateException],
) -> Result<(), AvailabilityError> {
    validate_weekly_hours(weekly_hours)?;
    validate_exceptions(exceptions)?;
    validate_exception_windows(weekly_hours, exceptions)?;
    Ok(())
}

/// Rejects a calendar that would make the engine silently drop days.
pub fn validate_calendar(
    request: &CalendarUpdateRequest,
    scheduling: Option<&SchedulingConfig>,
) -> Result<(), AvailabilityError> {
    validate_schedule(&request.weekly_hours, &request.exceptions)?;
    if let Some(settings) = &request.settings {
        settings.validate()?;
    }
    time_zone_or_fallback(request.time_zone.as_deref(), scheduling)?;
    Ok(())
}

/// A stored calendar with fallbacks applied.
#[derive(Debug, Clone)]
pub struct ResolvedCalendar {
    pub record: BusinessCalendarRecord,
    pub settings: BookingSettings,
    pub time_zone: Tz,
}

impl ResolvedCalendar {
    pub fn new(
        record: BusinessCalendarRecord,
        scheduling: Option<&SchedulingConfig>,
    ) -> Result<Self, AvailabilityError> {
        let time_zone = time_zone_or_fallback(record.time_zone.as_deref(), scheduling)?;
        let settings = record
            .settings
            .clone()
            .unwrap_or_else(|| fallback_settings(scheduling));
        Ok(Self {
            record,
            settings,
            time_zone,
        })
    }

    pub fn calendar(&self) -> BusinessCalendar<'_> {
        BusinessCalendar {
            weekly_hours: &self.record.weekly_hours,
            exceptions: &self.record.exceptions,
            time_zone: self.time_zone,
        }
    }

    pub fn weekly_view(
        &self,
        appointments: &[ExistingAppointment],
        start_date: NaiveDate,
        duration: Option<u32>,
    ) -> Result<WeeklyAvailabilityResponse, AvailabilityError> {
        let duration = duration.unwrap_or(self.settings.default_duration);
        let days = compute_weekly_availability(
            &self.record.weekly_hours,
            &self.record.exceptions,
            appointments,
            start_date,
            duration,
            self.settings.buffer_time,
            self.time_zone,
        )?;
        Ok(WeeklyAvailabilityResponse {
            business_id: self.record.business_id.clone(),
            time_zone: self.time_zone.name().to_string(),
            duration_minutes: duration,
            days,
        })
    }

    pub fn day_view(
        &self,
        appointments: &[ExistingAppointment],
        date: NaiveDate,
        duration: Option<u32>,
    ) -> Result<DayViewResponse, AvailabilityError> {
        let duration = duration.unwrap_or(self.settings.default_duration);
        let window = resolve_day(date, &self.record.weekly_hours, &self.record.exceptions);
        let day = compute_day_availability(
            date,
            &self.record.weekly_hours,
            &self.record.exceptions,
            &blocking_intervals(appointments),
            duration,
            self.settings.buffer_time,
            self.time_zone,
        )?;
        Ok(DayViewResponse {
            business_id: self.record.business_id.clone(),
            date,
            day_name: day.day_name,
            window,
            slots: day.slots,
        })
    }

    pub fn evaluate(
        &self,
        appointments: &[ExistingAppointment],
        proposed_start: DateTime<Utc>,
        duration: Option<u32>,
        now: DateTime<Utc>,
    ) -> Result<BookingDecision, AvailabilityError> {
        let duration = duration.unwrap_or(self.settings.default_duration);
        let decision = evaluate_booking(
            &self.calendar(),
            &self.settings,
            appointments,
            proposed_start,
            duration,
            now,
        )?;
        debug!(
            "Booking {} for {} min at {}: valid={}",
            self.record.business_id, duration, proposed_start, decision.is_valid
        );
        Ok(decision)
    }
}

/// Stateless week computation for the client preview.
pub fn preview_availability(
    request: &AvailabilityPreviewRequest,
    scheduling: Option<&SchedulingConfig>,
) -> Result<AvailabilityPreviewResponse, AvailabilityError> {
    validate_schedule(&request.weekly_hours, &request.exceptions)?;

    let time_zone = time_zone_or_fallback(request.time_zone.as_deref(), scheduling)?;
    let defaults = fallback_settings(scheduling);
    let duration = request.duration_minutes.unwrap_or(defaults.default_duration);
    let buffer = request.buffer_minutes.unwrap_or(defaults.buffer_time);

    let days = compute_weekly_availability(
        &request.weekly_hours,
        &request.exceptions,
        &request.appointments,
        request.start_date,
        duration,
        buffer,
        time_zone,
    )?;
    Ok(AvailabilityPreviewResponse {
        time_zone: time_zone.name().to_string(),
        duration_minutes: duration,
        days,
    })
}
