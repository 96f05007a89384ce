//! Full gate for a concrete booking proposal.
//!
//! Listing availability and accepting a booking are separate concerns: this
//! combines the booking-window policy with the day's hours and the booked
//! intervals for one proposed `[start, start + duration)`.

use crate::booking_window::validate_booking_window;
use crate::calendar::resolve_day;
use crate::conflict::{blocking_intervals, has_conflict, Interval};
use crate::error::Result;
use crate::models::{
    BookingDecision, BookingSettings, DateException, ExistingAppointment, WeeklyHour,
};
use crate::slots::validate_slot_length;
use crate::time::ClockTime;
use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;
use tracing::debug;

pub const REASON_CLOSED: &str = "O estabelecimento não abre nesta data";
pub const REASON_OUTSIDE_HOURS: &str = "Horário fora do horário de funcionamento";
pub const REASON_UNAVAILABLE: &str = "Horário indisponível";

/// Everything the engine needs to know about one business's calendar.
#[derive(Debug, Clone, Copy)]
pub struct BusinessCalendar<'a> {
    pub weekly_hours: &'a [WeeklyHour],
    pub exceptions: &'a [DateException],
    pub time_zone: Tz,
}

/// Accepts or rejects a proposed appointment.
///
/// Checks, in order: the booking window, that the business opens on the local
/// date, that the appointment fits inside the effective hours of that date,
/// and that it does not overlap a blocking appointment.
pub fn evaluate_booking(
    calendar: &BusinessCalendar<'_>,
    settings: &BookingSettings,
    appointments: &[ExistingAppointment],
    proposed_start: DateTime<Utc>,
    duration: u32,
    now: DateTime<Utc>,
) -> Result<BookingDecision> {
    validate_slot_length(duration, 0)?;

    let window_decision =
        validate_booking_window(proposed_start, now, settings, calendar.time_zone);
    if !window_decision.is_valid {
        return Ok(window_decision);
    }

    let local_start = proposed_start.with_timezone(&calendar.time_zone);
    let date = local_start.date_naive();
    let effective = resolve_day(date, calendar.weekly_hours, calendar.exceptions);
    let Some((open, close)) = effective.bounds() else {
        debug!("Rejecting {}: closed on {}", proposed_start, date);
        return Ok(BookingDecision::rejected(REASON_CLOSED));
    };

    let start_time = ClockTime::from_naive_time(local_start.time());
    let fits = start_time >= open && start_time.minutes() + duration <= close.minutes();
    if !fits {
        debug!(
            "Rejecting {}: {} + {}m outside {}-{}",
            proposed_start, start_time, duration, open, close
        );
        return Ok(BookingDecision::rejected(REASON_OUTSIDE_HOURS));
    }

    let candidate = Interval::new(
        proposed_start,
        proposed_start + Duration::minutes(i64::from(duration)),
    );
    if has_conflict(&candidate, &blocking_intervals(appointments)) {
        debug!("Rejecting {}: overlaps a booked appointment", proposed_start);
        return Ok(BookingDecision::rejected(REASON_UNAVAILABLE));
    }

    Ok(BookingDecision::valid())
}
