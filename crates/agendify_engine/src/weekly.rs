//! Seven-day availability view.

use crate::calendar::{day_name, resolve_day};
use crate::conflict::{blocking_intervals, has_conflict, Interval};
use crate::error::Result;
use crate::models::{
    DateException, DayAvailability, ExistingAppointment, SlotAvailability, WeeklyHour,
};
use crate::slots::generate_window_slots;
use crate::zone::local_instant;
use chrono::{DateTime, Days, Duration, NaiveDate, Utc};
use chrono_tz::Tz;
use tracing::debug;

pub const DAYS_PER_WEEK: u64 = 7;

/// Builds the day-by-day slot list for the 7 days starting at `start_date`.
///
/// Closed days have an empty slot list. Each generated slot is flagged
/// unavailable when its `[start, start + duration)` interval overlaps a
/// blocking appointment, or when its local start time does not exist.
#[allow(clippy::too_many_arguments)]
pub fn compute_weekly_availability(
    weekly_hours: &[WeeklyHour],
    exceptions: &[DateException],
    appointments: &[ExistingAppointment],
    start_date: NaiveDate,
    duration: u32,
    buffer: u32,
    time_zone: Tz,
) -> Result<Vec<DayAvailability>> {
    let booked = blocking_intervals(appointments);
    let mut days = Vec::with_capacity(DAYS_PER_WEEK as usize);

    for offset in 0..DAYS_PER_WEEK {
        let Some(date) = start_date.checked_add_days(Days::new(offset)) else {
            break;
        };
        days.push(compute_day_availability(
            date,
            weekly_hours,
            exceptions,
            &booked,
            duration,
            buffer,
            time_zone,
        )?);
    }

    debug!(
        "Computed weekly availability from {} ({} days, {} booked intervals)",
        start_date,
        days.len(),
        booked.len()
    );
    Ok(days)
}

/// Availability for a single date against already-filtered booked intervals.
#[allow(clippy::too_many_arguments)]
pub fn compute_day_availability(
    date: NaiveDate,
    weekly_hours: &[WeeklyHour],
    exceptions: &[DateException],
    booked: &[Interval<DateTime<Utc>>],
    duration: u32,
    buffer: u32,
    time_zone: Tz,
) -> Result<DayAvailability> {
    let window = resolve_day(date, weekly_hours, exceptions);
    let slot_length = Duration::minutes(i64::from(duration));

    let slots = generate_window_slots(&window, duration, buffer)?
        .into_iter()
        .map(|time| {
            let available = match local_instant(date, time, time_zone) {
                Some(start) => !has_conflict(&Interval::new(start, start + slot_length), booked),
                None => false,
            };
            SlotAvailability { time, available }
        })
        .collect();

    Ok(DayAvailability {
        date,
        day_name: day_name(date).to_string(),
        slots,
    })
}
