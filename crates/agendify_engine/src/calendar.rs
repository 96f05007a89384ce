//! Resolves the hours that apply on a calendar date.
//!
//! A date's hours come from the weekly schedule entry for its day of week,
//! unless a date exception exists for that exact date. An exception only
//! replaces what it specifies: an open exception without times keeps the
//! weekly times, a closed exception always closes the day.

use crate::error::{EngineError, Result};
use crate::models::{DateException, EffectiveWindow, WeeklyHour};
use crate::time::ClockTime;
use chrono::{Datelike, NaiveDate};
use std::collections::HashSet;
use tracing::trace;

/// Day names indexed by day of week (0 = Sunday).
pub const DAY_NAMES: [&str; 7] = [
    "Domingo",
    "Segunda-feira",
    "Terça-feira",
    "Quarta-feira",
    "Quinta-feira",
    "Sexta-feira",
    "Sábado",
];

/// Day of week with Sunday as 0.
pub fn day_of_week(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

pub fn day_name(date: NaiveDate) -> &'static str {
    DAY_NAMES[usize::from(day_of_week(date))]
}

/// Computes the effective open/close window for `date`.
///
/// Missing configuration resolves to closed; this never fails.
pub fn resolve_day(
    date: NaiveDate,
    weekly_hours: &[WeeklyHour],
    exceptions: &[DateException],
) -> EffectiveWindow {
    let dow = day_of_week(date);
    let weekly = weekly_hours.iter().find(|h| h.day_of_week == dow);
    let exception = exceptions.iter().find(|e| e.date == date);

    let window = match (exception, weekly) {
        (Some(exc), weekly) => EffectiveWindow {
            is_open: exc.is_open,
            open_time: exc.open_time.or_else(|| weekly.and_then(|w| w.open_time)),
            close_time: exc.close_time.or_else(|| weekly.and_then(|w| w.close_time)),
        },
        (None, Some(w)) => EffectiveWindow {
            is_open: w.is_open,
            open_time: w.open_time,
            close_time: w.close_time,
        },
        (None, None) => EffectiveWindow::CLOSED,
    };

    trace!(
        %date,
        dow,
        has_exception = exception.is_some(),
        is_open = window.is_open,
        "resolved day"
    );
    window
}

/// Checks a weekly schedule before it is accepted from configuration.
///
/// Rejects out-of-range or duplicated days, open days without both times and
/// windows whose close time is not after the open time (overnight schedules
/// are not supported).
pub fn validate_weekly_hours(weekly_hours: &[WeeklyHour]) -> Result<()> {
    let mut seen = HashSet::new();
    for hour in weekly_hours {
        if hour.day_of_week > 6 {
            return Err(EngineError::InvalidSchedule(format!(
                "dayOfWeek must be between 0 and 6, got {}",
                hour.day_of_week
            )));
        }
        if !seen.insert(hour.day_of_week) {
            return Err(EngineError::InvalidSchedule(format!(
                "duplicate weekly hour for {}",
                DAY_NAMES[usize::from(hour.day_of_week)]
            )));
        }
        if !hour.is_open {
            continue;
        }
        match (hour.open_time, hour.close_time) {
            (Some(open), Some(close)) => ensure_ordered(open, close, || {
                DAY_NAMES[usize::from(hour.day_of_week)].to_string()
            })?,
            _ => {
                return Err(EngineError::InvalidSchedule(format!(
                    "{} is open but has no openTime/closeTime",
                    DAY_NAMES[usize::from(hour.day_of_week)]
                )))
            }
        }
    }
    Ok(())
}

/// Checks date exceptions: one per date, and explicit times must be ordered.
///
/// Times an exception omits are inherited from the weekly schedule, so only
/// exceptions carrying both times are checked for ordering here.
pub fn validate_exceptions(exceptions: &[DateException]) -> Result<()> {
    let mut seen = HashSet::new();
    for exc in exceptions {
        if !seen.insert(exc.date) {
            return Err(EngineError::InvalidSchedule(format!(
                "more than one exception for {}",
                exc.date
            )));
        }
        if let (true, Some(open), Some(close)) = (exc.is_open, exc.open_time, exc.close_time) {
            ensure_ordered(open, close, || exc.date.to_string())?;
        }
    }
    Ok(())
}

/// Checks each open exception against the weekly hours it inherits from.
///
/// A partial exception such as an open time after the weekday's close time
/// would resolve to an empty window; it is rejected like an overnight day.
/// An open exception must also end up with both times.
pub fn validate_exception_windows(
    weekly_hours: &[WeeklyHour],
    exceptions: &[DateException],
) -> Result<()> {
    for exc in exceptions.iter().filter(|e| e.is_open) {
        let window = resolve_day(exc.date, weekly_hours, exceptions);
        match (window.open_time, window.close_time) {
            (Some(open), Some(close)) => ensure_ordered(open, close, || exc.date.to_string())?,
            _ => {
                return Err(EngineError::InvalidSchedule(format!(
                    "{} is open but neither the exception nor {} has openTime/closeTime",
                    exc.date,
                    day_name(exc.date)
                )))
            }
        }
    }
    Ok(())
}

fn ensure_ordered<F>(open: ClockTime, close: ClockTime, label: F) -> Result<()>
where
    F: FnOnce() -> String,
{
    if open < close {
        Ok(())
    } else {
        Err(EngineError::InvalidSchedule(format!(
            "{}: closeTime {} must be after openTime {} (overnight hours are not supported)",
            label(),
            close,
            open
        )))
    }
}
