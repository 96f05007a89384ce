//! Candidate slot generation inside an open window.

use crate::error::{EngineError, Result};
use crate::models::EffectiveWindow;
use crate::time::{ClockTime, MINUTES_PER_DAY};
use tracing::debug;

/// Checks a slot length and buffer before any minute arithmetic.
///
/// `duration` must be in `1..=1440` and `buffer` at most 1440 minutes.
pub fn validate_slot_length(duration: u32, buffer: u32) -> Result<()> {
    if duration == 0 {
        return Err(EngineError::InvalidDuration(
            "slot duration must be greater than zero".to_string(),
        ));
    }
    if duration > MINUTES_PER_DAY {
        return Err(EngineError::InvalidDuration(format!(
            "slot duration must be at most {} minutes, got {}",
            MINUTES_PER_DAY, duration
        )));
    }
    if buffer > MINUTES_PER_DAY {
        return Err(EngineError::InvalidDuration(format!(
            "buffer must be at most {} minutes, got {}",
            MINUTES_PER_DAY, buffer
        )));
    }
    Ok(())
}

/// Generates slot start times from `open`, stepping by `duration + buffer`,
/// while a full slot still ends at or before `close`.
///
/// A trailing partial slot is dropped. An empty or inverted window yields no
/// slots. See [`validate_slot_length`] for the accepted `duration` and `buffer`.
pub fn generate_slots(
    open: ClockTime,
    close: ClockTime,
    duration: u32,
    buffer: u32,
) -> Result<Vec<ClockTime>> {
    validate_slot_length(duration, buffer)?;
    if open >= close {
        return Ok(Vec::new());
    }

    let step = duration + buffer;
    let limit = close.minutes();
    let mut cursor = open.minutes();
    let mut slots = Vec::new();
    while cursor + duration <= limit {
        // cursor < limit < 1440, duration and step are bounded above
        if let Some(slot) = ClockTime::from_minutes(cursor) {
            slots.push(slot);
        }
        cursor += step;
    }

    debug!(
        "Generated {} slots between {} and {} (duration {}m, buffer {}m)",
        slots.len(),
        open,
        close,
        duration,
        buffer
    );
    Ok(slots)
}

/// Slots for an effective window; closed or incomplete windows have none.
pub fn generate_window_slots(
    window: &EffectiveWindow,
    duration: u32,
    buffer: u32,
) -> Result<Vec<ClockTime>> {
    match window.bounds() {
        Some((open, close)) => generate_slots(open, close, duration, buffer),
        None => validate_slot_length(duration, buffer).map(|_| Vec::new()),
    }
}
