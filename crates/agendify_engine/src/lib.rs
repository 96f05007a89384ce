//! # agendify-engine
//!
//! Availability and slot generation for appointment booking.
//!
//! The engine is pure: callers pass in the business's weekly hours, date
//! exceptions, booked appointments, booking settings and the current instant,
//! and get plain data back. Nothing here performs I/O or reads the clock.
//!
//! ## Modules
//!
//! - [`time`]: `"HH:MM"` parsing, formatting and minute arithmetic
//! - [`calendar`]: effective hours for a date (weekly hours + exceptions)
//! - [`slots`]: candidate slot start times inside a window
//! - [`conflict`]: half-open interval overlap against booked appointments
//! - [`booking_window`]: minimum/maximum advance and same-day policy
//! - [`weekly`]: seven-day availability view
//! - [`booking`]: full gate for a concrete booking proposal
//! - [`zone`]: business time zone handling
//! - [`error`]: Error types

pub mod booking;
pub mod booking_window;
pub mod calendar;
pub mod conflict;
pub mod error;
pub mod models;
pub mod slots;
pub mod time;
pub mod weekly;
pub mod zone;

#[cfg(test)]
mod booking_window_test;
#[cfg(test)]
mod engine_proptest;
#[cfg(test)]
mod slots_test;
#[cfg(test)]
mod weekly_test;

pub use booking::{
    evaluate_booking, BusinessCalendar, REASON_CLOSED, REASON_OUTSIDE_HOURS, REASON_UNAVAILABLE,
};
pub use booking_window::validate_booking_window;
pub use calendar::{
    day_name, resolve_day, validate_exception_windows, validate_exceptions, validate_weekly_hours,
};
pub use conflict::{blocking_intervals, has_conflict, Interval};
pub use error::EngineError;
pub use models::{
    AppointmentStatus, BookingDecision, BookingSettings, DateException, DayAvailability,
    EffectiveWindow, ExistingAppointment, SlotAvailability, WeeklyHour,
};
pub use slots::{generate_slots, generate_window_slots, validate_slot_length};
pub use time::{duration_minutes, from_minutes, is_before, is_valid_time, to_minutes, ClockTime};
pub use weekly::{compute_day_availability, compute_weekly_availability};
pub use zone::{local_instant, parse_time_zone, DEFAULT_TIME_ZONE};
