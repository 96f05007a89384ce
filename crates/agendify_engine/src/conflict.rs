//! Overlap detection between a candidate slot and booked appointments.
//!
//! Intervals are half-open `[start, end)`: an appointment ending exactly when
//! another starts is not a conflict.

use crate::models::ExistingAppointment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A half-open interval `[start, end)` over any ordered instant type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval<T> {
    pub start: T,
    pub end: T,
}

impl<T: Ord + Copy> Interval<T> {
    pub fn new(start: T, end: T) -> Self {
        Self { start, end }
    }

    /// `a.start < b.end && a.end > b.start`
    pub fn overlaps(&self, other: &Interval<T>) -> bool {
        self.start < other.end && self.end > other.start
    }
}

impl From<&ExistingAppointment> for Interval<DateTime<Utc>> {
    fn from(appointment: &ExistingAppointment) -> Self {
        Interval::new(appointment.start, appointment.end)
    }
}

/// True iff `candidate` overlaps any of `existing`.
pub fn has_conflict<T: Ord + Copy>(candidate: &Interval<T>, existing: &[Interval<T>]) -> bool {
    existing.iter().any(|booked| candidate.overlaps(booked))
}

/// Booked intervals that still block time (cancelled and no-show are skipped).
pub fn blocking_intervals(appointments: &[ExistingAppointment]) -> Vec<Interval<DateTime<Utc>>> {
    appointments
        .iter()
        .filter(|a| a.blocks_time())
        .map(Interval::from)
        .collect()
}
