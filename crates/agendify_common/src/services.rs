// --- File: crates/agendify_common/src/services.rs ---
//! Service abstractions for the persistence layer.
//!
//! The availability engine never fetches anything itself. These traits are
//! the seam through which the service layer reads a business's calendar and
//! booked appointments, so handlers can be tested against any implementation.

use agendify_engine::{BookingSettings, DateException, ExistingAppointment, WeeklyHour};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// The persisted calendar configuration of one business.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct BusinessCalendarRecord {
    pub business_id: String,
    /// IANA zone name; the configured default applies when absent.
    #[serde(default)]
    pub time_zone: Option<String>,
    #[serde(default)]
    pub weekly_hours: Vec<WeeklyHour>,
    #[serde(default)]
    pub exceptions: Vec<DateException>,
    /// The configured default policy applies when absent.
    #[serde(default)]
    pub settings: Option<BookingSettings>,
}

/// Read/write access to business calendars and booked appointments.
pub trait ScheduleStore: Send + Sync {
    /// Error type returned by store operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetch a business's calendar, `None` if the business is unknown.
    fn get_calendar<'a>(
        &'a self,
        business_id: &'a str,
    ) -> BoxFuture<'a, Option<BusinessCalendarRecord>, Self::Error>;

    /// Insert or replace a business's calendar.
    fn put_calendar(&self, record: BusinessCalendarRecord) -> BoxFuture<'_, (), Self::Error>;

    /// Appointments overlapping `[start, end)`.
    fn get_appointments<'a>(
        &'a self,
        business_id: &'a str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> BoxFuture<'a, Vec<ExistingAppointment>, Self::Error>;

    /// Replace the booked appointments snapshot of a business.
    fn replace_appointments<'a>(
        &'a self,
        business_id: &'a str,
        appointments: Vec<ExistingAppointment>,
    ) -> BoxFuture<'a, (), Self::Error>;
}
