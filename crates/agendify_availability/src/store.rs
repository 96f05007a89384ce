// --- File: crates/agendify_availability/src/store.rs ---
use agendify_common::{AgendifyError, BoxFuture, BusinessCalendarRecord, ScheduleStore};
use agendify_engine::ExistingAppointment;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

/// The store as handlers see it.
pub type DynScheduleStore = dyn ScheduleStore<Error = AgendifyError>;

/// Process-local calendars and appointment snapshots.
#[derive(Debug, Default)]
pub struct InMemoryScheduleStore {
    calendars: RwLock<HashMap<String, BusinessCalendarRecord>>,
    appointments: RwLock<HashMap<String, Vec<ExistingAppointment>>>,
}

impl InMemoryScheduleStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScheduleStore for InMemoryScheduleStore {
    type Error = AgendifyError;

    fn get_calendar<'a>(
        &'a self,
        business_id: &'a str,
    ) -> BoxFuture<'a, Option<BusinessCalendarRecord>, Self::Error> {
        Box::pin(async move { Ok(self.calendars.read().await.get(business_id).cloned()) })
    }

    fn put_calendar(&self, record: BusinessCalendarRecord) -> BoxFuture<'_, (), Self::Error> {
        Box::pin(async move {
            debug!("Storing calendar for business {}", record.business_id);
            self.calendars
                .write()
                .await
                .insert(record.business_id.clone(), record);
            Ok(())
        })
    }

    fn get_appointments<'a>(
        &'a self,
        business_id: &'a str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> BoxFuture<'a, Vec<ExistingAppointment>, Self::Error> {
        Box::pin(async move {
            let appointments = self.appointments.read().await;
            Ok(appointments
                .get(business_id)
                .map(|booked| {
                    booked
                        .iter()
                        .filter(|a| a.start < end && a.end > start)
                        .cloned()
                        .collect()
                })
                .unwrap_or_default())
        })
    }

    fn replace_appointments<'a>(
        &'a self,
        business_id: &'a str,
        appointments: Vec<ExistingAppointment>,
    ) -> BoxFuture<'a, (), Self::Error> {
        Box::pin(async move {
            debug!(
                "Replacing {} appointments for business {}",
                appointments.len(),
                business_id
            );
            self.appointments
                .write()
                .await
                .insert(business_id.to_string(), appointments);
            Ok(())
        })
    }
}
