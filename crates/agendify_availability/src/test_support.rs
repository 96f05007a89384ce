// Shared fixtures for the unit tests of this crate.
use crate::handlers::AvailabilityState;
use crate::store::InMemoryScheduleStore;
use agendify_common::BusinessCalendarRecord;
use agendify_config::{AppConfig, SchedulingConfig, ServerConfig};
use agendify_engine::{ClockTime, DateException, ExistingAppointment, WeeklyHour};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use std::sync::Arc;

pub const BUSINESS: &str = "barbearia-centro";

pub fn config(use_availability: bool) -> Arc<AppConfig> {
    Arc::new(AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8086,
        },
        use_availability,
        logging: None,
        scheduling: Some(SchedulingConfig::default()),
    })
}

pub fn hm(hour: u32, minute: u32) -> ClockTime {
    ClockTime::from_hm(hour, minute).unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
}

/// Thursday 2025-05-01 09:00 in São Paulo.
pub fn fixed_now() -> DateTime<Utc> {
    utc(2025, 5, 1, 12, 0)
}

/// Monday to Friday 09:00-12:00, closed on weekends, closed on 2025-05-06.
pub fn weekday_record() -> BusinessCalendarRecord {
    let mut weekly_hours: Vec<WeeklyHour> = (1..=5)
        .map(|day| WeeklyHour::open(day, hm(9, 0), hm(12, 0)))
        .collect();
    weekly_hours.push(WeeklyHour::closed(0));
    weekly_hours.push(WeeklyHour::closed(6));
    BusinessCalendarRecord {
        business_id: BUSINESS.to_string(),
        time_zone: Some("America/Sao_Paulo".to_string()),
        weekly_hours,
        exceptions: vec![DateException::closed(date(2025, 5, 6), Some("Feriado"))],
        settings: None,
    }
}

/// 10:00-10:30 local on Monday 2025-05-05.
pub fn monday_ten_oclock() -> ExistingAppointment {
    ExistingAppointment::new(utc(2025, 5, 5, 13, 0), utc(2025, 5, 5, 13, 30))
}

/// State over an in-memory store seeded with [`weekday_record`] and one appointment.
pub async fn seeded_state(use_availability: bool) -> Arc<AvailabilityState> {
    use agendify_common::ScheduleStore;

    let store = InMemoryScheduleStore::new();
    store.put_calendar(weekday_record()).await.unwrap();
    store
        .replace_appointments(BUSINESS, vec![monday_ten_oclock()])
        .await
        .unwrap();
    Arc::new(AvailabilityState {
        config: config(use_availability),
        store: Arc::new(store),
        clock: fixed_now,
    })
}
