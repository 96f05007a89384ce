#[cfg(test)]
mod tests {
    use crate::models::{
        AppointmentStatus, DateException, DayAvailability, ExistingAppointment, WeeklyHour,
    };
    use crate::time::ClockTime;
    use crate::weekly::compute_weekly_availability;
    use chrono::{DateTime, NaiveDate, TimeZone, Utc};
    use chrono_tz::Tz;

    fn t(s: &str) -> ClockTime {
        s.parse().expect("valid time")
    }

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 5).unwrap()
    }

    fn utc(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 5, h, m, 0).unwrap()
    }

    fn monday_only() -> Vec<WeeklyHour> {
        vec![WeeklyHour::open(1, t("09:00"), t("17:00"))]
    }

    fn slot(day: &DayAvailability, time: &str) -> Option<bool> {
        day.slots
            .iter()
            .find(|s| s.time == t(time))
            .map(|s| s.available)
    }

    #[test]
    fn test_returns_seven_consecutive_days() {
        let days = compute_weekly_availability(&monday_only(), &[], &[], monday(), 30, 5, Tz::UTC)
            .unwrap();
        assert_eq!(days.len(), 7);
        for (offset, day) in days.iter().enumerate() {
            assert_eq!(day.date, monday() + chrono::Duration::days(offset as i64));
        }
        assert_eq!(days[0].day_name, "Segunda-feira");
        assert_eq!(days[6].day_name, "Domingo");
        // only Monday is configured
        assert!(days[1..].iter().all(|d| d.slots.is_empty()));
    }

    #[test]
    fn test_first_slots_follow_duration_and_buffer() {
        let days = compute_weekly_availability(&monday_only(), &[], &[], monday(), 30, 5, Tz::UTC)
            .unwrap();
        let times: Vec<String> = days[0].slots.iter().take(3).map(|s| s.time.to_string()).collect();
        assert_eq!(times, vec!["09:00", "09:35", "10:10"]);
        assert!(days[0].slots.iter().all(|s| s.available));
    }

    #[test]
    fn test_closed_exception_empties_the_day() {
        let exceptions = vec![DateException::closed(monday(), Some("Feriado"))];
        let days =
            compute_weekly_availability(&monday_only(), &exceptions, &[], monday(), 30, 5, Tz::UTC)
                .unwrap();
        assert!(days[0].slots.is_empty());
    }

    #[test]
    fn test_booked_slot_is_unavailable_and_adjacent_slot_is_free() {
        let booked = vec![ExistingAppointment::new(utc(10, 0), utc(10, 30))];
        let days =
            compute_weekly_availability(&monday_only(), &[], &booked, monday(), 30, 0, Tz::UTC)
                .unwrap();
        let day = &days[0];
        assert_eq!(slot(day, "09:30"), Some(true));
        assert_eq!(slot(day, "10:00"), Some(false));
        assert_eq!(slot(day, "10:30"), Some(true));
    }

    #[test]
    fn test_booked_interval_blocks_overlapping_buffered_slots() {
        let booked = vec![ExistingAppointment::new(utc(10, 0), utc(10, 30))];
        let days =
            compute_weekly_availability(&monday_only(), &[], &booked, monday(), 30, 5, Tz::UTC)
                .unwrap();
        let day = &days[0];
        assert_eq!(slot(day, "09:00"), Some(true));
        assert_eq!(slot(day, "09:35"), Some(false));
        assert_eq!(slot(day, "10:10"), Some(false));
        assert_eq!(slot(day, "10:45"), Some(true));
        assert_eq!(slot(day, "10:35"), None);
    }

    #[test]
    fn test_cancelled_appointments_do_not_block() {
        let mut cancelled = ExistingAppointment::new(utc(10, 0), utc(10, 30));
        cancelled.status = AppointmentStatus::Cancelled;
        let days =
            compute_weekly_availability(&monday_only(), &[], &[cancelled], monday(), 30, 0, Tz::UTC)
                .unwrap();
        assert_eq!(slot(&days[0], "10:00"), Some(true));
    }

    #[test]
    fn test_slots_are_local_to_business_time_zone() {
        // 13:00 UTC is 10:00 in São Paulo
        let booked = vec![ExistingAppointment::new(utc(13, 0), utc(13, 30))];
        let days = compute_weekly_availability(
            &monday_only(),
            &[],
            &booked,
            monday(),
            30,
            0,
            Tz::America__Sao_Paulo,
        )
        .unwrap();
        assert_eq!(slot(&days[0], "10:00"), Some(false));
        assert_eq!(slot(&days[0], "13:00"), Some(true));
    }

    #[test]
    fn test_nonexistent_local_times_are_unavailable() {
        // Zurich skips 02:00-03:00 on 2025-03-30
        let sunday = NaiveDate::from_ymd_opt(2025, 3, 30).unwrap();
        let weekly = vec![WeeklyHour::open(0, t("01:00"), t("04:00"))];
        let days =
            compute_weekly_availability(&weekly, &[], &[], sunday, 30, 0, Tz::Europe__Zurich)
                .unwrap();
        let day = &days[0];
        assert_eq!(day.slots.len(), 6);
        assert_eq!(slot(day, "01:30"), Some(true));
        assert_eq!(slot(day, "02:00"), Some(false));
        assert_eq!(slot(day, "02:30"), Some(false));
        assert_eq!(slot(day, "03:00"), Some(true));
    }

    #[test]
    fn test_zero_duration_is_an_error() {
        assert!(
            compute_weekly_availability(&monday_only(), &[], &[], monday(), 0, 0, Tz::UTC).is_err()
        );
    }
}
