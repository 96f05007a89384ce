#[cfg(test)]
mod tests {
    use crate::booking_window::validate_booking_window;
    use crate::calendar::resolve_day;
    use crate::conflict::{has_conflict, Interval};
    use crate::models::{BookingSettings, DateException, WeeklyHour};
    use crate::slots::generate_slots;
    use crate::time::{from_minutes, is_valid_time, to_minutes, ClockTime};
    use chrono::{Duration, NaiveDate, TimeZone, Utc};
    use chrono_tz::Tz;
    use proptest::prelude::*;

    // Helper strategy producing an ordered pair of times within one day
    fn window() -> impl Strategy<Value = (u32, u32)> {
        (0..1439u32).prop_flat_map(|open| (Just(open), (open + 1)..1440u32))
    }

    fn interval() -> impl Strategy<Value = Interval<i64>> {
        (-1000..1000i64, 1..500i64).prop_map(|(start, len)| Interval::new(start, start + len))
    }

    proptest! {
        #[test]
        fn test_minutes_round_trip(m in 0..1440u32) {
            let text = from_minutes(m);
            prop_assert!(is_valid_time(&text));
            prop_assert_eq!(to_minutes(&text).unwrap(), m);
        }

        #[test]
        fn test_slots_stay_inside_window(
            (open, close) in window(),
            duration in 1..240u32,
            buffer in 0..60u32,
        ) {
            let open_t = ClockTime::from_minutes(open).unwrap();
            let close_t = ClockTime::from_minutes(close).unwrap();
            let slots = generate_slots(open_t, close_t, duration, buffer).unwrap();

            for slot in &slots {
                prop_assert!(slot.minutes() >= open);
                prop_assert!(slot.minutes() + duration <= close);
            }
            // No two slots overlap
            for pair in slots.windows(2) {
                prop_assert!(pair[1].minutes() >= pair[0].minutes() + duration);
                prop_assert_eq!(pair[1].minutes() - pair[0].minutes(), duration + buffer);
            }
            // Nothing more fits after the last slot
            let next = slots
                .last()
                .map(|s| s.minutes() + duration + buffer)
                .unwrap_or(open);
            prop_assert!(next + duration > close);
        }

        #[test]
        fn test_conflict_is_symmetric(a in interval(), b in interval()) {
            prop_assert_eq!(has_conflict(&a, &[b]), has_conflict(&b, &[a]));
        }

        #[test]
        fn test_adjacent_intervals_do_not_conflict(a in interval(), len in 1..500i64) {
            let after = Interval::new(a.end, a.end + len);
            prop_assert!(!has_conflict(&a, &[after]));
            prop_assert!(!has_conflict(&after, &[a]));
        }

        #[test]
        fn test_closed_exception_always_closes(
            day_offset in 0..365i64,
            (open, close) in window(),
        ) {
            let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap() + Duration::days(day_offset);
            let weekly: Vec<WeeklyHour> = (0..7)
                .map(|dow| WeeklyHour::open(
                    dow,
                    ClockTime::from_minutes(open).unwrap(),
                    ClockTime::from_minutes(close).unwrap(),
                ))
                .collect();
            let exceptions = vec![DateException::closed(date, None)];
            let window = resolve_day(date, &weekly, &exceptions);
            prop_assert!(!window.is_open);
            prop_assert!(window.bounds().is_none());
        }

        #[test]
        fn test_minimum_advance_is_inclusive(min_hours in 0..72u32) {
            let now = Utc.with_ymd_and_hms(2025, 5, 5, 12, 0, 0).unwrap();
            let settings = BookingSettings {
                default_duration: 30,
                buffer_time: 0,
                max_advance_booking_days: 365,
                min_advance_booking_hours: f64::from(min_hours),
                allow_same_day_booking: true,
            };
            let exact = now + Duration::hours(i64::from(min_hours));
            prop_assert!(validate_booking_window(exact, now, &settings, Tz::UTC).is_valid);
            let hour_less = exact - Duration::hours(1);
            prop_assert!(!validate_booking_window(hour_less, now, &settings, Tz::UTC).is_valid);
        }
    }
}
