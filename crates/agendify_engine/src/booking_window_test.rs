#[cfg(test)]
mod tests {
    use crate::booking_window::validate_booking_window;
    use crate::error::EngineError;
    use crate::models::{BookingDecision, BookingSettings};
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use chrono_tz::Tz;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 5, 12, 0, 0).unwrap()
    }

    fn settings(min_hours: f64, max_days: u32, same_day: bool) -> BookingSettings {
        BookingSettings {
            default_duration: 30,
            buffer_time: 0,
            max_advance_booking_days: max_days,
            min_advance_booking_hours: min_hours,
            allow_same_day_booking: same_day,
        }
    }

    /// Decision for a proposal `ahead` of [`now`], in UTC.
    fn decide(ahead: Duration, policy: &BookingSettings) -> BookingDecision {
        validate_booking_window(now() + ahead, now(), policy, Tz::UTC)
    }

    #[test]
    fn test_rejects_inside_minimum_advance() {
        let decision = decide(Duration::hours(1), &settings(2.0, 30, true));
        assert!(!decision.is_valid);
        let reason = decision.reason.expect("reason");
        assert!(reason.contains("2 horas"), "unexpected reason: {reason}");
    }

    #[test]
    fn test_minimum_advance_boundary_is_inclusive() {
        let policy = settings(2.0, 30, true);
        assert!(decide(Duration::hours(2), &policy).is_valid);
        assert!(!decide(Duration::minutes(119), &policy).is_valid);
    }

    #[test]
    fn test_fractional_minimum_in_reason() {
        let decision = validate_booking_window(
            now() + Duration::minutes(30),
            now(),
            &settings(1.5, 30, true),
            Tz::UTC,
        );
        assert_eq!(
            decision.reason.as_deref(),
            Some("É necessário agendar com pelo menos 1.5 horas de antecedência")
        );
    }

    #[test]
    fn test_past_proposal_is_rejected_even_without_minimum() {
        let decision = decide(Duration::minutes(-5), &settings(0.0, 30, true));
        assert!(!decision.is_valid);
    }

    #[test]
    fn test_rejects_beyond_maximum_advance() {
        let decision = decide(Duration::days(31), &settings(0.0, 30, true));
        assert!(!decision.is_valid);
        assert!(decision.reason.unwrap().contains("30 dias"));
    }

    #[test]
    fn test_maximum_advance_rounds_partial_days_up() {
        let policy = settings(0.0, 30, true);
        assert!(decide(Duration::days(30), &policy).is_valid);
        assert!(!decide(Duration::days(30) + Duration::minutes(1), &policy).is_valid);
    }

    #[test]
    fn test_same_day_rejected_when_disabled() {
        let policy = settings(2.0, 30, false);
        let later_today = now() + Duration::hours(3);
        let decision = validate_booking_window(later_today, now(), &policy, Tz::UTC);
        assert!(!decision.is_valid);
        assert_eq!(
            decision.reason.as_deref(),
            Some("Não são permitidos agendamentos para o mesmo dia")
        );

        let tomorrow = now() + Duration::hours(21);
        assert!(validate_booking_window(tomorrow, now(), &policy, Tz::UTC).is_valid);
    }

    #[test]
    fn test_same_day_allowed_when_enabled() {
        let decision = decide(Duration::hours(3), &settings(2.0, 30, true));
        assert!(decision.is_valid);
        assert!(decision.reason.is_none());
    }

    #[test]
    fn test_same_day_uses_business_time_zone() {
        // 02:00 UTC is still the previous evening in São Paulo (UTC-3)
        let now = Utc.with_ymd_and_hms(2025, 5, 5, 2, 0, 0).unwrap();
        let proposed = Utc.with_ymd_and_hms(2025, 5, 5, 4, 0, 0).unwrap();
        let policy = settings(0.0, 30, false);

        assert!(!validate_booking_window(proposed, now, &policy, Tz::UTC).is_valid);
        assert!(validate_booking_window(proposed, now, &policy, Tz::America__Sao_Paulo).is_valid);
    }

    #[test]
    fn test_first_failing_rule_wins() {
        // violates both the minimum advance and the same-day rule
        let decision = decide(Duration::hours(1), &settings(2.0, 30, false));
        assert!(decision.reason.unwrap().contains("2 horas"));
    }

    #[test]
    fn test_settings_validation_bounds() {
        assert!(settings(2.0, 30, true).validate().is_ok());

        let huge_buffer = BookingSettings {
            buffer_time: u32::MAX,
            ..settings(0.0, 30, true)
        };
        assert!(matches!(
            huge_buffer.validate(),
            Err(EngineError::InvalidSettings(_))
        ));

        let huge_duration = BookingSettings {
            default_duration: 24 * 60 + 1,
            ..settings(0.0, 30, true)
        };
        assert!(huge_duration.validate().is_err());

        let full_day = BookingSettings {
            default_duration: 24 * 60,
            buffer_time: 24 * 60,
            ..settings(0.0, 30, true)
        };
        assert!(full_day.validate().is_ok());

        assert!(settings(-1.0, 30, true).validate().is_err());
        assert!(settings(f64::NAN, 30, true).validate().is_err());
        assert!(settings(0.0, 0, true).validate().is_err());
    }
}
