#[cfg(test)]
mod tests {
    use crate::error::EngineError;
    use crate::models::EffectiveWindow;
    use crate::slots::{generate_slots, generate_window_slots, validate_slot_length};
    use crate::time::ClockTime;

    fn t(s: &str) -> ClockTime {
        s.parse().expect("valid time")
    }

    fn render(slots: &[ClockTime]) -> Vec<String> {
        slots.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_duration_plus_buffer_step() {
        // Test case: 09:00-17:00, 30 minute slots with a 5 minute buffer
        let slots = generate_slots(t("09:00"), t("17:00"), 30, 5).unwrap();
        assert_eq!(render(&slots[..3]), vec!["09:00", "09:35", "10:10"]);
        // 09:00 + 13 * 35 = 16:35 would end at 17:05
        assert_eq!(slots.last().unwrap().to_string(), "16:00");
        assert_eq!(slots.len(), 13);
    }

    #[test]
    fn test_zero_buffer_packs_back_to_back() {
        let slots = generate_slots(t("09:00"), t("11:00"), 30, 0).unwrap();
        assert_eq!(render(&slots), vec!["09:00", "09:30", "10:00", "10:30"]);
    }

    #[test]
    fn test_slot_ending_exactly_at_close_is_kept() {
        let slots = generate_slots(t("09:00"), t("10:00"), 60, 0).unwrap();
        assert_eq!(render(&slots), vec!["09:00"]);
    }

    #[test]
    fn test_trailing_partial_slot_is_dropped() {
        let slots = generate_slots(t("09:00"), t("10:50"), 45, 0).unwrap();
        assert_eq!(render(&slots), vec!["09:00", "09:45"]);
    }

    #[test]
    fn test_window_shorter_than_duration_is_empty() {
        let slots = generate_slots(t("09:00"), t("09:20"), 30, 0).unwrap();
        assert!(slots.is_empty());
    }

    #[test]
    fn test_inverted_or_empty_window_is_empty() {
        assert!(generate_slots(t("17:00"), t("09:00"), 30, 0).unwrap().is_empty());
        assert!(generate_slots(t("09:00"), t("09:00"), 30, 0).unwrap().is_empty());
    }

    #[test]
    fn test_zero_duration_is_rejected() {
        assert!(matches!(
            generate_slots(t("09:00"), t("17:00"), 0, 5),
            Err(EngineError::InvalidDuration(_))
        ));
    }

    #[test]
    fn test_oversized_duration_or_buffer_is_rejected() {
        for (duration, buffer) in [(u32::MAX, 0), (1, u32::MAX), (1441, 0), (30, 1441)] {
            assert!(
                matches!(
                    generate_slots(t("09:00"), t("17:00"), duration, buffer),
                    Err(EngineError::InvalidDuration(_))
                ),
                "duration {duration}, buffer {buffer}"
            );
        }
        // a full day of slot plus a full day of buffer is the upper bound
        assert!(validate_slot_length(1440, 1440).is_ok());
        assert!(generate_slots(t("00:00"), t("23:59"), 1440, 1440).unwrap().is_empty());

        let closed = EffectiveWindow {
            is_open: false,
            open_time: None,
            close_time: None,
        };
        assert!(generate_window_slots(&closed, 30, u32::MAX).is_err());
    }

    #[test]
    fn test_late_window_near_midnight() {
        let slots = generate_slots(t("22:00"), t("23:59"), 60, 0).unwrap();
        assert_eq!(render(&slots), vec!["22:00"]);
    }

    #[test]
    fn test_generation_is_repeatable() {
        let first = generate_slots(t("08:15"), t("12:40"), 25, 10).unwrap();
        let second = generate_slots(t("08:15"), t("12:40"), 25, 10).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_window_slots_for_closed_window() {
        assert!(generate_window_slots(&EffectiveWindow::CLOSED, 30, 0)
            .unwrap()
            .is_empty());

        let incomplete = EffectiveWindow {
            is_open: true,
            open_time: Some(t("09:00")),
            close_time: None,
        };
        assert!(generate_window_slots(&incomplete, 30, 0).unwrap().is_empty());

        let open = EffectiveWindow {
            is_open: true,
            open_time: Some(t("09:00")),
            close_time: Some(t("10:00")),
        };
        assert_eq!(
            render(&generate_window_slots(&open, 30, 0).unwrap()),
            vec!["09:00", "09:30"]
        );
    }
}
