//! Booking-window policy: how soon and how far ahead a booking may be made.
//!
//! The current instant is always passed in by the caller.

use crate::models::{BookingDecision, BookingSettings};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use tracing::debug;

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Decides whether `proposed` is inside the business's booking window.
///
/// Rules are applied in order and the first failing one wins:
/// minimum advance (inclusive), maximum advance in whole days rounded up, and
/// same-day booking, where "same day" is the calendar day in `time_zone`.
pub fn validate_booking_window(
    proposed: DateTime<Utc>,
    now: DateTime<Utc>,
    settings: &BookingSettings,
    time_zone: Tz,
) -> BookingDecision {
    let hours_until = (proposed - now).num_seconds() as f64 / SECONDS_PER_HOUR;

    if hours_until < settings.min_advance_booking_hours {
        debug!(
            "Rejecting {}: {:.2}h ahead, minimum is {}h",
            proposed, hours_until, settings.min_advance_booking_hours
        );
        return BookingDecision::rejected(format!(
            "É necessário agendar com pelo menos {} de antecedência",
            plural(settings.min_advance_booking_hours, "hora", "horas")
        ));
    }

    let days_until = (hours_until / 24.0).ceil();
    if days_until > f64::from(settings.max_advance_booking_days) {
        debug!(
            "Rejecting {}: {} days ahead, maximum is {}",
            proposed, days_until, settings.max_advance_booking_days
        );
        return BookingDecision::rejected(format!(
            "Não é possível agendar com mais de {} de antecedência",
            plural(f64::from(settings.max_advance_booking_days), "dia", "dias")
        ));
    }

    if !settings.allow_same_day_booking {
        let proposed_day = proposed.with_timezone(&time_zone).date_naive();
        let today = now.with_timezone(&time_zone).date_naive();
        if proposed_day == today {
            debug!("Rejecting {}: same-day booking disabled", proposed);
            return BookingDecision::rejected("Não são permitidos agendamentos para o mesmo dia");
        }
    }

    BookingDecision::valid()
}

fn plural(quantity: f64, singular: &str, plural: &str) -> String {
    let unit = if quantity == 1.0 { singular } else { plural };
    format!("{quantity} {unit}")
}
