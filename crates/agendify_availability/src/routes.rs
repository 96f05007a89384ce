// --- File: crates/agendify_availability/src/routes.rs ---

use crate::handlers::{
    get_day_view_handler, get_weekly_availability_handler, preview_availability_handler,
    put_appointments_handler, put_calendar_handler, validate_booking_handler, AvailabilityState,
};
use crate::store::DynScheduleStore;
use agendify_config::AppConfig;
use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

/// Creates a router containing all availability routes.
pub fn routes(config: Arc<AppConfig>, store: Arc<DynScheduleStore>) -> Router {
    router_with_state(Arc::new(AvailabilityState::new(config, store)))
}

/// Same as [`routes`] with a prepared state, e.g. one with a fixed clock.
pub fn router_with_state(state: Arc<AvailabilityState>) -> Router {
    Router::new()
        .route(
            "/businesses/{business_id}/availability",
            get(get_weekly_availability_handler),
        )
        .route("/businesses/{business_id}/day", get(get_day_view_handler))
        .route(
            "/businesses/{business_id}/bookings/validate",
            post(validate_booking_handler),
        )
        .route("/availability/preview", post(preview_availability_handler))
        .route(
            "/admin/businesses/{business_id}/calendar",
            put(put_calendar_handler),
        )
        .route(
            "/admin/businesses/{business_id}/appointments",
            put(put_appointments_handler),
        )
        .with_state(state)
}
