// File: crates/agendify_availability/src/handlers.rs
use crate::error::AvailabilityError;
use crate::logic::{
    appointment_range, parse_date, parse_start_time, preview_availability, validate_calendar,
    AppointmentsUpdateRequest, AvailabilityPreviewRequest, AvailabilityPreviewResponse,
    AvailabilityQuery, CalendarUpdateRequest, DayQuery, DayViewResponse, ResolvedCalendar,
    UpdateResponse, ValidateBookingRequest, WeeklyAvailabilityResponse, WEEK_DAYS,
};
use crate::store::DynScheduleStore;
use agendify_common::{is_availability_enabled, BusinessCalendarRecord};
use agendify_config::AppConfig;
use agendify_engine::{validate_slot_length, BookingDecision};
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::Json,
};
use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use tracing::info;

/// Source of "now" for booking-window checks.
pub type Clock = fn() -> DateTime<Utc>;

// Shared state for the availability handlers
#[derive(Clone)]
pub struct AvailabilityState {
    pub config: Arc<AppConfig>,
    pub store: Arc<DynScheduleStore>,
    pub clock: Clock,
}

impl AvailabilityState {
    pub fn new(config: Arc<AppConfig>, store: Arc<DynScheduleStore>) -> Self {
        Self {
            config,
            store,
            clock: Utc::now,
        }
    }

    fn ensure_enabled(&self) -> Result<(), AvailabilityError> {
        if is_availability_enabled(&self.config) {
            Ok(())
        } else {
            Err(AvailabilityError::Disabled)
        }
    }

    async fn resolved_calendar(
        &self,
        business_id: &str,
    ) -> Result<ResolvedCalendar, AvailabilityError> {
        let record = self
            .store
            .get_calendar(business_id)
            .await?
            .ok_or_else(|| AvailabilityError::BusinessNotFound(business_id.to_string()))?;
        ResolvedCalendar::new(record, self.config.scheduling.as_ref())
    }
}

type HandlerResult<T> = Result<Json<T>, (StatusCode, String)>;

fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AvailabilityError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| AvailabilityError::InvalidRequest(rejection.body_text()))
}

/// Seven days of slots for a business.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/businesses/{business_id}/availability",
    params(
        ("business_id" = String, Path, description = "Business identifier"),
        AvailabilityQuery
    ),
    responses(
        (status = 200, description = "Weekly availability", body = WeeklyAvailabilityResponse),
        (status = 400, description = "Invalid date or duration"),
        (status = 404, description = "Unknown business"),
        (status = 503, description = "Availability service disabled")
    ),
    tag = "Availability"
))]
pub async fn get_weekly_availability_handler(
    State(state): State<Arc<AvailabilityState>>,
    Path(business_id): Path<String>,
    Query(query): Query<AvailabilityQuery>,
) -> HandlerResult<WeeklyAvailabilityResponse> {
    state.ensure_enabled()?;
    let start_date = parse_date(&query.start_date, "start_date")?;
    let resolved = state.resolved_calendar(&business_id).await?;

    let (from, to) = appointment_range(start_date, WEEK_DAYS);
    let appointments = state
        .store
        .get_appointments(&business_id, from, to)
        .await
        .map_err(AvailabilityError::from)?;

    info!(
        "Weekly availability for {} from {} ({} appointments)",
        business_id,
        start_date,
        appointments.len()
    );
    Ok(Json(resolved.weekly_view(
        &appointments,
        start_date,
        query.duration_minutes,
    )?))
}

/// Effective hours and slots for one date.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/businesses/{business_id}/day",
    params(
        ("business_id" = String, Path, description = "Business identifier"),
        DayQuery
    ),
    responses(
        (status = 200, description = "Day view", body = DayViewResponse),
        (status = 400, description = "Invalid date"),
        (status = 404, description = "Unknown business"),
        (status = 503, description = "Availability service disabled")
    ),
    tag = "Availability"
))]
pub async fn get_day_view_handler(
    State(state): State<Arc<AvailabilityState>>,
    Path(business_id): Path<String>,
    Query(query): Query<DayQuery>,
) -> HandlerResult<DayViewResponse> {
    state.ensure_enabled()?;
    let date = parse_date(&query.date, "date")?;
    let resolved = state.resolved_calendar(&business_id).await?;

    let (from, to) = appointment_range(date, 1);
    let appointments = state
        .store
        .get_appointments(&business_id, from, to)
        .await
        .map_err(AvailabilityError::from)?;

    Ok(Json(resolved.day_view(
        &appointments,
        date,
        query.duration_minutes,
    )?))
}

/// Accepts or rejects a proposed appointment start.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/businesses/{business_id}/bookings/validate",
    params(("business_id" = String, Path, description = "Business identifier")),
    request_body = ValidateBookingRequest,
    responses(
        (status = 200, description = "Booking decision", body = BookingDecision),
        (status = 400, description = "Malformed request"),
        (status = 404, description = "Unknown business"),
        (status = 503, description = "Availability service disabled")
    ),
    tag = "Availability"
))]
pub async fn validate_booking_handler(
    State(state): State<Arc<AvailabilityState>>,
    Path(business_id): Path<String>,
    payload: Result<Json<ValidateBookingRequest>, JsonRejection>,
) -> HandlerResult<BookingDecision> {
    state.ensure_enabled()?;
    let request = json_body(payload)?;
    let proposed_start = parse_start_time(&request.start_time)?;
    let resolved = state.resolved_calendar(&business_id).await?;

    let duration = request
        .duration_minutes
        .unwrap_or(resolved.settings.default_duration);
    validate_slot_length(duration, 0).map_err(AvailabilityError::from)?;
    let appointments = state
        .store
        .get_appointments(
            &business_id,
            proposed_start,
            proposed_start + Duration::minutes(i64::from(duration)),
        )
        .await
        .map_err(AvailabilityError::from)?;

    let decision = resolved.evaluate(
        &appointments,
        proposed_start,
        Some(duration),
        (state.clock)(),
    )?;
    info!(
        "Booking validation for {} at {}: valid={}",
        business_id, proposed_start, decision.is_valid
    );
    Ok(Json(decision))
}

/// Weekly availability computed from the request body alone.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/availability/preview",
    request_body = AvailabilityPreviewRequest,
    responses(
        (status = 200, description = "Weekly availability", body = AvailabilityPreviewResponse),
        (status = 400, description = "Invalid schedule"),
        (status = 503, description = "Availability service disabled")
    ),
    tag = "Availability"
))]
pub async fn preview_availability_handler(
    State(state): State<Arc<AvailabilityState>>,
    payload: Result<Json<AvailabilityPreviewRequest>, JsonRejection>,
) -> HandlerResult<AvailabilityPreviewResponse> {
    state.ensure_enabled()?;
    let request = json_body(payload)?;
    Ok(Json(preview_availability(
        &request,
        state.config.scheduling.as_ref(),
    )?))
}

/// Loads or replaces a business's calendar.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    put,
    path = "/admin/businesses/{business_id}/calendar",
    params(("business_id" = String, Path, description = "Business identifier")),
    request_body = CalendarUpdateRequest,
    responses(
        (status = 200, description = "Calendar stored", body = UpdateResponse),
        (status = 400, description = "Invalid calendar configuration"),
        (status = 503, description = "Availability service disabled")
    ),
    tag = "Availability Admin"
))]
pub async fn put_calendar_handler(
    State(state): State<Arc<AvailabilityState>>,
    Path(business_id): Path<String>,
    payload: Result<Json<CalendarUpdateRequest>, JsonRejection>,
) -> HandlerResult<UpdateResponse> {
    state.ensure_enabled()?;
    let request = json_body(payload)?;
    validate_calendar(&request, state.config.scheduling.as_ref())?;

    let record = BusinessCalendarRecord {
        business_id: business_id.clone(),
        time_zone: request.time_zone,
        weekly_hours: request.weekly_hours,
        exceptions: request.exceptions,
        settings: request.settings,
    };
    state
        .store
        .put_calendar(record)
        .await
        .map_err(AvailabilityError::from)?;

    info!("Calendar updated for business {}", business_id);
    Ok(Json(UpdateResponse {
        success: true,
        message: format!("Calendar for {} updated.", business_id),
    }))
}

/// Replaces the booked appointments of a known business.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    put,
    path = "/admin/businesses/{business_id}/appointments",
    params(("business_id" = String, Path, description = "Business identifier")),
    request_body = AppointmentsUpdateRequest,
    responses(
        (status = 200, description = "Appointments stored", body = UpdateResponse),
        (status = 400, description = "Malformed appointments"),
        (status = 404, description = "Unknown business"),
        (status = 503, description = "Availability service disabled")
    ),
    tag = "Availability Admin"
))]
pub async fn put_appointments_handler(
    State(state): State<Arc<AvailabilityState>>,
    Path(business_id): Path<String>,
    payload: Result<Json<AppointmentsUpdateRequest>, JsonRejection>,
) -> HandlerResult<UpdateResponse> {
    state.ensure_enabled()?;
    let request = json_body(payload)?;
    if let Some(bad) = request.appointments.iter().find(|a| a.end <= a.start) {
        return Err(AvailabilityError::InvalidRequest(format!(
            "appointment ending at {} must end after it starts",
            bad.end
        ))
        .into());
    }
    // 404 for businesses without a calendar
    state.resolved_calendar(&business_id).await?;

    let count = request.appointments.len();
    state
        .store
        .replace_appointments(&business_id, request.appointments)
        .await
        .map_err(AvailabilityError::from)?;

    info!("Stored {} appointments for business {}", count, business_id);
    Ok(Json(UpdateResponse {
        success: true,
        message: format!("{} appointments stored for {}.", count, business_id),
    }))
}
