// File: crates/agendify_availability/src/doc.rs

#![cfg(feature = "openapi")]
use crate::logic::{
    AppointmentsUpdateRequest, AvailabilityPreviewRequest, AvailabilityPreviewResponse,
    AvailabilityQuery, CalendarUpdateRequest, DayQuery, DayViewResponse, UpdateResponse,
    ValidateBookingRequest, WeeklyAvailabilityResponse,
};
use agendify_engine::{
    AppointmentStatus, BookingDecision, BookingSettings, ClockTime, DateException,
    DayAvailability, EffectiveWindow, ExistingAppointment, SlotAvailability, WeeklyHour,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::get_weekly_availability_handler,
        crate::handlers::get_day_view_handler,
        crate::handlers::validate_booking_handler,
        crate::handlers::preview_availability_handler,
        crate::handlers::put_calendar_handler,
        crate::handlers::put_appointments_handler
    ),
    components(
        schemas(
            AvailabilityQuery,
            DayQuery,
            WeeklyAvailabilityResponse,
            DayViewResponse,
            ValidateBookingRequest,
            AvailabilityPreviewRequest,
            AvailabilityPreviewResponse,
            CalendarUpdateRequest,
            AppointmentsUpdateRequest,
            UpdateResponse,
            ClockTime,
            WeeklyHour,
            DateException,
            BookingSettings,
            AppointmentStatus,
            ExistingAppointment,
            EffectiveWindow,
            SlotAvailability,
            DayAvailability,
            BookingDecision
        )
    ),
    tags(
        (name = "Availability", description = "Business availability and booking validation"),
        (name = "Availability Admin", description = "Calendar and appointment snapshots")
    ),
    servers(
        (url = "/api", description = "Availability API server")
    )
)]
pub struct AvailabilityApiDoc;
