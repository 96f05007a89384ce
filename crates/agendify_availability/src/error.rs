// --- File: crates/agendify_availability/src/error.rs ---
use agendify_common::{not_found, validation_error, AgendifyError, HttpStatusCode};
use agendify_engine::EngineError;
use axum::http::StatusCode;
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum AvailabilityError {
    #[error("Availability service is disabled.")]
    Disabled,
    #[error("Business not found: {0}")]
    BusinessNotFound(String),
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error("Server configuration error: {0}")]
    Config(String),
    #[error(transparent)]
    Store(#[from] AgendifyError),
}

impl HttpStatusCode for AvailabilityError {
    fn status_code(&self) -> u16 {
        match self {
            AvailabilityError::Disabled => 503,
            AvailabilityError::BusinessNotFound(_) => 404,
            AvailabilityError::InvalidRequest(_) => 400,
            AvailabilityError::Engine(_) => 400,
            AvailabilityError::Config(_) => 500,
            AvailabilityError::Store(err) => err.status_code(),
        }
    }
}

impl From<AvailabilityError> for AgendifyError {
    fn from(err: AvailabilityError) -> Self {
        match err {
            AvailabilityError::Disabled => AgendifyError::UnavailableError(err.to_string()),
            AvailabilityError::BusinessNotFound(id) => not_found(id),
            AvailabilityError::InvalidRequest(msg) => validation_error(msg),
            AvailabilityError::Engine(engine) => engine.into(),
            AvailabilityError::Config(msg) => AgendifyError::ConfigError(msg),
            AvailabilityError::Store(inner) => inner,
        }
    }
}

// Handlers answer with `(StatusCode, String)` like every other feature router
impl From<AvailabilityError> for (StatusCode, String) {
    fn from(err: AvailabilityError) -> Self {
        let status =
            StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            warn!("Availability request failed: {}", err);
        }
        (status, err.to_string())
    }
}
