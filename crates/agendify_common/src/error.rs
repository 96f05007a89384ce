// --- File: crates/agendify_common/src/error.rs ---
use agendify_engine::EngineError;
use std::fmt;
use thiserror::Error;

/// The base error type for all Agendify errors.
///
/// Each crate can extend this by implementing From<SpecificError> for AgendifyError.
#[derive(Error, Debug)]
pub enum AgendifyError {
    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error occurred during validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error occurred in the persistence layer
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Error occurred due to a resource not being found
    #[error("Not found: {0}")]
    NotFoundError(String),

    /// A feature is switched off at runtime
    #[error("Service unavailable: {0}")]
    UnavailableError(String),

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for converting errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for AgendifyError {
    fn status_code(&self) -> u16 {
        match self {
            AgendifyError::ConfigError(_) => 500,
            AgendifyError::ValidationError(_) => 400,
            AgendifyError::StorageError(_) => 500,
            AgendifyError::NotFoundError(_) => 404,
            AgendifyError::UnavailableError(_) => 503,
            AgendifyError::InternalError(_) => 500,
        }
    }
}

/// A trait for adding context to errors.
pub trait Context<T, E> {
    /// Adds context to an error.
    fn context<C>(self, context: C) -> Result<T, AgendifyError>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Adds context to an error with a lazy context provider.
    fn with_context<C, F>(self, f: F) -> Result<T, AgendifyError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E: std::error::Error + Send + Sync + 'static> Context<T, E> for Result<T, E> {
    fn context<C>(self, context: C) -> Result<T, AgendifyError>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|error| AgendifyError::InternalError(format!("{}: {}", context, error)))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, AgendifyError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|error| AgendifyError::InternalError(format!("{}: {}", f(), error)))
    }
}

// Engine errors are always caused by the caller's input
impl From<EngineError> for AgendifyError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::InvalidTimezone(zone) => {
                AgendifyError::ValidationError(format!("Invalid timezone: {}", zone))
            }
            other => AgendifyError::ValidationError(other.to_string()),
        }
    }
}

impl From<std::io::Error> for AgendifyError {
    fn from(err: std::io::Error) -> Self {
        AgendifyError::InternalError(err.to_string())
    }
}

// Utility functions for error handling
pub fn config_error<T: fmt::Display>(message: T) -> AgendifyError {
    AgendifyError::ConfigError(message.to_string())
}

pub fn validation_error<T: fmt::Display>(message: T) -> AgendifyError {
    AgendifyError::ValidationError(message.to_string())
}

pub fn not_found<T: fmt::Display>(message: T) -> AgendifyError {
    AgendifyError::NotFoundError(message.to_string())
}
