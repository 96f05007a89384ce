// --- File: crates/agendify_common/src/lib.rs ---

// Declare modules within this crate
pub mod error; // Error handling
pub mod features; // Feature flag handling
pub mod logging; // Logging utilities
pub mod routes; // Shared routes
pub mod services; // Persistence abstractions

// Re-export the routes function to be used by the main backend service
pub use routes::routes;

// Re-export error types and utilities for easier access
pub use error::{
    config_error, not_found, validation_error, AgendifyError, Context, HttpStatusCode,
};

// Re-export logging utilities for easier access
pub use logging::{init_from_config, init_with_level};

pub use features::is_availability_enabled;

pub use services::{BoxFuture, BusinessCalendarRecord, ScheduleStore};
