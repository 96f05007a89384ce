//! Runtime feature flags for the Agendify application.
//!
//! Compile-time features (`openapi`) are handled with `#[cfg(feature = "...")]`;
//! this module covers the flags read from configuration.

use agendify_config::AppConfig;

/// The availability endpoints only need the runtime flag; the scheduling
/// section is optional and falls back to built-in defaults.
pub fn is_availability_enabled(config: &AppConfig) -> bool {
    config.use_availability
}
