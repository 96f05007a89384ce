// --- File: crates/agendify_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

// --- Logging Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct LoggingConfig {
    /// trace, debug, info, warn or error. Defaults to info.
    pub level: Option<String>,
    /// When set, logs are also written to a daily rolling file in this directory.
    pub directory: Option<String>,
    pub file_prefix: Option<String>,
}

// --- Scheduling Config ---
// Fallbacks used for businesses that have no explicit time zone or booking settings.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SchedulingConfig {
    /// IANA time zone name, e.g. "America/Sao_Paulo"
    #[serde(default = "default_time_zone")]
    pub time_zone: String,
    #[serde(default = "default_duration_minutes")]
    pub default_duration_minutes: u32,
    #[serde(default)]
    pub buffer_minutes: u32,
    #[serde(default = "default_max_advance_booking_days")]
    pub max_advance_booking_days: u32,
    #[serde(default)]
    pub min_advance_booking_hours: f64,
    #[serde(default = "default_true")]
    pub allow_same_day_booking: bool,
}

fn default_time_zone() -> String {
    "America/Sao_Paulo".to_string()
}

fn default_duration_minutes() -> u32 {
    30
}

fn default_max_advance_booking_days() -> u32 {
    30
}

fn default_true() -> bool {
    true
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        Self {
            time_zone: default_time_zone(),
            default_duration_minutes: default_duration_minutes(),
            buffer_minutes: 0,
            max_advance_booking_days: default_max_advance_booking_days(),
            min_advance_booking_hours: 0.0,
            allow_same_day_booking: true,
        }
    }
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    // Server config is mandatory
    pub server: ServerConfig,

    // --- Runtime Flags (optional in config file, default to false) ---
    #[serde(default)]
    pub use_availability: bool,

    // --- Optional Sections ---
    #[serde(default)]
    pub logging: Option<LoggingConfig>,
    #[serde(default)]
    pub scheduling: Option<SchedulingConfig>,
}
