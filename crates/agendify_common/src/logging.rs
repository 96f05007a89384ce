//! Logging utilities for the Agendify application.
//!
//! This module provides a standardized approach to logging across all crates
//! in the Agendify workspace. It includes functions for initializing the
//! tracing subscriber, on stdout or additionally on rolling log files.

use agendify_config::LoggingConfig;
use std::str::FromStr;
use tracing::{info, Level};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{filter::Directive, fmt, prelude::*, EnvFilter};

/// Crate targets that get the configured level.
const TARGETS: [&str; 5] = [
    "agendify_backend",
    "agendify_availability",
    "agendify_common",
    "agendify_config",
    "agendify_engine",
];

fn filter_for(level: Level) -> EnvFilter {
    TARGETS
        .iter()
        .filter_map(|target| format!("{}={}", target, level).parse::<Directive>().ok())
        .fold(EnvFilter::from_default_env(), |filter, directive| {
            filter.add_directive(directive)
        })
}

/// Initialize the tracing subscriber with a specific log level.
///
/// Uses `try_init`, so calling it again (e.g. from several tests) is harmless.
///
/// # Examples
///
/// ```
/// use agendify_common::logging;
///
/// logging::init_with_level(tracing::Level::DEBUG);
/// ```
pub fn init_with_level(level: Level) {
    let result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_thread_ids(true)
                .with_thread_names(true),
        )
        .with(filter_for(level))
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }
}

/// Initialize logging from the `[logging]` config section.
///
/// With a `directory` set, a second layer writes to a daily rolling file. The
/// returned guard flushes that writer and must be held for the process lifetime.
pub fn init_from_config(config: Option<&LoggingConfig>) -> Option<WorkerGuard> {
    let level = config
        .and_then(|c| c.level.as_deref())
        .and_then(|l| Level::from_str(l).ok())
        .unwrap_or(Level::INFO);

    let Some(directory) = config.and_then(|c| c.directory.as_deref()) else {
        init_with_level(level);
        return None;
    };

    let prefix = config
        .and_then(|c| c.file_prefix.as_deref())
        .unwrap_or("agendify.log");
    let appender = tracing_appender::rolling::daily(directory, prefix);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let result = tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_line_number(true))
        .with(fmt::layer().with_ansi(false).with_writer(writer))
        .with(filter_for(level))
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {} (files in {})", level, directory);
    }
    Some(guard)
}
