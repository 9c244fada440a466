//! Structured logging with tracing
//!
//! Installs a global `tracing` subscriber with an `EnvFilter`, a plain or
//! JSON stdout layer and an optional daily-rolling file layer.

use crate::constants::LOG_FILTER_ENV;
use keylock_domain::error::{Error, Result};
use std::ffi::OsStr;
use std::path::Path;
use tracing::{Level, debug, error, info, warn};
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub use crate::config::LoggingConfig;

/// Initialize logging with the provided configuration
///
/// `KEYLOCK_LOG` takes precedence over `config.level` when set. Returns a
/// `Configuration` error instead of panicking when a global subscriber is
/// already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(&config.level));

    let file_appender = config.file_output.as_deref().map(|path| {
        tracing_appender::rolling::daily(
            path.parent().unwrap_or_else(|| Path::new(".")),
            path.file_stem().unwrap_or_else(|| OsStr::new("keylock")),
        )
    });

    // Option<Layer> is itself a Layer, so both formats share one registry chain.
    let (json_stdout, plain_stdout) = if config.json_format {
        (Some(fmt::layer().json().with_target(true)), None)
    } else {
        (None, Some(fmt::layer().with_target(true)))
    };
    let (json_file, plain_file) = match file_appender {
        Some(appender) if config.json_format => (
            Some(fmt::layer().json().with_writer(appender).with_ansi(false)),
            None,
        ),
        Some(appender) => (
            None,
            Some(fmt::layer().with_writer(appender).with_ansi(false)),
        ),
        None => (None, None),
    };

    Registry::default()
        .with(filter)
        .with(json_stdout)
        .with(plain_stdout)
        .with(json_file)
        .with(plain_file)
        .try_init()
        .map_err(|e| Error::configuration_with_source("Logging already initialized", e))?;

    info!("Logging initialized with level: {}", level);
    Ok(())
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.trim().to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::configuration(format!(
            "Invalid log level: {level}. Use trace, debug, info, warn, or error"
        ))),
    }
}

/// Log configuration loading status
pub fn log_config_loaded(config_path: &Path, success: bool) {
    if success {
        info!("Configuration loaded from {}", config_path.display());
    } else {
        warn!("Configuration file not found: {}", config_path.display());
    }
}

/// Log health check result
pub fn log_health_check(component: &str, healthy: bool, details: Option<&str>) {
    if healthy {
        debug!(component = component, "Health check passed");
    } else {
        error!(
            component = component,
            details = details.unwrap_or("Unknown failure"),
            "Health check failed"
        );
    }
}
