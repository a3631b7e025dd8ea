//! Logging subscriber installation.
//!
//! The library only emits `tracing` events; applications that want them on
//! stdout call [`init`] once at start-up.

use thiserror::Error;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Errors raised while installing the subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// A global subscriber is already installed.
    #[error("failed to install tracing subscriber: {0}")]
    Install(Box<dyn std::error::Error + Send + Sync>),
}

/// Parses a level name, falling back to `INFO` for unknown values.
#[must_use]
pub fn parse_level(level: &str) -> Level {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" | "warning" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Installs a formatting subscriber filtered by `RUST_LOG` plus the
/// configured level.
///
/// # Errors
///
/// Returns [`TelemetryError::Install`] when a global subscriber has already
/// been set.
pub fn init(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let filter = EnvFilter::from_default_env().add_directive(parse_level(&config.level).into());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.with_target)
        .try_init()
        .map_err(TelemetryError::Install)
}
