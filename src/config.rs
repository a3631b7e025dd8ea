//! Configuration for building board repositories.
//!
//! ```
//! use noticeboard::config::{BoardConfig, IdGeneratorConfig};
//!
//! let config = BoardConfig::from_json_str(
//!     r#"{"id_generator": {"strategy": "sequential", "prefix": "m"}}"#,
//! )
//! .expect("valid configuration");
//! assert_eq!(
//!     config.id_generator,
//!     IdGeneratorConfig::Sequential { prefix: "m".to_owned() }
//! );
//! assert_eq!(config.logging.level, "info");
//! ```

use mockable::DefaultClock;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::adapters::{
    ConfiguredIdGenerator, SequentialIdGenerator, UuidIdGenerator, memory::InMemoryBoardRepository,
};

/// Repository type produced by [`BoardConfig::build_repository`].
pub type ConfiguredBoardRepository = InMemoryBoardRepository<ConfiguredIdGenerator, DefaultClock>;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration document could not be parsed.
    #[error("invalid board configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Message identifier strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum IdGeneratorConfig {
    /// Random UUID v4 identifiers.
    #[default]
    Uuid,
    /// `"{prefix}{n}"` identifiers counting up from 1.
    Sequential {
        /// Prefix placed before the counter.
        #[serde(default)]
        prefix: String,
    },
}

impl IdGeneratorConfig {
    /// Builds the configured generator.
    #[must_use]
    pub fn build(&self) -> ConfiguredIdGenerator {
        match self {
            Self::Uuid => ConfiguredIdGenerator::Uuid(UuidIdGenerator),
            Self::Sequential { prefix } => {
                ConfiguredIdGenerator::Sequential(SequentialIdGenerator::new(prefix.clone()))
            }
        }
    }
}

/// Logging settings consumed by [`crate::telemetry::init`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Minimum level: `trace`, `debug`, `info`, `warn` or `error`.
    pub level: String,
    /// Whether to print the event target.
    pub with_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            with_target: true,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Message identifier strategy.
    pub id_generator: IdGeneratorConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

impl BoardConfig {
    /// Configuration producing predictable `"{prefix}{n}"` message
    /// identifiers, suited to tests and fixtures.
    #[must_use]
    pub fn deterministic(prefix: impl Into<String>) -> Self {
        Self {
            id_generator: IdGeneratorConfig::Sequential {
                prefix: prefix.into(),
            },
            logging: LoggingConfig::default(),
        }
    }

    /// Parses configuration from JSON, filling absent fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the document is not valid JSON or
    /// does not match the configuration schema.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Builds an empty in-memory repository wired with the configured
    /// identifier generator and the system clock.
    #[must_use]
    pub fn build_repository(&self) -> ConfiguredBoardRepository {
        InMemoryBoardRepository::new(self.id_generator.build(), DefaultClock)
    }
}
