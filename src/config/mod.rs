//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `WASTE_GOALS` prefix and nested values use double underscores as separators.
//! Every setting has a default, so an empty environment yields a working
//! configuration.
//!
//! # Example
//!
//! ```no_run
//! use waste_goals::config::{init_tracing, AppConfig};
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! init_tracing(&config.logging).expect("Failed to install subscriber");
//! ```

mod aggregate;
mod error;
mod goals;
mod logging;
mod scoring;

pub use aggregate::{AggregateConfig, MAX_WRITE_ATTEMPTS_LIMIT};
pub use error::{ConfigError, ValidationError};
pub use goals::GoalsConfig;
pub use logging::{init_tracing, LogFormat, LoggingConfig, TelemetryError};
pub use scoring::ScoringConfig;

use serde::Deserialize;

/// Root configuration of the goal tracking core.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Multiplier mode and consistency tolerance
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Window basis for goal progress
    #[serde(default)]
    pub goals: GoalsConfig,

    /// Running-total write retries
    #[serde(default)]
    pub aggregate: AggregateConfig,

    /// Log level and output format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `WASTE_GOALS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `WASTE_GOALS__SCORING__MULTIPLIER_MODE=snapshot` -> `scoring.multiplier_mode`
    /// - `WASTE_GOALS__AGGREGATE__MAX_WRITE_ATTEMPTS=5` -> `aggregate.max_write_attempts`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("WASTE_GOALS")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.scoring.validate()?;
        self.aggregate.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// `load` followed by `validate`.
    pub fn load_validated() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        Ok(config)
    }
}
