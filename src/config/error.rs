//! Configuration error types

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("aggregate.max_write_attempts must be between 1 and {max}, got {actual}")]
    InvalidWriteAttempts { actual: u32, max: u32 },

    #[error("scoring.consistency_tolerance must not be negative, got {0}")]
    NegativeTolerance(Decimal),

    #[error("logging.level is not a valid filter: {0}")]
    InvalidLogLevel(String),
}
