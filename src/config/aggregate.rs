//! Aggregate maintainer configuration

use serde::Deserialize;

use super::ValidationError;

/// Upper bound on `max_write_attempts`.
pub const MAX_WRITE_ATTEMPTS_LIMIT: u32 = 10;

#[derive(Debug, Clone, Deserialize)]
pub struct AggregateConfig {
    /// Attempts at the running-total write before the mutation reports
    /// failure.
    #[serde(default = "default_max_write_attempts")]
    pub max_write_attempts: u32,
}

impl Default for AggregateConfig {
    fn default() -> Self {
        Self {
            max_write_attempts: default_max_write_attempts(),
        }
    }
}

fn default_max_write_attempts() -> u32 {
    3
}

impl AggregateConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(1..=MAX_WRITE_ATTEMPTS_LIMIT).contains(&self.max_write_attempts) {
            return Err(ValidationError::InvalidWriteAttempts {
                actual: self.max_write_attempts,
                max: MAX_WRITE_ATTEMPTS_LIMIT,
            });
        }
        Ok(())
    }
}
