//! Scoring configuration

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::waste::MultiplierMode;

use super::ValidationError;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ScoringConfig {
    /// `live` re-prices history when a multiplier changes; `snapshot` keeps
    /// the multiplier captured on each entry.
    #[serde(default)]
    pub multiplier_mode: MultiplierMode,

    /// Largest drift between a persisted total and a recount that is not
    /// reported as a consistency violation.
    #[serde(default)]
    pub consistency_tolerance: Decimal,
}

impl ScoringConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.consistency_tolerance.is_sign_negative() && !self.consistency_tolerance.is_zero() {
            return Err(ValidationError::NegativeTolerance(self.consistency_tolerance));
        }
        Ok(())
    }
}
