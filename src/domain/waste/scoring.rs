//! The scoring function.
//!
//! `score = round_half_up(quantity × score_per_unit, 2)`. Entries without a
//! quantity or without a category score zero and never contribute to any
//! aggregate.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::{DomainError, Points};

/// Errors raised for inputs the scoring rule refuses to process.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    #[error("Quantity must not be negative, got {0}")]
    NegativeQuantity(Decimal),

    #[error("Score per unit must be greater than zero, got {0}")]
    NonPositiveMultiplier(Decimal),

    #[error("Score of {quantity} × {multiplier} is out of range")]
    Overflow { quantity: Decimal, multiplier: Decimal },
}

impl From<ScoringError> for DomainError {
    fn from(err: ScoringError) -> Self {
        DomainError::invalid_input(err.to_string())
    }
}

/// Which multiplier an entry is scored with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MultiplierMode {
    /// Read the catalog's current multiplier every time. A catalog change
    /// re-prices history.
    #[default]
    Live,
    /// Prefer the multiplier captured on the entry when it was logged,
    /// falling back to the catalog for entries without one.
    Snapshot,
}

/// Scores a quantity against a multiplier.
///
/// `multiplier` is `None` for uncategorized entries.
///
/// # Errors
///
/// Present values are checked before the zero shortcuts, so a negative
/// quantity is rejected even on an uncategorized entry.
pub fn score(
    quantity: Option<Decimal>,
    multiplier: Option<Decimal>,
) -> Result<Points, ScoringError> {
    if let Some(q) = quantity {
        if q.is_sign_negative() && !q.is_zero() {
            return Err(ScoringError::NegativeQuantity(q));
        }
    }
    if let Some(m) = multiplier {
        if m <= Decimal::ZERO {
            return Err(ScoringError::NonPositiveMultiplier(m));
        }
    }

    match (quantity, multiplier) {
        (Some(q), Some(m)) => q
            .checked_mul(m)
            .map(Points::from_decimal)
            .ok_or(ScoringError::Overflow {
                quantity: q,
                multiplier: m,
            }),
        _ => Ok(Points::ZERO),
    }
}
