//! Detection of a running total that drifted from the ledger.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{Points, Timestamp, UserId};

/// A persisted total that disagrees with a fresh recount.
///
/// This indicates a missed or double-applied mutation. It is reported and
/// logged, never an error for the request that found it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsistencyViolation {
    pub user_id: UserId,
    pub persisted: Points,
    pub recomputed: Points,
    pub detected_at: Timestamp,
}

impl ConsistencyViolation {
    /// Returns a violation when `|persisted - recomputed| > tolerance`.
    pub fn check(
        user_id: &UserId,
        persisted: Points,
        recomputed: Points,
        tolerance: Decimal,
        now: Timestamp,
    ) -> Option<Self> {
        let drift = (persisted - recomputed).abs();
        if drift.value() > tolerance.abs() {
            Some(Self {
                user_id: user_id.clone(),
                persisted,
                recomputed,
                detected_at: now,
            })
        } else {
            None
        }
    }

    /// Signed `persisted - recomputed`.
    pub fn drift(&self) -> Points {
        self.persisted - self.recomputed
    }
}

impl fmt::Display for ConsistencyViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "score total for {} is {} but ledger sums to {}",
            self.user_id, self.persisted, self.recomputed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn user() -> UserId {
        UserId::new("u1").unwrap()
    }

    #[test]
    fn equal_totals_are_consistent() {
        let p = Points::from_decimal(dec!(12.5));
        assert!(ConsistencyViolation::check(&user(), p, p, dec!(0), Timestamp::now()).is_none());
    }

    #[test]
    fn drift_within_tolerance_is_ignored() {
        let persisted = Points::from_decimal(dec!(10.01));
        let fresh = Points::from_decimal(dec!(10.00));
        assert!(
            ConsistencyViolation::check(&user(), persisted, fresh, dec!(0.01), Timestamp::now())
                .is_none()
        );
    }

    #[test]
    fn drift_beyond_tolerance_is_reported() {
        let persisted = Points::from_decimal(dec!(9));
        let fresh = Points::from_decimal(dec!(14));
        let violation =
            ConsistencyViolation::check(&user(), persisted, fresh, dec!(0), Timestamp::now())
                .unwrap();
        assert_eq!(violation.drift().value(), dec!(-5));
        assert!(violation.to_string().contains("ledger sums to 14.00"));
    }
}
