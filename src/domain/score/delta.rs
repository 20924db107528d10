//! Score change caused by one ledger mutation.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Points;

/// Old and new score of the mutated entry.
///
/// Creates have `before == 0`; deletes have `after == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreDelta {
    pub before: Points,
    pub after: Points,
}

impl ScoreDelta {
    pub fn new(before: Points, after: Points) -> Self {
        Self { before, after }
    }

    pub fn created(score: Points) -> Self {
        Self::new(Points::ZERO, score)
    }

    pub fn deleted(score: Points) -> Self {
        Self::new(score, Points::ZERO)
    }

    /// Amount to add to the running total.
    pub fn amount(&self) -> Points {
        self.after - self.before
    }

    pub fn is_noop(&self) -> bool {
        self.amount().is_zero()
    }
}
