//! Progress computation and status evaluation.
//!
//! Pure functions: the application layer resolves ledger entries into
//! [`Contribution`]s (scored, with their parent category attached) and
//! hands them here together with "now".

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CategoryId, LedgerEntryId, Points, SubCategoryId, Timestamp};

use super::{Goal, GoalStatus};

/// One scored ledger entry as seen by the progress engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contribution {
    pub entry_id: LedgerEntryId,
    pub sub_category_id: SubCategoryId,
    /// Parent category; `None` when the sub-category left the catalog.
    pub category_id: Option<CategoryId>,
    /// The entry's timestamp under the configured window basis.
    pub at: Timestamp,
    pub points: Points,
}

/// Outcome of evaluating a goal at an instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalEvaluation {
    pub progress: Points,
    pub status: GoalStatus,
    pub previous_status: GoalStatus,
}

impl GoalEvaluation {
    /// The status moved on this evaluation.
    pub fn transitioned(&self) -> bool {
        self.status != self.previous_status
    }

    /// Differs from what the goal currently caches.
    pub fn differs_from(&self, goal: &Goal) -> bool {
        self.progress != goal.progress || self.status != goal.status
    }
}

/// Sum of contributions in the goal's scope whose timestamp lies in
/// `[window.start, min(now, window.end)]`.
pub fn compute_progress(goal: &Goal, contributions: &[Contribution], now: Timestamp) -> Points {
    let window = goal.window();
    contributions
        .iter()
        .filter(|c| goal.target_scope.covers(c.sub_category_id, c.category_id))
        .filter(|c| window.counts(c.at, now))
        .map(|c| c.points)
        .sum()
}

/// Runs the state machine forward.
///
/// Achievement is checked before failure, and only an `Active` goal can
/// move: `Achieved` and `Failed` are kept even when `progress` has since
/// dropped or risen.
pub fn evaluate(goal: &Goal, progress: Points, now: Timestamp) -> GoalEvaluation {
    let status = match goal.status {
        GoalStatus::Active if progress >= goal.target => GoalStatus::Achieved,
        GoalStatus::Active if goal.window().has_elapsed(now) => GoalStatus::Failed,
        current => current,
    };

    GoalEvaluation {
        progress,
        status,
        previous_status: goal.status,
    }
}
