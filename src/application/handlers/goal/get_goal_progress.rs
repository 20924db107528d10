//! GetGoalProgressHandler - query handler for a goal's current progress.
//!
//! Always recomputes from the ledger; the cached values on the goal are
//! only refreshed as a side effect when they were stale.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::application::{LockScope, UserLockRegistry};
use crate::domain::foundation::{GoalId, Points, Timestamp, UserId};
use crate::domain::goal::{Goal, GoalError, GoalStatus, TargetScope, Timeframe};
use crate::ports::GoalRepository;

use super::GoalProgressEngine;

/// Query for one goal's progress.
#[derive(Debug, Clone)]
pub struct GetGoalProgressQuery {
    pub goal_id: GoalId,
    /// When set, the goal must belong to this user.
    pub requested_by: Option<UserId>,
}

/// Read model returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalProgressView {
    pub goal_id: GoalId,
    pub target_scope: TargetScope,
    pub timeframe: Timeframe,
    pub progress: Points,
    pub status: GoalStatus,
    pub target: Points,
    pub remaining: Points,
    pub window_start: Timestamp,
    pub window_end: Timestamp,
}

impl From<&Goal> for GoalProgressView {
    fn from(goal: &Goal) -> Self {
        let window = goal.window();
        Self {
            goal_id: goal.id,
            target_scope: goal.target_scope,
            timeframe: goal.timeframe,
            progress: goal.progress,
            status: goal.status,
            target: goal.target,
            remaining: goal.remaining(),
            window_start: window.start,
            window_end: window.end,
        }
    }
}

pub struct GetGoalProgressHandler {
    goals: Arc<dyn GoalRepository>,
    engine: Arc<GoalProgressEngine>,
    locks: Arc<UserLockRegistry>,
}

impl GetGoalProgressHandler {
    pub fn new(
        goals: Arc<dyn GoalRepository>,
        engine: Arc<GoalProgressEngine>,
        locks: Arc<UserLockRegistry>,
    ) -> Self {
        Self {
            goals,
            engine,
            locks,
        }
    }

    pub async fn handle(&self, query: GetGoalProgressQuery) -> Result<GoalProgressView, GoalError> {
        let goal = self
            .goals
            .find_by_id(&query.goal_id)
            .await?
            .ok_or_else(|| GoalError::not_found(query.goal_id))?;

        if let Some(requester) = &query.requested_by {
            if !goal.is_owned_by(requester) {
                return Err(GoalError::forbidden(goal.id, requester.clone()));
            }
        }

        let _guard = self.locks.acquire(LockScope::Goals, &goal.user_id).await;
        // Re-read under the lock so a concurrent refresh is not overwritten.
        let goal = self
            .goals
            .find_by_id(&query.goal_id)
            .await?
            .ok_or_else(|| GoalError::not_found(query.goal_id))?;

        let refresh = self.engine.refresh(goal).await?;
        Ok(GoalProgressView::from(&refresh.goal))
    }
}
