//! ListUserGoalsHandler - a user's goals with freshly computed progress.

use std::sync::Arc;

use futures::future::try_join_all;

use crate::application::{LockScope, UserLockRegistry};
use crate::domain::foundation::UserId;
use crate::domain::goal::{GoalError, GoalStatus};
use crate::ports::GoalRepository;

use super::{GoalProgressEngine, GoalProgressView};

#[derive(Debug, Clone)]
pub struct ListUserGoalsQuery {
    pub user_id: UserId,
    /// Only goals in this status, when set.
    pub status: Option<GoalStatus>,
}

pub struct ListUserGoalsHandler {
    goals: Arc<dyn GoalRepository>,
    engine: Arc<GoalProgressEngine>,
    locks: Arc<UserLockRegistry>,
}

impl ListUserGoalsHandler {
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

    /// Newest goal first. The status filter applies after recomputation.
    pub async fn handle(
        &self,
        query: ListUserGoalsQuery,
    ) -> Result<Vec<GoalProgressView>, GoalError> {
        let _guard = self.locks.acquire(LockScope::Goals, &query.user_id).await;

        let goals = self.goals.list_for_owner(&query.user_id).await?;
        let refreshed = try_join_all(goals.into_iter().map(|g| self.engine.refresh(g))).await?;

        Ok(refreshed
            .iter()
            .filter(|r| query.status.map_or(true, |s| s == r.goal.status))
            .map(|r| GoalProgressView::from(&r.goal))
            .collect())
    }
}
