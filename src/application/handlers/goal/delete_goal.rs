//! DeleteGoalHandler - owner-initiated goal removal.

use std::sync::Arc;

use tracing::info;

use crate::application::{LockScope, UserLockRegistry};
use crate::domain::foundation::{GoalId, UserId};
use crate::domain::goal::GoalError;
use crate::ports::GoalRepository;

#[derive(Debug, Clone)]
pub struct DeleteGoalCommand {
    pub goal_id: GoalId,
    pub user_id: UserId,
}

pub struct DeleteGoalHandler {
    goals: Arc<dyn GoalRepository>,
    locks: Arc<UserLockRegistry>,
}

impl DeleteGoalHandler {
    pub fn new(goals: Arc<dyn GoalRepository>, locks: Arc<UserLockRegistry>) -> Self {
        Self { goals, locks }
    }

    pub async fn handle(&self, cmd: DeleteGoalCommand) -> Result<(), GoalError> {
        let _guard = self.locks.acquire(LockScope::Goals, &cmd.user_id).await;

        let goal = self
            .goals
            .find_by_id(&cmd.goal_id)
            .await?
            .ok_or_else(|| GoalError::not_found(cmd.goal_id))?;

        if !goal.is_owned_by(&cmd.user_id) {
            return Err(GoalError::forbidden(cmd.goal_id, cmd.user_id));
        }

        self.goals.delete(&cmd.goal_id).await?;
        info!(
            goal_id = %cmd.goal_id,
            user_id = %cmd.user_id,
            status = %goal.status,
            "Goal deleted"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryGoalRepository;
    use crate::domain::foundation::{SubCategoryId, Timestamp};
    use crate::domain::goal::{Goal, TargetScope, Timeframe};
    use rust_decimal_macros::dec;

    async fn setup() -> (DeleteGoalHandler, Arc<InMemoryGoalRepository>, Goal) {
        let repo = Arc::new(InMemoryGoalRepository::new());
        let goal = Goal::new(
            GoalId::new(),
            UserId::new("owner").unwrap(),
            TargetScope::SubCategory(SubCategoryId::new(1)),
            Timeframe::Monthly,
            dec!(50),
            Timestamp::now(),
        )
        .unwrap();
        repo.save(&goal).await.unwrap();
        let handler = DeleteGoalHandler::new(repo.clone(), Arc::new(UserLockRegistry::new()));
        (handler, repo, goal)
    }

    #[tokio::test]
    async fn owner_can_delete() {
        let (handler, repo, goal) = setup().await;
        handler
            .handle(DeleteGoalCommand { goal_id: goal.id, user_id: goal.user_id.clone() })
            .await
            .unwrap();
        assert!(repo.find_by_id(&goal.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn others_cannot_delete() {
        let (handler, repo, goal) = setup().await;
        let err = handler
            .handle(DeleteGoalCommand {
                goal_id: goal.id,
                user_id: UserId::new("intruder").unwrap(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, GoalError::Forbidden { .. }));
        assert!(repo.find_by_id(&goal.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn missing_goal_is_not_found() {
        let (handler, _, goal) = setup().await;
        let id = GoalId::new();
        let err = handler
            .handle(DeleteGoalCommand { goal_id: id, user_id: goal.user_id })
            .await
            .unwrap_err();
        assert_eq!(err, GoalError::NotFound(id));
    }
}
