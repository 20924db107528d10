//! In-memory goal repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, GoalId, Points, Timestamp, UserId};
use crate::domain::goal::{Goal, GoalStatus, TargetScope};
use crate::ports::GoalRepository;

#[derive(Debug, Clone, Default)]
pub struct InMemoryGoalRepository {
    goals: Arc<RwLock<HashMap<GoalId, Goal>>>,
}

impl InMemoryGoalRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.goals.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.goals.read().await.is_empty()
    }
}

fn not_found(id: &GoalId) -> DomainError {
    DomainError::new(ErrorCode::GoalNotFound, format!("Goal {} not found", id))
}

fn newest_first(mut goals: Vec<Goal>) -> Vec<Goal> {
    goals.sort_by(|a, b| b.anchor.cmp(&a.anchor));
    goals
}

#[async_trait]
impl GoalRepository for InMemoryGoalRepository {
    async fn save(&self, goal: &Goal) -> Result<(), DomainError> {
        self.goals.write().await.insert(goal.id, goal.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &GoalId) -> Result<Option<Goal>, DomainError> {
        Ok(self.goals.read().await.get(id).cloned())
    }

    async fn list_for_owner(&self, user_id: &UserId) -> Result<Vec<Goal>, DomainError> {
        let goals = self
            .goals
            .read()
            .await
            .values()
            .filter(|g| g.is_owned_by(user_id))
            .cloned()
            .collect();
        Ok(newest_first(goals))
    }

    async fn list_for_owner_and_scopes(
        &self,
        user_id: &UserId,
        scopes: &[TargetScope],
    ) -> Result<Vec<Goal>, DomainError> {
        let goals = self
            .goals
            .read()
            .await
            .values()
            .filter(|g| g.is_owned_by(user_id) && scopes.contains(&g.target_scope))
            .cloned()
            .collect();
        Ok(newest_first(goals))
    }

    async fn persist_goal_state(
        &self,
        id: &GoalId,
        progress: Points,
        status: GoalStatus,
        updated_at: Timestamp,
    ) -> Result<(), DomainError> {
        let mut goals = self.goals.write().await;
        let goal = goals.get_mut(id).ok_or_else(|| not_found(id))?;
        goal.progress = progress;
        goal.status = status;
        goal.updated_at = updated_at;
        Ok(())
    }

    async fn delete(&self, id: &GoalId) -> Result<(), DomainError> {
        self.goals
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| not_found(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{CategoryId, SubCategoryId};
    use crate::domain::goal::Timeframe;
    use rust_decimal_macros::dec;

    fn goal(user: &str, scope: TargetScope) -> Goal {
        Goal::new(
            GoalId::new(),
            UserId::new(user).unwrap(),
            scope,
            Timeframe::Daily,
            dec!(10),
            Timestamp::now(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn lists_only_matching_owner_and_scope() {
        let repo = InMemoryGoalRepository::new();
        let sub = TargetScope::SubCategory(SubCategoryId::new(1));
        let cat = TargetScope::Category(CategoryId::new(1));
        repo.save(&goal("u1", sub)).await.unwrap();
        repo.save(&goal("u1", cat)).await.unwrap();
        repo.save(&goal("u2", sub)).await.unwrap();

        let u1 = UserId::new("u1").unwrap();
        assert_eq!(repo.list_for_owner(&u1).await.unwrap().len(), 2);
        assert_eq!(
            repo.list_for_owner_and_scopes(&u1, &[sub]).await.unwrap().len(),
            1
        );
        assert!(repo
            .list_for_owner_and_scopes(&u1, &[TargetScope::SubCategory(SubCategoryId::new(2))])
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn persist_goal_state_updates_cache_only() {
        let repo = InMemoryGoalRepository::new();
        let g = goal("u1", TargetScope::SubCategory(SubCategoryId::new(1)));
        repo.save(&g).await.unwrap();

        repo.persist_goal_state(
            &g.id,
            Points::from_decimal(dec!(10)),
            GoalStatus::Achieved,
            g.anchor,
        )
        .await
        .unwrap();

        let stored = repo.find_by_id(&g.id).await.unwrap().unwrap();
        assert_eq!(stored.status, GoalStatus::Achieved);
        assert_eq!(stored.target, g.target);
    }

    #[tokio::test]
    async fn missing_goal_is_not_found() {
        let repo = InMemoryGoalRepository::new();
        let id = GoalId::new();
        let err = repo
            .persist_goal_state(&id, Points::ZERO, GoalStatus::Active, Timestamp::now())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::GoalNotFound);
        assert!(repo.delete(&id).await.is_err());
    }
}
