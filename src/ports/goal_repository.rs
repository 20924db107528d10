//! Goal repository port (write side).
//!
//! Defines the contract for persisting and retrieving Goal aggregates.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, GoalId, Points, Timestamp, UserId};
use crate::domain::goal::{Goal, GoalStatus, TargetScope};

/// Repository port for Goal aggregate persistence.
#[async_trait]
pub trait GoalRepository: Send + Sync {
    /// Insert or replace a goal.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, goal: &Goal) -> Result<(), DomainError>;

    /// Find a goal by its ID. Returns `None` if not found.
    async fn find_by_id(&self, id: &GoalId) -> Result<Option<Goal>, DomainError>;

    /// All goals of a user, newest anchor first.
    async fn list_for_owner(&self, user_id: &UserId) -> Result<Vec<Goal>, DomainError>;

    /// Goals of a user whose target scope is any of `scopes`.
    async fn list_for_owner_and_scopes(
        &self,
        user_id: &UserId,
        scopes: &[TargetScope],
    ) -> Result<Vec<Goal>, DomainError>;

    /// Write the cached evaluation of a goal.
    ///
    /// # Errors
    ///
    /// - `GoalNotFound` if the goal doesn't exist
    async fn persist_goal_state(
        &self,
        id: &GoalId,
        progress: Points,
        status: GoalStatus,
        updated_at: Timestamp,
    ) -> Result<(), DomainError>;

    /// Delete a goal.
    ///
    /// # Errors
    ///
    /// - `GoalNotFound` if the goal doesn't exist
    async fn delete(&self, id: &GoalId) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goal_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn GoalRepository) {}
    }
}
