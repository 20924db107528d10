//! GoalUpdateTrigger - recomputes every goal a ledger mutation can affect.
//!
//! For updates both the before and after states are inspected, so an entry
//! moving between categories refreshes the goals on both sides.

use std::sync::Arc;

use tracing::debug;

use crate::application::{LockScope, UserLockRegistry};
use crate::domain::foundation::{DomainError, Timestamp};
use crate::domain::goal::{Goal, TargetScope};
use crate::domain::waste::LedgerMutation;
use crate::ports::{CategoryCatalog, GoalRepository};

use super::{GoalProgressEngine, GoalRefresh};

pub struct GoalUpdateTrigger {
    catalog: Arc<dyn CategoryCatalog>,
    goals: Arc<dyn GoalRepository>,
    engine: Arc<GoalProgressEngine>,
    locks: Arc<UserLockRegistry>,
}

impl GoalUpdateTrigger {
    pub fn new(
        catalog: Arc<dyn CategoryCatalog>,
        goals: Arc<dyn GoalRepository>,
        engine: Arc<GoalProgressEngine>,
        locks: Arc<UserLockRegistry>,
    ) -> Self {
        Self {
            catalog,
            goals,
            engine,
            locks,
        }
    }

    /// Refreshes affected goals. Running it twice for one mutation leaves
    /// the same goal state as running it once.
    pub async fn handle(&self, mutation: &LedgerMutation) -> Result<Vec<GoalRefresh>, DomainError> {
        let scopes = self.scopes_for(mutation).await?;
        if scopes.is_empty() {
            debug!(mutation = %mutation, "Mutation touches no goal scope");
            return Ok(Vec::new());
        }

        let basis = self.engine.basis();
        let stamps: Vec<Timestamp> = mutation
            .states()
            .into_iter()
            .map(|e| e.timestamp_for(basis))
            .collect();

        let user_id = mutation.user_id();
        let _guard = self.locks.acquire(LockScope::Goals, user_id).await;

        let affected: Vec<Goal> = self
            .goals
            .list_for_owner_and_scopes(user_id, &scopes)
            .await?
            .into_iter()
            .filter(|goal| {
                let window = goal.window();
                stamps.iter().any(|at| window.contains(*at))
            })
            .collect();

        debug!(
            user_id = %user_id,
            mutation = %mutation,
            goals = affected.len(),
            "Refreshing goals affected by ledger mutation"
        );

        let mut refreshed = Vec::with_capacity(affected.len());
        for goal in affected {
            refreshed.push(self.engine.refresh(goal).await?);
        }
        Ok(refreshed)
    }

    async fn scopes_for(&self, mutation: &LedgerMutation) -> Result<Vec<TargetScope>, DomainError> {
        let mut scopes = Vec::new();
        for entry in mutation.states() {
            let Some(sub_category_id) = entry.sub_category_id else {
                continue;
            };
            let candidates = match self.catalog.find_sub_category(sub_category_id).await? {
                Some(sub) => TargetScope::candidates_for(&sub).to_vec(),
                None => vec![TargetScope::SubCategory(sub_category_id)],
            };
            for scope in candidates {
                if !scopes.contains(&scope) {
                    scopes.push(scope);
                }
            }
        }
        Ok(scopes)
    }
}
