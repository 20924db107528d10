//! LedgerMutationHandler - entry point for the ledger's write path.
//!
//! The ledger owner calls one of the `on_entry_*` methods after each write
//! with the exact entry states involved. The running total and the affected
//! goals are then brought up to date before the call returns.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::handlers::goal::{GoalRefresh, GoalUpdateTrigger};
use crate::application::handlers::score::{AggregateMaintainer, ScoreAdjustment};
use crate::domain::foundation::DomainError;
use crate::domain::waste::{LedgerEntry, LedgerMutation};

/// Everything one ledger write changed in derived state.
#[derive(Debug, Clone)]
pub struct LedgerMutationOutcome {
    pub score: ScoreAdjustment,
    pub goals: Vec<GoalRefresh>,
}

pub struct LedgerMutationHandler {
    maintainer: Arc<AggregateMaintainer>,
    trigger: Arc<GoalUpdateTrigger>,
}

impl LedgerMutationHandler {
    pub fn new(maintainer: Arc<AggregateMaintainer>, trigger: Arc<GoalUpdateTrigger>) -> Self {
        Self {
            maintainer,
            trigger,
        }
    }

    pub async fn on_entry_created(
        &self,
        entry: LedgerEntry,
    ) -> Result<LedgerMutationOutcome, DomainError> {
        self.handle(LedgerMutation::Created(entry)).await
    }

    /// # Errors
    ///
    /// - `ValidationFailed` if the two states are not the same entry
    pub async fn on_entry_updated(
        &self,
        old_entry: LedgerEntry,
        new_entry: LedgerEntry,
    ) -> Result<LedgerMutationOutcome, DomainError> {
        self.handle(LedgerMutation::updated(old_entry, new_entry)?).await
    }

    pub async fn on_entry_deleted(
        &self,
        entry: LedgerEntry,
    ) -> Result<LedgerMutationOutcome, DomainError> {
        self.handle(LedgerMutation::Deleted(entry)).await
    }

    /// Runs the total update and the goal refresh side by side. They touch
    /// disjoint state and each takes its own per-user lock.
    ///
    /// Both halves always run to completion: a failing goal refresh never
    /// cancels the total update, and the other way round. The first error
    /// is returned once both have finished, the total's taking precedence.
    pub async fn handle(
        &self,
        mutation: LedgerMutation,
    ) -> Result<LedgerMutationOutcome, DomainError> {
        debug!(user_id = %mutation.user_id(), mutation = %mutation, "Applying ledger mutation");

        let (score, goals) = tokio::join!(
            self.maintainer.handle(&mutation),
            self.trigger.handle(&mutation)
        );

        match (score, goals) {
            (Ok(score), Ok(goals)) => Ok(LedgerMutationOutcome { score, goals }),
            (Ok(score), Err(err)) => {
                warn!(
                    user_id = %mutation.user_id(),
                    mutation = %mutation,
                    new_total = ?score.new_total,
                    error = %err,
                    "Goal refresh failed after the score total was updated"
                );
                Err(err)
            }
            (Err(err), goals) => {
                if let Err(goal_err) = goals {
                    warn!(
                        user_id = %mutation.user_id(),
                        mutation = %mutation,
                        error = %goal_err,
                        "Goal refresh failed alongside the score total"
                    );
                }
                Err(err)
            }
        }
    }
}
