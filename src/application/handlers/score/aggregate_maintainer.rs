//! AggregateMaintainer - keeps each user's running total in step with the
//! ledger.
//!
//! Every mutation moves the total by `new_score - old_score`, computed from
//! the before/after states carried on the mutation itself. The entry write
//! has already happened; the total is the second write and is retried on
//! failure.

use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::application::{EntryScorer, LockScope, UserLockRegistry};
use crate::domain::foundation::{
    DomainError, EventId, Points, SerializableDomainEvent, UserId,
};
use crate::domain::score::{ScoreDelta, UserScoreAdjusted};
use crate::domain::waste::LedgerMutation;
use crate::ports::{Clock, EventPublisher, UserScoreStore};

/// Outcome of applying one mutation to the running total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreAdjustment {
    pub user_id: UserId,
    pub delta: ScoreDelta,
    /// New total, `None` when the mutation did not move it.
    pub new_total: Option<Points>,
    /// Attempts the store write took.
    pub attempts: u32,
}

pub struct AggregateMaintainer {
    scorer: EntryScorer,
    store: Arc<dyn UserScoreStore>,
    event_publisher: Arc<dyn EventPublisher>,
    clock: Arc<dyn Clock>,
    locks: Arc<UserLockRegistry>,
    max_write_attempts: u32,
}

impl AggregateMaintainer {
    pub fn new(
        scorer: EntryScorer,
        store: Arc<dyn UserScoreStore>,
        event_publisher: Arc<dyn EventPublisher>,
        clock: Arc<dyn Clock>,
        locks: Arc<UserLockRegistry>,
        max_write_attempts: u32,
    ) -> Self {
        Self {
            scorer,
            store,
            event_publisher,
            clock,
            locks,
            max_write_attempts: max_write_attempts.max(1),
        }
    }

    pub async fn handle(&self, mutation: &LedgerMutation) -> Result<ScoreAdjustment, DomainError> {
        let user_id = mutation.user_id().clone();

        let before = match mutation.before() {
            Some(entry) => self.scorer.score(entry).await?,
            None => Points::ZERO,
        };
        let after = match mutation.after() {
            Some(entry) => self.scorer.score(entry).await?,
            None => Points::ZERO,
        };
        let delta = ScoreDelta::new(before, after);

        if delta.is_noop() {
            debug!(user_id = %user_id, mutation = %mutation, "Mutation leaves score unchanged");
            return Ok(ScoreAdjustment {
                user_id,
                delta,
                new_total: None,
                attempts: 0,
            });
        }

        let _guard = self.locks.acquire(LockScope::Score, &user_id).await;
        let (new_total, attempts) = self.write_with_retry(&user_id, delta.amount()).await?;

        debug!(
            user_id = %user_id,
            mutation = %mutation,
            delta = %delta.amount(),
            new_total = %new_total,
            "Score total adjusted"
        );

        let event = UserScoreAdjusted {
            event_id: EventId::new(),
            user_id: user_id.clone(),
            entry_id: mutation.entry_id(),
            delta: delta.amount(),
            new_total,
            adjusted_at: self.clock.now(),
        };
        self.publish(event).await;

        Ok(ScoreAdjustment {
            user_id,
            delta,
            new_total: Some(new_total),
            attempts,
        })
    }

    async fn write_with_retry(
        &self,
        user_id: &UserId,
        amount: Points,
    ) -> Result<(Points, u32), DomainError> {
        let mut attempt = 1;
        loop {
            match self.store.add_to_total(user_id, amount, self.clock.now()).await {
                Ok(total) => return Ok((total, attempt)),
                Err(e) if attempt < self.max_write_attempts => {
                    warn!(
                        user_id = %user_id,
                        attempt,
                        max_attempts = self.max_write_attempts,
                        error = %e,
                        "Score total write failed, retrying"
                    );
                    attempt += 1;
                }
                Err(e) => {
                    error!(
                        user_id = %user_id,
                        attempts = attempt,
                        delta = %amount,
                        error = %e,
                        "Score total write failed; total is now behind the ledger"
                    );
                    return Err(e);
                }
            }
        }
    }

    async fn publish(&self, event: UserScoreAdjusted) {
        let result = match event.to_envelope() {
            Ok(envelope) => self.event_publisher.publish(envelope).await,
            Err(e) => Err(e),
        };
        if let Err(e) = result {
            warn!(user_id = %event.user_id, error = %e, "Failed to publish user_score.adjusted");
        }
    }
}
