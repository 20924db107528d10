//! ReconcileUserScoreHandler - audits a running total against a full
//! recount of the ledger.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::application::{EntryScorer, LockScope, UserLockRegistry};
use crate::domain::foundation::{DomainError, Points, UserId};
use crate::domain::score::ConsistencyViolation;
use crate::ports::{Clock, LedgerReader, UserScoreStore};

#[derive(Debug, Clone)]
pub struct ReconcileUserScoreCommand {
    pub user_id: UserId,
    /// Overwrite the persisted total with the recount on a violation.
    ///
    /// Only safe while no ledger write for the user is between its ledger
    /// commit and its total update: the recount already includes such an
    /// entry and the pending update would add it a second time. A repair is
    /// skipped when another task is queued on the user's score lock, but a
    /// write that has not reached the lock yet cannot be seen.
    pub repair: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcileUserScoreResult {
    pub persisted: Points,
    pub recomputed: Points,
    pub violation: Option<ConsistencyViolation>,
    pub repaired: bool,
}

pub struct ReconcileUserScoreHandler {
    scorer: EntryScorer,
    ledger: Arc<dyn LedgerReader>,
    store: Arc<dyn UserScoreStore>,
    clock: Arc<dyn Clock>,
    locks: Arc<UserLockRegistry>,
    tolerance: Decimal,
}

impl ReconcileUserScoreHandler {
    pub fn new(
        scorer: EntryScorer,
        ledger: Arc<dyn LedgerReader>,
        store: Arc<dyn UserScoreStore>,
        clock: Arc<dyn Clock>,
        locks: Arc<UserLockRegistry>,
        tolerance: Decimal,
    ) -> Self {
        Self {
            scorer,
            ledger,
            store,
            clock,
            locks,
            tolerance,
        }
    }

    pub async fn handle(
        &self,
        cmd: ReconcileUserScoreCommand,
    ) -> Result<ReconcileUserScoreResult, DomainError> {
        let _guard = self.locks.acquire(LockScope::Score, &cmd.user_id).await;

        let mut recomputed = Points::ZERO;
        for entry in self.ledger.list_for_owner(&cmd.user_id).await? {
            recomputed += self.scorer.score(&entry).await?;
        }
        let persisted = self.store.get_total(&cmd.user_id).await?;
        let now = self.clock.now();

        let violation =
            ConsistencyViolation::check(&cmd.user_id, persisted, recomputed, self.tolerance, now);

        let repaired = match &violation {
            Some(v) => {
                warn!(
                    user_id = %v.user_id,
                    persisted = %v.persisted,
                    recomputed = %v.recomputed,
                    drift = %v.drift(),
                    "Score consistency violation"
                );
                if !cmd.repair {
                    false
                } else if self.locks.contenders(LockScope::Score, &cmd.user_id) > 1 {
                    warn!(
                        user_id = %cmd.user_id,
                        "Score update queued for user, skipping repair"
                    );
                    false
                } else {
                    self.store.set_total(&cmd.user_id, recomputed, now).await?;
                    info!(user_id = %cmd.user_id, total = %recomputed, "Score total repaired");
                    true
                }
            }
            None => false,
        };

        Ok(ReconcileUserScoreResult {
            persisted,
            recomputed,
            violation,
            repaired,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{
        FixedClock, InMemoryCategoryCatalog, InMemoryLedgerStore, InMemoryUserScoreStore,
    };
    use crate::domain::foundation::{CategoryId, SubCategoryId, Timestamp};
    use crate::domain::waste::{LedgerEntry, MultiplierMode, SubCategory, Unit};
    use rust_decimal_macros::dec;

    struct Fixture {
        handler: Arc<ReconcileUserScoreHandler>,
        store: Arc<InMemoryUserScoreStore>,
        locks: Arc<UserLockRegistry>,
    }

    async fn fixture() -> Fixture {
        let catalog = Arc::new(InMemoryCategoryCatalog::new());
        catalog
            .add_sub_category(
                SubCategory::new(
                    SubCategoryId::new(1),
                    CategoryId::new(10),
                    "Glass",
                    Unit::Kg,
                    dec!(2),
                )
                .unwrap(),
            )
            .await;
        let ledger = Arc::new(InMemoryLedgerStore::new());
        let now = Timestamp::now();
        for q in [dec!(1), dec!(2.5)] {
            ledger
                .insert(LedgerEntry::new(
                    user(),
                    Some(SubCategoryId::new(1)),
                    Some(q),
                    now,
                    now,
                ))
                .await;
        }
        let store = Arc::new(InMemoryUserScoreStore::new());
        let locks = Arc::new(UserLockRegistry::new());
        let handler = ReconcileUserScoreHandler::new(
            EntryScorer::new(catalog, MultiplierMode::Live),
            ledger,
            store.clone(),
            Arc::new(FixedClock::new(now)),
            locks.clone(),
            dec!(0),
        );
        Fixture {
            handler: Arc::new(handler),
            store,
            locks,
        }
    }

    fn user() -> UserId {
        UserId::new("u1").unwrap()
    }

    #[tokio::test]
    async fn matching_total_reports_no_violation() {
        let f = fixture().await;
        f.store
            .set_total(&user(), Points::from_decimal(dec!(7)), Timestamp::now())
            .await
            .unwrap();

        let result = f
            .handler
            .handle(ReconcileUserScoreCommand { user_id: user(), repair: true })
            .await
            .unwrap();

        assert!(result.violation.is_none());
        assert!(!result.repaired);
    }

    #[tokio::test]
    async fn drift_is_reported_but_not_overwritten_by_default() {
        let f = fixture().await;
        f.store
            .set_total(&user(), Points::from_decimal(dec!(2)), Timestamp::now())
            .await
            .unwrap();

        let result = f
            .handler
            .handle(ReconcileUserScoreCommand { user_id: user(), repair: false })
            .await
            .unwrap();

        assert_eq!(result.recomputed.value(), dec!(7));
        assert!(result.violation.is_some());
        assert_eq!(f.store.get_total(&user()).await.unwrap().value(), dec!(2));
    }

    #[tokio::test]
    async fn repair_overwrites_with_recount() {
        let f = fixture().await;
        let result = f
            .handler
            .handle(ReconcileUserScoreCommand { user_id: user(), repair: true })
            .await
            .unwrap();

        assert!(result.repaired);
        assert_eq!(f.store.get_total(&user()).await.unwrap().value(), dec!(7));
    }

    #[tokio::test]
    async fn repair_is_skipped_while_score_update_is_queued() {
        let f = fixture().await;
        let held = f.locks.acquire(LockScope::Score, &user()).await;

        let handler = f.handler.clone();
        let reconcile = tokio::spawn(async move {
            handler
                .handle(ReconcileUserScoreCommand { user_id: user(), repair: true })
                .await
        });
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;

        // Stands in for the total update of a write already in the ledger.
        let locks = f.locks.clone();
        let queued = tokio::spawn(async move {
            let _g = locks.acquire(LockScope::Score, &user()).await;
        });
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        drop(held);

        let result = reconcile.await.unwrap().unwrap();
        queued.await.unwrap();

        assert!(result.violation.is_some());
        assert!(!result.repaired);
        assert_eq!(f.store.get_total(&user()).await.unwrap(), Points::ZERO);
    }
}
