//! GetScoreSummaryHandler - today / this week / all-time score totals.

use std::sync::Arc;

use crate::application::EntryScorer;
use crate::domain::foundation::{DomainError, Points, UserId};
use crate::domain::score::ScoreSummary;
use crate::domain::waste::WindowBasis;
use crate::ports::{Clock, LedgerReader, UserScoreStore};

#[derive(Debug, Clone)]
pub struct GetScoreSummaryQuery {
    pub user_id: UserId,
}

pub struct GetScoreSummaryHandler {
    scorer: EntryScorer,
    ledger: Arc<dyn LedgerReader>,
    store: Arc<dyn UserScoreStore>,
    clock: Arc<dyn Clock>,
    basis: WindowBasis,
}

impl GetScoreSummaryHandler {
    pub fn new(
        scorer: EntryScorer,
        ledger: Arc<dyn LedgerReader>,
        store: Arc<dyn UserScoreStore>,
        clock: Arc<dyn Clock>,
        basis: WindowBasis,
    ) -> Self {
        Self {
            scorer,
            ledger,
            store,
            clock,
            basis,
        }
    }

    /// Period sums are recounted from the ledger; `total` is the maintained
    /// running total.
    pub async fn handle(&self, query: GetScoreSummaryQuery) -> Result<ScoreSummary, DomainError> {
        let now = self.clock.now();
        let today_start = now.start_of_day();
        let week_start = now.start_of_week();

        let entries = self
            .ledger
            .list_for_owner_between(&query.user_id, self.basis, week_start, now)
            .await?;

        let mut today = Points::ZERO;
        let mut this_week = Points::ZERO;
        for entry in &entries {
            let Some(c) = self.scorer.contribution(entry, self.basis).await? else {
                continue;
            };
            this_week += c.points;
            if c.at >= today_start {
                today += c.points;
            }
        }

        Ok(ScoreSummary {
            total: self.store.get_total(&query.user_id).await?,
            user_id: query.user_id,
            today,
            this_week,
            as_of: now,
        })
    }
}
