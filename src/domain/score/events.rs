//! Score domain events.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{domain_event, EventId, LedgerEntryId, Points, Timestamp, UserId};

/// Published after a ledger mutation moved a user's running total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserScoreAdjusted {
    pub event_id: EventId,
    pub user_id: UserId,
    pub entry_id: LedgerEntryId,
    pub delta: Points,
    pub new_total: Points,
    pub adjusted_at: Timestamp,
}

domain_event!(
    UserScoreAdjusted,
    event_type = "user_score.adjusted.v1",
    aggregate_id = user_id,
    aggregate_type = "UserScore",
    occurred_at = adjusted_at,
    event_id = event_id
);
