//! Period score totals shown on a user's dashboard.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Points, Timestamp, UserId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSummary {
    pub user_id: UserId,
    /// Since 00:00 UTC today.
    pub today: Points,
    /// Since Monday 00:00 UTC.
    pub this_week: Points,
    /// The maintained running total.
    pub total: Points,
    pub as_of: Timestamp,
}
