//! UserScore aggregate.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Points, Timestamp, UserId};

use super::ScoreDelta;

/// A user's running score total.
///
/// Only the aggregate maintainer writes it, by applying [`ScoreDelta`]s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserScore {
    pub user_id: UserId,
    pub total: Points,
    pub updated_at: Timestamp,
}

impl UserScore {
    /// A user who has not logged anything yet.
    pub fn empty(user_id: UserId, now: Timestamp) -> Self {
        Self {
            user_id,
            total: Points::ZERO,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, delta: ScoreDelta, now: Timestamp) -> Points {
        self.total += delta.amount();
        self.updated_at = now;
        self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn apply_moves_total_by_delta() {
        let now = Timestamp::now();
        let mut score = UserScore::empty(UserId::new("u1").unwrap(), now);
        score.apply(ScoreDelta::created(Points::from_decimal(dec!(5))), now);
        let total = score.apply(
            ScoreDelta::new(Points::from_decimal(dec!(5)), Points::from_decimal(dec!(7))),
            now,
        );
        assert_eq!(total.value(), dec!(7));
    }
}
