//! User score store port.
//!
//! Holds the denormalized running total per user. The aggregate maintainer
//! is the only writer.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, Points, Timestamp, UserId};
use crate::domain::score::UserScore;

#[async_trait]
pub trait UserScoreStore: Send + Sync {
    /// Current total; users without a record have a total of zero.
    async fn get_total(&self, user_id: &UserId) -> Result<Points, DomainError>;

    /// Full record, `None` for users who never scored.
    async fn find(&self, user_id: &UserId) -> Result<Option<UserScore>, DomainError>;

    /// Overwrite the total. Used only by explicit reconciliation.
    async fn set_total(
        &self,
        user_id: &UserId,
        total: Points,
        at: Timestamp,
    ) -> Result<(), DomainError>;

    /// Atomically add `delta` and return the new total.
    ///
    /// Implementations must make this a single read-modify-write so two
    /// concurrent calls for one user never lose an update.
    async fn add_to_total(
        &self,
        user_id: &UserId,
        delta: Points,
        at: Timestamp,
    ) -> Result<Points, DomainError>;
}
