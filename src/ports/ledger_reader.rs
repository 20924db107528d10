//! Ledger reader port (read side).
//!
//! The ledger itself is written by the surrounding application; the core
//! reads it to recompute goal progress and full user totals.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, LedgerEntryId, Timestamp, UserId};
use crate::domain::waste::{LedgerEntry, WindowBasis};

#[async_trait]
pub trait LedgerReader: Send + Sync {
    /// Find an entry by id. Returns `None` if not found.
    async fn find_by_id(&self, id: &LedgerEntryId) -> Result<Option<LedgerEntry>, DomainError>;

    /// Every entry owned by `user_id`, in no particular order.
    async fn list_for_owner(&self, user_id: &UserId) -> Result<Vec<LedgerEntry>, DomainError>;

    /// Entries owned by `user_id` whose `basis` timestamp lies in
    /// `[start, end]` (both inclusive).
    async fn list_for_owner_between(
        &self,
        user_id: &UserId,
        basis: WindowBasis,
        start: Timestamp,
        end: Timestamp,
    ) -> Result<Vec<LedgerEntry>, DomainError>;
}
