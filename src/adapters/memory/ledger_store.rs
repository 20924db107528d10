//! In-memory ledger.
//!
//! Stands in for the ledger owner. The write helpers return the exact
//! before-state so callers can build a truthful
//! [`LedgerMutation`](crate::domain::waste::LedgerMutation).

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, LedgerEntryId, Timestamp, UserId};
use crate::domain::waste::{LedgerEntry, WindowBasis};
use crate::ports::LedgerReader;

#[derive(Debug, Clone, Default)]
pub struct InMemoryLedgerStore {
    entries: Arc<RwLock<HashMap<LedgerEntryId, LedgerEntry>>>,
}

impl InMemoryLedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, entry: LedgerEntry) {
        self.entries.write().await.insert(entry.id, entry);
    }

    /// Replace an entry, returning the state it had before.
    ///
    /// # Errors
    ///
    /// - `LedgerEntryNotFound` if no entry has that id
    pub async fn replace(&self, entry: LedgerEntry) -> Result<LedgerEntry, DomainError> {
        let mut entries = self.entries.write().await;
        match entries.get_mut(&entry.id) {
            Some(existing) => Ok(std::mem::replace(existing, entry)),
            None => Err(not_found(&entry.id)),
        }
    }

    /// Remove an entry, returning its final state.
    pub async fn remove(&self, id: &LedgerEntryId) -> Result<LedgerEntry, DomainError> {
        self.entries
            .write()
            .await
            .remove(id)
            .ok_or_else(|| not_found(id))
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

fn not_found(id: &LedgerEntryId) -> DomainError {
    DomainError::new(
        ErrorCode::LedgerEntryNotFound,
        format!("Ledger entry {} not found", id),
    )
}

#[async_trait]
impl LedgerReader for InMemoryLedgerStore {
    async fn find_by_id(&self, id: &LedgerEntryId) -> Result<Option<LedgerEntry>, DomainError> {
        Ok(self.entries.read().await.get(id).cloned())
    }

    async fn list_for_owner(&self, user_id: &UserId) -> Result<Vec<LedgerEntry>, DomainError> {
        Ok(self
            .entries
            .read()
            .await
            .values()
            .filter(|e| &e.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn list_for_owner_between(
        &self,
        user_id: &UserId,
        basis: WindowBasis,
        start: Timestamp,
        end: Timestamp,
    ) -> Result<Vec<LedgerEntry>, DomainError> {
        Ok(self
            .entries
            .read()
            .await
            .values()
            .filter(|e| &e.user_id == user_id)
            .filter(|e| {
                let at = e.timestamp_for(basis);
                at >= start && at <= end
            })
            .cloned()
            .collect())
    }
}
