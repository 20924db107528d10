//! A single ledger write as reported by the ledger's owner.

use std::fmt;

use crate::domain::foundation::{LedgerEntryId, UserId, ValidationError};

use super::LedgerEntry;

/// Create, update or delete of one ledger entry.
///
/// Updates carry both the state before and after the write; callers must
/// pass the true pair, never a re-fetched copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerMutation {
    Created(LedgerEntry),
    Updated {
        before: LedgerEntry,
        after: LedgerEntry,
    },
    Deleted(LedgerEntry),
}

impl LedgerMutation {
    /// Builds an update, checking the pair describes one entry of one owner.
    pub fn updated(before: LedgerEntry, after: LedgerEntry) -> Result<Self, ValidationError> {
        if before.id != after.id {
            return Err(ValidationError::invalid_format(
                "entry_id",
                format!("update pair mixes entries {} and {}", before.id, after.id),
            ));
        }
        if before.user_id != after.user_id {
            return Err(ValidationError::invalid_format(
                "user_id",
                "ledger entries cannot change owner",
            ));
        }
        Ok(LedgerMutation::Updated { before, after })
    }

    pub fn user_id(&self) -> &UserId {
        match self {
            LedgerMutation::Created(entry) | LedgerMutation::Deleted(entry) => &entry.user_id,
            LedgerMutation::Updated { after, .. } => &after.user_id,
        }
    }

    pub fn entry_id(&self) -> LedgerEntryId {
        match self {
            LedgerMutation::Created(entry) | LedgerMutation::Deleted(entry) => entry.id,
            LedgerMutation::Updated { after, .. } => after.id,
        }
    }

    /// Entry state before the write (`None` for creates).
    pub fn before(&self) -> Option<&LedgerEntry> {
        match self {
            LedgerMutation::Created(_) => None,
            LedgerMutation::Updated { before, .. } => Some(before),
            LedgerMutation::Deleted(entry) => Some(entry),
        }
    }

    /// Entry state after the write (`None` for deletes).
    pub fn after(&self) -> Option<&LedgerEntry> {
        match self {
            LedgerMutation::Created(entry) => Some(entry),
            LedgerMutation::Updated { after, .. } => Some(after),
            LedgerMutation::Deleted(_) => None,
        }
    }

    /// Every distinct entry state the mutation touches.
    pub fn states(&self) -> Vec<&LedgerEntry> {
        self.before().into_iter().chain(self.after()).collect()
    }

    pub fn kind(&self) -> &'static str {
        match self {
            LedgerMutation::Created(_) => "created",
            LedgerMutation::Updated { .. } => "updated",
            LedgerMutation::Deleted(_) => "deleted",
        }
    }
}

impl fmt::Display for LedgerMutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "entry {} {}", self.entry_id(), self.kind())
    }
}
