//! Ledger entries - one disposal record each.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{LedgerEntryId, SubCategoryId, Timestamp, UserId};

/// Which of an entry's two timestamps places it inside a goal window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowBasis {
    /// Caller-supplied disposal time.
    #[default]
    DisposedAt,
    /// Server-assigned logging time.
    LoggedAt,
}

/// A disposal record as owned by the ledger.
///
/// The core never mutates entries; it receives before/after copies from
/// the ledger write path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub id: LedgerEntryId,

    pub user_id: UserId,

    /// `None` for uncategorized entries, which are never scored.
    pub sub_category_id: Option<SubCategoryId>,

    /// `None` is allowed and scores zero.
    pub quantity: Option<Decimal>,

    /// Set by the ledger when the entry is created; never changes.
    pub logged_at: Timestamp,

    pub disposed_at: Timestamp,

    /// Catalog multiplier captured at creation, used in snapshot mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score_per_unit_snapshot: Option<Decimal>,
}

impl LedgerEntry {
    pub fn new(
        user_id: UserId,
        sub_category_id: Option<SubCategoryId>,
        quantity: Option<Decimal>,
        logged_at: Timestamp,
        disposed_at: Timestamp,
    ) -> Self {
        Self {
            id: LedgerEntryId::new(),
            user_id,
            sub_category_id,
            quantity,
            logged_at,
            disposed_at,
            score_per_unit_snapshot: None,
        }
    }

    pub fn with_snapshot(mut self, score_per_unit: Decimal) -> Self {
        self.score_per_unit_snapshot = Some(score_per_unit);
        self
    }

    /// True when both a category and a quantity are present.
    pub fn is_scored(&self) -> bool {
        self.sub_category_id.is_some() && self.quantity.is_some()
    }

    pub fn timestamp_for(&self, basis: WindowBasis) -> Timestamp {
        match basis {
            WindowBasis::DisposedAt => self.disposed_at,
            WindowBasis::LoggedAt => self.logged_at,
        }
    }
}
