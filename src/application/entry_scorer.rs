//! Scores ledger entries against the category catalog.
//!
//! Two paths share one rule set:
//!
//! - [`EntryScorer::score`] is strict and feeds the running total. A
//!   sub-category missing from the catalog is an error.
//! - [`EntryScorer::contribution`] feeds goal progress. A sub-category that
//!   left the catalog still counts its history through the entry's
//!   multiplier snapshot, or as zero when there is none.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::domain::foundation::{DomainError, Points};
use crate::domain::goal::Contribution;
use crate::domain::waste::{score, LedgerEntry, MultiplierMode, WindowBasis};
use crate::ports::CategoryCatalog;

#[derive(Clone)]
pub struct EntryScorer {
    catalog: Arc<dyn CategoryCatalog>,
    mode: MultiplierMode,
}

impl EntryScorer {
    pub fn new(catalog: Arc<dyn CategoryCatalog>, mode: MultiplierMode) -> Self {
        Self { catalog, mode }
    }

    pub fn mode(&self) -> MultiplierMode {
        self.mode
    }

    /// Score used by the aggregate maintainer and full recounts.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` for a negative quantity or non-positive multiplier
    /// - `CategoryNotFound` when a live multiplier is needed and missing
    ///
    /// In live mode, an entry without a snapshot whose sub-category has
    /// left the catalog cannot be scored at all. Deleting it leaves its
    /// points in the running total, and every recount of its owner fails,
    /// until the sub-category is restored or the entry's multiplier is
    /// snapshotted. Goal progress uses [`EntryScorer::contribution`], which
    /// scores such an entry as zero instead.
    pub async fn score(&self, entry: &LedgerEntry) -> Result<Points, DomainError> {
        let Some(sub_category_id) = entry.sub_category_id else {
            return Ok(score(entry.quantity, None)?);
        };
        if entry.quantity.is_none() {
            return Ok(Points::ZERO);
        }
        let multiplier = match self.snapshot_of(entry) {
            Some(snapshot) => snapshot,
            None => self.catalog.get_multiplier(sub_category_id).await?,
        };
        Ok(score(entry.quantity, Some(multiplier))?)
    }

    /// The entry as a goal-progress contribution, `None` when it is
    /// uncategorized.
    pub async fn contribution(
        &self,
        entry: &LedgerEntry,
        basis: WindowBasis,
    ) -> Result<Option<Contribution>, DomainError> {
        let Some(sub_category_id) = entry.sub_category_id else {
            score(entry.quantity, None)?;
            return Ok(None);
        };

        let sub_category = self.catalog.find_sub_category(sub_category_id).await?;
        let multiplier = self.snapshot_of(entry).or_else(|| {
            sub_category
                .as_ref()
                .map(|s| s.score_per_unit)
                .or(entry.score_per_unit_snapshot)
        });

        let points = match multiplier {
            Some(m) => score(entry.quantity, Some(m))?,
            None => {
                tracing::debug!(
                    entry_id = %entry.id,
                    sub_category_id = %sub_category_id,
                    "Sub-category left the catalog and entry has no snapshot; counting zero"
                );
                score(entry.quantity, None)?
            }
        };

        Ok(Some(Contribution {
            entry_id: entry.id,
            sub_category_id,
            category_id: sub_category.map(|s| s.category_id),
            at: entry.timestamp_for(basis),
            points,
        }))
    }

    fn snapshot_of(&self, entry: &LedgerEntry) -> Option<Decimal> {
        match self.mode {
            MultiplierMode::Snapshot => entry.score_per_unit_snapshot,
            MultiplierMode::Live => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryCategoryCatalog;
    use crate::domain::foundation::{CategoryId, ErrorCode, SubCategoryId, Timestamp, UserId};
    use crate::domain::waste::{SubCategory, Unit};
    use rust_decimal_macros::dec;

    async fn catalog() -> Arc<InMemoryCategoryCatalog> {
        let catalog = Arc::new(InMemoryCategoryCatalog::new());
        catalog
            .add_sub_category(
                SubCategory::new(
                    SubCategoryId::new(1),
                    CategoryId::new(10),
                    "PET bottles",
                    Unit::Kg,
                    dec!(1.5),
                )
                .unwrap(),
            )
            .await;
        catalog
    }

    fn entry(sub: Option<i64>, quantity: Option<Decimal>) -> LedgerEntry {
        let now = Timestamp::now();
        LedgerEntry::new(
            UserId::new("u1").unwrap(),
            sub.map(SubCategoryId::new),
            quantity,
            now,
            now,
        )
    }

    #[tokio::test]
    async fn scores_quantity_times_live_multiplier() {
        let scorer = EntryScorer::new(catalog().await, MultiplierMode::Live);
        let points = scorer.score(&entry(Some(1), Some(dec!(3)))).await.unwrap();
        assert_eq!(points.value(), dec!(4.50));
    }

    #[tokio::test]
    async fn uncategorized_or_empty_entries_score_zero() {
        let scorer = EntryScorer::new(catalog().await, MultiplierMode::Live);
        assert_eq!(scorer.score(&entry(None, Some(dec!(3)))).await.unwrap(), Points::ZERO);
        assert_eq!(scorer.score(&entry(Some(1), None)).await.unwrap(), Points::ZERO);
        assert!(scorer
            .contribution(&entry(None, Some(dec!(3))), WindowBasis::DisposedAt)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn negative_quantity_is_rejected_even_when_uncategorized() {
        let scorer = EntryScorer::new(catalog().await, MultiplierMode::Live);
        let err = scorer.score(&entry(None, Some(dec!(-1)))).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }

    #[tokio::test]
    async fn strict_path_propagates_missing_category() {
        let scorer = EntryScorer::new(catalog().await, MultiplierMode::Live);
        let err = scorer.score(&entry(Some(99), Some(dec!(1)))).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::CategoryNotFound);
    }

    #[tokio::test]
    async fn snapshot_mode_prefers_captured_multiplier() {
        let catalog = catalog().await;
        let scorer = EntryScorer::new(catalog.clone(), MultiplierMode::Snapshot);
        let e = entry(Some(1), Some(dec!(2))).with_snapshot(dec!(1.5));
        catalog.set_multiplier(SubCategoryId::new(1), dec!(4)).await;

        assert_eq!(scorer.score(&e).await.unwrap().value(), dec!(3));

        let live = EntryScorer::new(catalog, MultiplierMode::Live);
        assert_eq!(live.score(&e).await.unwrap().value(), dec!(8));
    }

    #[tokio::test]
    async fn contribution_carries_parent_category() {
        let scorer = EntryScorer::new(catalog().await, MultiplierMode::Live);
        let c = scorer
            .contribution(&entry(Some(1), Some(dec!(2))), WindowBasis::DisposedAt)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(c.category_id, Some(CategoryId::new(10)));
        assert_eq!(c.points.value(), dec!(3));
    }

    #[tokio::test]
    async fn removed_category_uses_snapshot_or_zero() {
        let catalog = catalog().await;
        let scorer = EntryScorer::new(catalog.clone(), MultiplierMode::Live);
        catalog.remove_sub_category(SubCategoryId::new(1)).await;

        let bare = scorer
            .contribution(&entry(Some(1), Some(dec!(2))), WindowBasis::DisposedAt)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(bare.points, Points::ZERO);
        assert_eq!(bare.category_id, None);

        let snapped = scorer
            .contribution(
                &entry(Some(1), Some(dec!(2))).with_snapshot(dec!(1.5)),
                WindowBasis::DisposedAt,
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(snapped.points.value(), dec!(3));
    }
}
