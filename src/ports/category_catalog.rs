//! Category catalog port.
//!
//! The catalog is owned elsewhere (an admin back office); the core only
//! reads multipliers and activity flags from it.

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::domain::foundation::{CategoryId, DomainError, SubCategoryId};
use crate::domain::waste::{SubCategory, WasteCategory};

/// Read access to waste categories and their scoring multipliers.
#[async_trait]
pub trait CategoryCatalog: Send + Sync {
    /// Current `score_per_unit` of a sub-category.
    ///
    /// # Errors
    ///
    /// - `CategoryNotFound` if the sub-category does not exist
    async fn get_multiplier(&self, id: SubCategoryId) -> Result<Decimal, DomainError>;

    /// Whether the sub-category accepts new entries and goals.
    ///
    /// # Errors
    ///
    /// - `CategoryNotFound` if the sub-category does not exist
    async fn is_active(&self, id: SubCategoryId) -> Result<bool, DomainError>;

    /// Full sub-category record, `None` if it does not exist.
    async fn find_sub_category(&self, id: SubCategoryId)
        -> Result<Option<SubCategory>, DomainError>;

    /// Top-level category record, `None` if it does not exist.
    async fn find_category(&self, id: CategoryId) -> Result<Option<WasteCategory>, DomainError>;
}
