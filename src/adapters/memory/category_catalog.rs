//! In-memory category catalog.

use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{CategoryId, DomainError, ErrorCode, SubCategoryId};
use crate::domain::waste::{SubCategory, WasteCategory};
use crate::ports::CategoryCatalog;

#[derive(Debug, Clone, Default)]
pub struct InMemoryCategoryCatalog {
    categories: Arc<RwLock<HashMap<CategoryId, WasteCategory>>>,
    sub_categories: Arc<RwLock<HashMap<SubCategoryId, SubCategory>>>,
}

impl InMemoryCategoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_category(&self, category: WasteCategory) {
        self.categories.write().await.insert(category.id, category);
    }

    pub async fn add_sub_category(&self, sub_category: SubCategory) {
        self.sub_categories
            .write()
            .await
            .insert(sub_category.id, sub_category);
    }

    /// Change a multiplier in place. Returns `false` if the id is unknown.
    pub async fn set_multiplier(&self, id: SubCategoryId, score_per_unit: Decimal) -> bool {
        match self.sub_categories.write().await.get_mut(&id) {
            Some(sub) => {
                sub.score_per_unit = score_per_unit;
                true
            }
            None => false,
        }
    }

    pub async fn deactivate(&self, id: SubCategoryId) -> bool {
        match self.sub_categories.write().await.get_mut(&id) {
            Some(sub) => {
                sub.is_active = false;
                true
            }
            None => false,
        }
    }

    /// Remove a sub-category, as an admin deleting it would.
    pub async fn remove_sub_category(&self, id: SubCategoryId) -> Option<SubCategory> {
        self.sub_categories.write().await.remove(&id)
    }

    async fn require(&self, id: SubCategoryId) -> Result<SubCategory, DomainError> {
        self.sub_categories
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::CategoryNotFound,
                    format!("Sub-category {} not found", id),
                )
            })
    }
}

#[async_trait]
impl CategoryCatalog for InMemoryCategoryCatalog {
    async fn get_multiplier(&self, id: SubCategoryId) -> Result<Decimal, DomainError> {
        Ok(self.require(id).await?.score_per_unit)
    }

    async fn is_active(&self, id: SubCategoryId) -> Result<bool, DomainError> {
        Ok(self.require(id).await?.is_active)
    }

    async fn find_sub_category(
        &self,
        id: SubCategoryId,
    ) -> Result<Option<SubCategory>, DomainError> {
        Ok(self.sub_categories.read().await.get(&id).cloned())
    }

    async fn find_category(&self, id: CategoryId) -> Result<Option<WasteCategory>, DomainError> {
        Ok(self.categories.read().await.get(&id).cloned())
    }
}
