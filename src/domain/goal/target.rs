//! What a goal counts: a whole category or a single sub-category.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{CategoryId, SubCategoryId};
use crate::domain::waste::SubCategory;

/// Exactly one of category or sub-category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum TargetScope {
    Category(CategoryId),
    SubCategory(SubCategoryId),
}

impl TargetScope {
    /// True if an entry filed under `sub_category_id` (whose parent is
    /// `category_id`, when known) falls in this scope.
    pub fn covers(&self, sub_category_id: SubCategoryId, category_id: Option<CategoryId>) -> bool {
        match self {
            TargetScope::SubCategory(id) => *id == sub_category_id,
            TargetScope::Category(id) => category_id == Some(*id),
        }
    }

    /// Both scopes an entry in `sub_category` can count towards.
    pub fn candidates_for(sub_category: &SubCategory) -> [TargetScope; 2] {
        [
            TargetScope::SubCategory(sub_category.id),
            TargetScope::Category(sub_category.category_id),
        ]
    }
}

impl fmt::Display for TargetScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetScope::Category(id) => write!(f, "category:{}", id),
            TargetScope::SubCategory(id) => write!(f, "sub_category:{}", id),
        }
    }
}
