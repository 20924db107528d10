//! Goal templates - curated goals users can adopt in one step.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    GoalId, GoalTemplateId, SubCategoryId, Timestamp, UserId, ValidationError,
};

use super::{Goal, GoalError, TargetScope, Timeframe};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalTemplate {
    pub id: GoalTemplateId,
    pub name: String,
    pub description: String,
    pub sub_category_id: SubCategoryId,
    pub target: Decimal,
    pub timeframe: Timeframe,
}

impl GoalTemplate {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        sub_category_id: SubCategoryId,
        target: Decimal,
        timeframe: Timeframe,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if target <= Decimal::ZERO {
            return Err(ValidationError::out_of_range("target", "greater than zero", target));
        }
        Ok(Self {
            id: GoalTemplateId::new(),
            name,
            description: description.into(),
            sub_category_id,
            target,
            timeframe,
        })
    }

    pub fn target_scope(&self) -> TargetScope {
        TargetScope::SubCategory(self.sub_category_id)
    }

    /// A fresh goal for `user_id` anchored at `anchor`.
    pub fn instantiate(&self, user_id: UserId, anchor: Timestamp) -> Result<Goal, GoalError> {
        Ok(Goal::new(
            GoalId::new(),
            user_id,
            self.target_scope(),
            self.timeframe,
            self.target,
            anchor,
        )?
        .with_template(self.id))
    }
}
