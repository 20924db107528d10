//! Goal template reader port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, GoalTemplateId};
use crate::domain::goal::GoalTemplate;

#[async_trait]
pub trait GoalTemplateReader: Send + Sync {
    /// Find a template by id. Returns `None` if not found.
    async fn find_by_id(&self, id: &GoalTemplateId) -> Result<Option<GoalTemplate>, DomainError>;

    /// Every published template, ordered by name.
    async fn list_all(&self) -> Result<Vec<GoalTemplate>, DomainError>;
}
