//! In-memory goal template store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, GoalTemplateId};
use crate::domain::goal::GoalTemplate;
use crate::ports::GoalTemplateReader;

#[derive(Debug, Clone, Default)]
pub struct InMemoryGoalTemplateStore {
    templates: Arc<RwLock<HashMap<GoalTemplateId, GoalTemplate>>>,
}

impl InMemoryGoalTemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add(&self, template: GoalTemplate) {
        self.templates.write().await.insert(template.id, template);
    }
}

#[async_trait]
impl GoalTemplateReader for InMemoryGoalTemplateStore {
    async fn find_by_id(&self, id: &GoalTemplateId) -> Result<Option<GoalTemplate>, DomainError> {
        Ok(self.templates.read().await.get(id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<GoalTemplate>, DomainError> {
        let mut templates: Vec<GoalTemplate> =
            self.templates.read().await.values().cloned().collect();
        templates.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(templates)
    }
}
