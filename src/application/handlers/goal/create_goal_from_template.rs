//! CreateGoalFromTemplateHandler - adopts a curated goal template.

use std::sync::Arc;

use crate::domain::foundation::{GoalTemplateId, UserId};
use crate::domain::goal::GoalError;
use crate::ports::GoalTemplateReader;

use super::{CreateGoalHandler, CreateGoalResult};

#[derive(Debug, Clone)]
pub struct CreateGoalFromTemplateCommand {
    pub user_id: UserId,
    pub template_id: GoalTemplateId,
}

pub struct CreateGoalFromTemplateHandler {
    templates: Arc<dyn GoalTemplateReader>,
    create: Arc<CreateGoalHandler>,
}

impl CreateGoalFromTemplateHandler {
    pub fn new(templates: Arc<dyn GoalTemplateReader>, create: Arc<CreateGoalHandler>) -> Self {
        Self { templates, create }
    }

    pub async fn handle(
        &self,
        cmd: CreateGoalFromTemplateCommand,
    ) -> Result<CreateGoalResult, GoalError> {
        let template = self
            .templates
            .find_by_id(&cmd.template_id)
            .await?
            .ok_or(GoalError::TemplateNotFound(cmd.template_id))?;

        self.create.ensure_targetable(template.target_scope()).await?;
        let goal = template.instantiate(cmd.user_id, self.create.now())?;
        self.create.register(goal).await
    }
}
