//! Goal aggregate.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{GoalId, GoalTemplateId, Points, Timestamp, UserId, ValidationError};

use super::{GoalError, GoalEvaluation, GoalStatus, GoalWindow, TargetScope, Timeframe};

/// A user's score target for one category scope over one window.
///
/// # Invariants
///
/// - `target > 0`
/// - `anchor` never changes; the window is always derived from it
/// - `status` only moves forward (see [`GoalStatus`])
/// - `progress`/`status` are a cache of the last evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub id: GoalId,

    pub user_id: UserId,

    pub target_scope: TargetScope,

    pub timeframe: Timeframe,

    pub target: Points,

    /// Creation instant; the window starts here.
    pub anchor: Timestamp,

    pub progress: Points,

    pub status: GoalStatus,

    /// Template this goal was instantiated from, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<GoalTemplateId>,

    pub updated_at: Timestamp,
}

/// Requested changes to a goal that has not started yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoalAmendment {
    pub target_scope: Option<TargetScope>,
    pub timeframe: Option<Timeframe>,
    pub target: Option<Decimal>,
}

impl Goal {
    /// Creates an active goal anchored at `anchor`.
    ///
    /// # Errors
    ///
    /// `ValidationFailed` if the target is not positive after rounding.
    pub fn new(
        id: GoalId,
        user_id: UserId,
        target_scope: TargetScope,
        timeframe: Timeframe,
        target: Decimal,
        anchor: Timestamp,
    ) -> Result<Self, GoalError> {
        let target = validate_target(target)?;
        Ok(Self {
            id,
            user_id,
            target_scope,
            timeframe,
            target,
            anchor,
            progress: Points::ZERO,
            status: GoalStatus::Active,
            template_id: None,
            updated_at: anchor,
        })
    }

    pub fn with_template(mut self, template_id: GoalTemplateId) -> Self {
        self.template_id = Some(template_id);
        self
    }

    pub fn window(&self) -> GoalWindow {
        GoalWindow::for_anchor(self.anchor, self.timeframe)
    }

    /// Points still needed, floored at zero.
    pub fn remaining(&self) -> Points {
        self.target.saturating_sub(self.progress)
    }

    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }

    /// Stores an evaluation as the cached state.
    ///
    /// Returns the status the goal moved into, if it moved.
    pub fn apply(&mut self, evaluation: &GoalEvaluation, now: Timestamp) -> Option<GoalStatus> {
        let moved = self.status != evaluation.status;
        self.progress = evaluation.progress;
        self.status = evaluation.status;
        self.updated_at = now;
        moved.then_some(evaluation.status)
    }

    /// Changes target, scope or timeframe.
    ///
    /// # Errors
    ///
    /// - `WindowStarted` once `now` has reached the anchor
    /// - `ValidationFailed` for a non-positive target
    pub fn amend(&mut self, amendment: GoalAmendment, now: Timestamp) -> Result<(), GoalError> {
        if now >= self.anchor {
            return Err(GoalError::WindowStarted(self.id));
        }
        if let Some(target) = amendment.target {
            self.target = validate_target(target)?;
        }
        if let Some(scope) = amendment.target_scope {
            self.target_scope = scope;
        }
        if let Some(timeframe) = amendment.timeframe {
            self.timeframe = timeframe;
        }
        self.updated_at = now;
        Ok(())
    }
}

fn validate_target(target: Decimal) -> Result<Points, GoalError> {
    let rounded = Points::from_decimal(target);
    if rounded.value() <= Decimal::ZERO {
        return Err(ValidationError::out_of_range("target", "greater than zero", target).into());
    }
    Ok(rounded)
}
