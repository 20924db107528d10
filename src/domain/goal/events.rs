//! Goal domain events.
//!
//! - `GoalCreated` - New goal created (directly or from a template)
//! - `GoalAchieved` - Progress reached the target
//! - `GoalFailed` - Window closed below target
//!
//! Notification and reward collaborators subscribe to these; the core
//! emits each at most once per goal because status transitions are
//! one-way.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{domain_event, EventId, GoalId, Points, Timestamp, UserId};

use super::{Goal, TargetScope, Timeframe};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalCreated {
    pub event_id: EventId,
    pub goal_id: GoalId,
    pub user_id: UserId,
    pub target_scope: TargetScope,
    pub timeframe: Timeframe,
    pub target: Points,
    pub window_end: Timestamp,
    pub created_at: Timestamp,
}

domain_event!(
    GoalCreated,
    event_type = "goal.created.v1",
    aggregate_id = goal_id,
    aggregate_type = "Goal",
    occurred_at = created_at,
    event_id = event_id
);

impl GoalCreated {
    pub fn from_goal(goal: &Goal) -> Self {
        Self {
            event_id: EventId::new(),
            goal_id: goal.id,
            user_id: goal.user_id.clone(),
            target_scope: goal.target_scope,
            timeframe: goal.timeframe,
            target: goal.target,
            window_end: goal.window().end,
            created_at: goal.anchor,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalAchieved {
    pub event_id: EventId,
    pub goal_id: GoalId,
    pub user_id: UserId,
    pub progress: Points,
    pub target: Points,
    pub achieved_at: Timestamp,
}

domain_event!(
    GoalAchieved,
    event_type = "goal.achieved.v1",
    aggregate_id = goal_id,
    aggregate_type = "Goal",
    occurred_at = achieved_at,
    event_id = event_id
);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalFailed {
    pub event_id: EventId,
    pub goal_id: GoalId,
    pub user_id: UserId,
    pub progress: Points,
    pub target: Points,
    pub window_end: Timestamp,
    pub failed_at: Timestamp,
}

domain_event!(
    GoalFailed,
    event_type = "goal.failed.v1",
    aggregate_id = goal_id,
    aggregate_type = "Goal",
    occurred_at = failed_at,
    event_id = event_id
);
