//! GoalProgressEngine - recomputes a goal from the ledger and persists the
//! result.
//!
//! Callers hold the user's `Goals` lock around [`GoalProgressEngine::refresh`].

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::EntryScorer;
use crate::domain::foundation::{
    DomainError, EventEnvelope, EventId, SerializableDomainEvent, Timestamp,
};
use crate::domain::goal::{
    compute_progress, evaluate, Goal, GoalAchieved, GoalEvaluation, GoalFailed, GoalStatus,
};
use crate::domain::waste::WindowBasis;
use crate::ports::{Clock, EventPublisher, GoalRepository, LedgerReader};

/// A goal after recomputation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalRefresh {
    pub goal: Goal,
    pub evaluation: GoalEvaluation,
    /// Whether the cached state had to be written.
    pub persisted: bool,
}

pub struct GoalProgressEngine {
    scorer: EntryScorer,
    ledger: Arc<dyn LedgerReader>,
    goals: Arc<dyn GoalRepository>,
    event_publisher: Arc<dyn EventPublisher>,
    clock: Arc<dyn Clock>,
    basis: WindowBasis,
}

impl GoalProgressEngine {
    pub fn new(
        scorer: EntryScorer,
        ledger: Arc<dyn LedgerReader>,
        goals: Arc<dyn GoalRepository>,
        event_publisher: Arc<dyn EventPublisher>,
        clock: Arc<dyn Clock>,
        basis: WindowBasis,
    ) -> Self {
        Self {
            scorer,
            ledger,
            goals,
            event_publisher,
            clock,
            basis,
        }
    }

    pub fn basis(&self) -> WindowBasis {
        self.basis
    }

    pub fn now(&self) -> Timestamp {
        self.clock.now()
    }

    /// Evaluates `goal` at `now` without writing anything.
    pub async fn evaluate(
        &self,
        goal: &Goal,
        now: Timestamp,
    ) -> Result<GoalEvaluation, DomainError> {
        let window = goal.window();
        let end = window.effective_end(now);

        let mut contributions = Vec::new();
        if end >= window.start {
            let entries = self
                .ledger
                .list_for_owner_between(&goal.user_id, self.basis, window.start, end)
                .await?;
            for entry in &entries {
                if let Some(c) = self.scorer.contribution(entry, self.basis).await? {
                    contributions.push(c);
                }
            }
        }

        let progress = compute_progress(goal, &contributions, now);
        Ok(evaluate(goal, progress, now))
    }

    /// Recomputes, persists if the cache is stale, and announces status
    /// transitions.
    pub async fn refresh(&self, mut goal: Goal) -> Result<GoalRefresh, DomainError> {
        let now = self.clock.now();
        let evaluation = self.evaluate(&goal, now).await?;

        let persisted = evaluation.differs_from(&goal);
        if persisted {
            self.goals
                .persist_goal_state(&goal.id, evaluation.progress, evaluation.status, now)
                .await?;
        }
        let transition = goal.apply(&evaluation, now);

        debug!(
            goal_id = %goal.id,
            user_id = %goal.user_id,
            progress = %goal.progress,
            target = %goal.target,
            status = %goal.status,
            persisted,
            "Goal progress recomputed"
        );

        if let Some(status) = transition {
            info!(
                goal_id = %goal.id,
                user_id = %goal.user_id,
                from = %evaluation.previous_status,
                to = %status,
                "Goal status changed"
            );
            self.announce(&goal, status, now).await;
        }

        Ok(GoalRefresh {
            goal,
            evaluation,
            persisted,
        })
    }

    async fn announce(&self, goal: &Goal, status: GoalStatus, now: Timestamp) {
        let envelope: Result<Option<EventEnvelope>, DomainError> = match status {
            GoalStatus::Achieved => GoalAchieved {
                event_id: EventId::new(),
                goal_id: goal.id,
                user_id: goal.user_id.clone(),
                progress: goal.progress,
                target: goal.target,
                achieved_at: now,
            }
            .to_envelope()
            .map(Some),
            GoalStatus::Failed => GoalFailed {
                event_id: EventId::new(),
                goal_id: goal.id,
                user_id: goal.user_id.clone(),
                progress: goal.progress,
                target: goal.target,
                window_end: goal.window().end,
                failed_at: now,
            }
            .to_envelope()
            .map(Some),
            GoalStatus::Active => Ok(None),
        };

        let result = match envelope {
            Ok(Some(envelope)) => self.event_publisher.publish(envelope).await,
            Ok(None) => Ok(()),
            Err(e) => Err(e),
        };
        if let Err(e) = result {
            warn!(goal_id = %goal.id, status = %status, error = %e, "Failed to publish goal event");
        }
    }
}
