//! CreateGoalHandler - Command handler for creating goals.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::application::{LockScope, UserLockRegistry};
use crate::domain::foundation::{GoalId, SerializableDomainEvent, Timestamp, UserId};
use crate::domain::goal::{Goal, GoalCreated, GoalError, TargetScope, Timeframe};
use crate::ports::{CategoryCatalog, EventPublisher, GoalRepository};

use super::GoalProgressEngine;

/// Command to create a goal anchored at the current instant.
#[derive(Debug, Clone)]
pub struct CreateGoalCommand {
    pub user_id: UserId,
    pub target_scope: TargetScope,
    pub timeframe: Timeframe,
    pub target: Decimal,
}

/// Result of successful goal creation.
#[derive(Debug, Clone)]
pub struct CreateGoalResult {
    /// The goal after its initial evaluation.
    pub goal: Goal,
    pub event: GoalCreated,
}

/// Handler for creating goals.
///
/// The target must exist and be active. The new goal is evaluated once
/// right away so entries already logged at the anchor instant count.
pub struct CreateGoalHandler {
    catalog: Arc<dyn CategoryCatalog>,
    goals: Arc<dyn GoalRepository>,
    engine: Arc<GoalProgressEngine>,
    event_publisher: Arc<dyn EventPublisher>,
    locks: Arc<UserLockRegistry>,
}

impl CreateGoalHandler {
    pub fn new(
        catalog: Arc<dyn CategoryCatalog>,
        goals: Arc<dyn GoalRepository>,
        engine: Arc<GoalProgressEngine>,
        event_publisher: Arc<dyn EventPublisher>,
        locks: Arc<UserLockRegistry>,
    ) -> Self {
        Self {
            catalog,
            goals,
            engine,
            event_publisher,
            locks,
        }
    }

    pub async fn handle(&self, cmd: CreateGoalCommand) -> Result<CreateGoalResult, GoalError> {
        self.ensure_targetable(cmd.target_scope).await?;

        let goal = Goal::new(
            GoalId::new(),
            cmd.user_id,
            cmd.target_scope,
            cmd.timeframe,
            cmd.target,
            self.now(),
        )?;

        self.register(goal).await
    }

    pub(super) fn now(&self) -> Timestamp {
        self.engine.now()
    }

    /// Rejects scopes that are missing from the catalog or deactivated.
    pub(super) async fn ensure_targetable(&self, scope: TargetScope) -> Result<(), GoalError> {
        let active = match scope {
            TargetScope::SubCategory(id) => self
                .catalog
                .find_sub_category(id)
                .await?
                .map(|sub| sub.is_active),
            TargetScope::Category(id) => self
                .catalog
                .find_category(id)
                .await?
                .map(|category| category.is_active),
        };

        match active {
            None => Err(GoalError::category_not_found(scope)),
            Some(false) => Err(GoalError::CategoryInactive(scope)),
            Some(true) => Ok(()),
        }
    }

    /// Persists a fresh goal, evaluates it and announces it.
    pub(super) async fn register(&self, goal: Goal) -> Result<CreateGoalResult, GoalError> {
        let _guard = self.locks.acquire(LockScope::Goals, &goal.user_id).await;

        self.goals.save(&goal).await?;
        let event = GoalCreated::from_goal(&goal);

        info!(
            goal_id = %goal.id,
            user_id = %goal.user_id,
            scope = %goal.target_scope,
            timeframe = %goal.timeframe,
            target = %goal.target,
            "Goal created"
        );

        let published = match event.to_envelope() {
            Ok(envelope) => self.event_publisher.publish(envelope).await,
            Err(e) => Err(e),
        };
        if let Err(e) = published {
            warn!(goal_id = %goal.id, error = %e, "Failed to publish goal.created");
        }

        let refresh = self.engine.refresh(goal).await?;

        Ok(CreateGoalResult {
            goal: refresh.goal,
            event,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{
        FixedClock, InMemoryCategoryCatalog, InMemoryEventBus, InMemoryGoalRepository,
        InMemoryLedgerStore,
    };
    use crate::application::EntryScorer;
    use crate::domain::foundation::{CategoryId, SubCategoryId};
    use crate::domain::goal::GoalStatus;
    use crate::domain::waste::{MultiplierMode, SubCategory, Unit, WasteCategory, WindowBasis};
    use rust_decimal_macros::dec;

    struct Fixture {
        handler: CreateGoalHandler,
        catalog: Arc<InMemoryCategoryCatalog>,
        goals: Arc<InMemoryGoalRepository>,
        bus: Arc<InMemoryEventBus>,
        now: Timestamp,
    }

    async fn fixture() -> Fixture {
        let catalog = Arc::new(InMemoryCategoryCatalog::new());
        catalog
            .add_category(WasteCategory::new(CategoryId::new(1), "Recyclable").unwrap())
            .await;
        catalog
            .add_sub_category(
                SubCategory::new(
                    SubCategoryId::new(1),
                    CategoryId::new(1),
                    "Glass",
                    Unit::Kg,
                    dec!(2),
                )
                .unwrap(),
            )
            .await;
        let goals = Arc::new(InMemoryGoalRepository::new());
        let bus = Arc::new(InMemoryEventBus::new());
        let now = Timestamp::now();
        let engine = Arc::new(GoalProgressEngine::new(
            EntryScorer::new(catalog.clone(), MultiplierMode::Live),
            Arc::new(InMemoryLedgerStore::new()),
            goals.clone(),
            bus.clone(),
            Arc::new(FixedClock::new(now)),
            WindowBasis::DisposedAt,
        ));
        let handler = CreateGoalHandler::new(
            catalog.clone(),
            goals.clone(),
            engine,
            bus.clone(),
            Arc::new(UserLockRegistry::new()),
        );
        Fixture { handler, catalog, goals, bus, now }
    }

    fn command(scope: TargetScope, target: Decimal) -> CreateGoalCommand {
        CreateGoalCommand {
            user_id: UserId::new("u1").unwrap(),
            target_scope: scope,
            timeframe: Timeframe::Weekly,
            target,
        }
    }

    #[tokio::test]
    async fn creates_active_goal_anchored_now() {
        let f = fixture().await;
        let result = f
            .handler
            .handle(command(TargetScope::SubCategory(SubCategoryId::new(1)), dec!(20)))
            .await
            .unwrap();

        assert_eq!(result.goal.status, GoalStatus::Active);
        assert_eq!(result.goal.anchor, f.now);
        assert_eq!(result.event.window_end, f.now.add_days(7));
        assert!(f.goals.find_by_id(&result.goal.id).await.unwrap().is_some());
        assert!(f.bus.has_event("goal.created.v1").await);
    }

    #[tokio::test]
    async fn category_scope_is_accepted() {
        let f = fixture().await;
        let result = f
            .handler
            .handle(command(TargetScope::Category(CategoryId::new(1)), dec!(5)))
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn unknown_target_is_rejected() {
        let f = fixture().await;
        let scope = TargetScope::SubCategory(SubCategoryId::new(9));
        let err = f.handler.handle(command(scope, dec!(5))).await.unwrap_err();
        assert_eq!(err, GoalError::CategoryNotFound(scope));
        assert!(f.goals.is_empty().await);
    }

    #[tokio::test]
    async fn inactive_sub_category_is_rejected() {
        let f = fixture().await;
        f.catalog.deactivate(SubCategoryId::new(1)).await;
        let scope = TargetScope::SubCategory(SubCategoryId::new(1));
        let err = f.handler.handle(command(scope, dec!(5))).await.unwrap_err();
        assert_eq!(err, GoalError::CategoryInactive(scope));
    }

    #[tokio::test]
    async fn non_positive_target_is_rejected() {
        let f = fixture().await;
        let err = f
            .handler
            .handle(command(TargetScope::SubCategory(SubCategoryId::new(1)), dec!(0)))
            .await
            .unwrap_err();
        assert!(matches!(err, GoalError::ValidationFailed { .. }));
        assert_eq!(f.bus.event_count().await, 0);
    }
}
