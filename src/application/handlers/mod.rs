//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod goal;
pub mod ledger;
pub mod score;

pub use goal::{
    CreateGoalCommand, CreateGoalFromTemplateCommand, CreateGoalFromTemplateHandler,
    CreateGoalHandler, CreateGoalResult, DeleteGoalCommand, DeleteGoalHandler,
    GetGoalProgressHandler, GetGoalProgressQuery, GoalProgressEngine, GoalProgressView,
    GoalRefresh, GoalUpdateTrigger, ListUserGoalsHandler, ListUserGoalsQuery,
};
pub use ledger::{LedgerMutationHandler, LedgerMutationOutcome};
pub use score::{
    AggregateMaintainer, GetScoreSummaryHandler, GetScoreSummaryQuery, ReconcileUserScoreCommand,
    ReconcileUserScoreHandler, ReconcileUserScoreResult, ScoreAdjustment,
};
