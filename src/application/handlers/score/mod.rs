//! Score handlers.
//!
//! ## Commands
//! - Applying ledger mutations to the running total
//! - Reconciling a total against a full recount
//!
//! ## Queries
//! - Period score summary

mod aggregate_maintainer;
mod get_score_summary;
mod reconcile_user_score;

pub use aggregate_maintainer::{AggregateMaintainer, ScoreAdjustment};
pub use get_score_summary::{GetScoreSummaryHandler, GetScoreSummaryQuery};
pub use reconcile_user_score::{
    ReconcileUserScoreCommand, ReconcileUserScoreHandler, ReconcileUserScoreResult,
};
