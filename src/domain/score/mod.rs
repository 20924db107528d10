//! Score module - the per-user running total.
//!
//! The total is a denormalized sum over the ledger. It only moves through
//! [`ScoreDelta`]s computed from the exact before/after entry states of a
//! mutation, and can be audited against a full recount with
//! [`ConsistencyViolation::check`].

mod consistency;
mod delta;
mod events;
mod summary;
mod user_score;

pub use consistency::ConsistencyViolation;
pub use delta::ScoreDelta;
pub use events::UserScoreAdjusted;
pub use summary::ScoreSummary;
pub use user_score::UserScore;
