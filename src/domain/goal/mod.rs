//! Goal module - goal aggregate, windows and the progress state machine.
//!
//! A goal targets one category scope for one window anchored at the
//! instant it was created. Progress and status are always derivable from
//! the goal plus the ledger; the values stored on the aggregate are a
//! cache refreshed by [`evaluate`].

mod aggregate;
mod errors;
mod events;
mod progress;
mod status;
mod target;
mod template;
mod timeframe;

pub use aggregate::{Goal, GoalAmendment};
pub use errors::GoalError;
pub use events::{GoalAchieved, GoalCreated, GoalFailed};
pub use progress::{compute_progress, evaluate, Contribution, GoalEvaluation};
pub use status::GoalStatus;
pub use target::TargetScope;
pub use template::GoalTemplate;
pub use timeframe::{GoalWindow, Timeframe};
