//! Goal handlers.
//!
//! ## Commands
//! - Creating goals directly or from a template
//! - Deleting goals
//! - Refreshing goals after a ledger mutation
//!
//! ## Queries
//! - Goal progress (always recomputed)
//! - A user's goals

mod create_goal;
mod create_goal_from_template;
mod delete_goal;
mod get_goal_progress;
mod goal_update_trigger;
mod list_user_goals;
mod progress_engine;

// Commands
pub use create_goal::{CreateGoalCommand, CreateGoalHandler, CreateGoalResult};
pub use create_goal_from_template::{CreateGoalFromTemplateCommand, CreateGoalFromTemplateHandler};
pub use delete_goal::{DeleteGoalCommand, DeleteGoalHandler};
pub use goal_update_trigger::GoalUpdateTrigger;
pub use progress_engine::{GoalProgressEngine, GoalRefresh};

// Queries
pub use get_goal_progress::{GetGoalProgressHandler, GetGoalProgressQuery, GoalProgressView};
pub use list_user_goals::{ListUserGoalsHandler, ListUserGoalsQuery};
