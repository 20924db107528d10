//! Goal status state machine.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Lifecycle status of a goal within its single window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    /// Window open (or just closed) and target not yet reached.
    #[default]
    Active,

    /// Progress reached the target. Terminal.
    Achieved,

    /// Window closed below target. Terminal.
    Failed,
}

impl GoalStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, GoalStatus::Active)
    }
}

impl StateMachine for GoalStatus {
    fn valid_transitions(&self) -> Vec<Self> {
        match self {
            GoalStatus::Active => vec![GoalStatus::Achieved, GoalStatus::Failed],
            GoalStatus::Achieved | GoalStatus::Failed => vec![],
        }
    }
}

impl fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GoalStatus::Active => "active",
            GoalStatus::Achieved => "achieved",
            GoalStatus::Failed => "failed",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_active() {
        assert_eq!(GoalStatus::default(), GoalStatus::Active);
    }

    #[test]
    fn active_moves_to_either_terminal_state() {
        assert!(GoalStatus::Active.can_transition_to(&GoalStatus::Achieved));
        assert!(GoalStatus::Active.can_transition_to(&GoalStatus::Failed));
    }

    #[test]
    fn terminal_states_never_revert() {
        for terminal in [GoalStatus::Achieved, GoalStatus::Failed] {
            assert!(terminal.is_terminal());
            assert!(terminal.transition_to(GoalStatus::Active).is_err());
        }
        assert!(GoalStatus::Achieved
            .transition_to(GoalStatus::Failed)
            .is_err());
    }

    #[test]
    fn serializes_to_snake_case_json() {
        assert_eq!(
            serde_json::to_string(&GoalStatus::Achieved).unwrap(),
            "\"achieved\""
        );
        let status: GoalStatus = serde_json::from_str("\"failed\"").unwrap();
        assert_eq!(status, GoalStatus::Failed);
    }

    #[test]
    fn display_matches_wire_names() {
        assert_eq!(GoalStatus::Active.to_string(), "active");
    }
}
