//! Goal-specific error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | NotFound | 404 |
//! | CategoryNotFound | 404 |
//! | TemplateNotFound | 404 |
//! | Forbidden | 403 |
//! | CategoryInactive | 400 |
//! | WindowStarted | 409 |
//! | InvalidInput | 400 |
//! | ValidationFailed | 400 |
//! | Infrastructure | 500 |

use crate::domain::foundation::{
    DomainError, ErrorCode, GoalId, GoalTemplateId, UserId, ValidationError,
};
use crate::domain::waste::ScoringError;

use super::TargetScope;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalError {
    NotFound(GoalId),

    /// The goal's target category or sub-category does not exist.
    CategoryNotFound(TargetScope),

    /// The target is deactivated and accepts no new goals.
    CategoryInactive(TargetScope),

    TemplateNotFound(GoalTemplateId),

    /// The goal belongs to someone else.
    Forbidden { goal_id: GoalId, user_id: UserId },

    /// Target, scope and timeframe are frozen once the window has started.
    WindowStarted(GoalId),

    /// A ledger value the scoring rule refuses (negative quantity, ...).
    InvalidInput(String),

    ValidationFailed { field: String, message: String },

    Infrastructure(String),
}

impl GoalError {
    pub fn not_found(id: GoalId) -> Self {
        GoalError::NotFound(id)
    }

    pub fn category_not_found(scope: TargetScope) -> Self {
        GoalError::CategoryNotFound(scope)
    }

    pub fn forbidden(goal_id: GoalId, user_id: UserId) -> Self {
        GoalError::Forbidden { goal_id, user_id }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        GoalError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        GoalError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            GoalError::NotFound(_) => ErrorCode::GoalNotFound,
            GoalError::CategoryNotFound(_) => ErrorCode::CategoryNotFound,
            GoalError::CategoryInactive(_) => ErrorCode::CategoryInactive,
            GoalError::TemplateNotFound(_) => ErrorCode::GoalTemplateNotFound,
            GoalError::Forbidden { .. } => ErrorCode::Forbidden,
            GoalError::WindowStarted(_) => ErrorCode::GoalWindowStarted,
            GoalError::InvalidInput(_) => ErrorCode::InvalidInput,
            GoalError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            GoalError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            GoalError::NotFound(id) => format!("Goal not found: {}", id),
            GoalError::CategoryNotFound(scope) => format!("Goal target not found: {}", scope),
            GoalError::CategoryInactive(scope) => {
                format!("{} is inactive and cannot be targeted", scope)
            }
            GoalError::TemplateNotFound(id) => format!("Goal template not found: {}", id),
            GoalError::Forbidden { goal_id, user_id } => {
                format!("User {} does not own goal {}", user_id, goal_id)
            }
            GoalError::WindowStarted(id) => {
                format!("Goal {} can no longer be changed: its window has started", id)
            }
            GoalError::InvalidInput(msg) => format!("Invalid input: {}", msg),
            GoalError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            GoalError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for GoalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for GoalError {}

impl From<ValidationError> for GoalError {
    fn from(err: ValidationError) -> Self {
        GoalError::validation(err.field().to_string(), err.to_string())
    }
}

impl From<ScoringError> for GoalError {
    fn from(err: ScoringError) -> Self {
        GoalError::InvalidInput(err.to_string())
    }
}

impl From<DomainError> for GoalError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::InvalidInput => GoalError::InvalidInput(err.message),
            ErrorCode::ValidationFailed => GoalError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => GoalError::Infrastructure(err.to_string()),
        }
    }
}

impl From<GoalError> for DomainError {
    fn from(err: GoalError) -> Self {
        DomainError::new(err.code(), err.message())
    }
}
