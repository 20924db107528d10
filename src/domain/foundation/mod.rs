//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, errors and event infrastructure
//! that form the vocabulary of the waste-goals domain.

mod errors;
mod events;
mod ids;
mod points;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use events::{DomainEvent, EventEnvelope, EventId, EventMetadata, SerializableDomainEvent};
pub use ids::{CategoryId, GoalId, GoalTemplateId, LedgerEntryId, SubCategoryId, UserId};
pub use points::Points;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;

// Re-export the macro for use in domain modules
pub use crate::domain_event;
