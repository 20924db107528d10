//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors, events)
//! - `waste` - Category catalog entries, ledger entries and the scoring function
//! - `goal` - Goal aggregate, window arithmetic and the progress state machine
//! - `score` - Per-user running total and its consistency checks

pub mod foundation;
pub mod goal;
pub mod score;
pub mod waste;
