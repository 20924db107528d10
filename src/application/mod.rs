//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

mod entry_scorer;
pub mod handlers;
mod locks;

pub use entry_scorer::EntryScorer;
pub use handlers::*;
pub use locks::{LockScope, UserLockRegistry};
