//! Adapters - Implementations of port interfaces.
//!
//! - `memory` - in-process storage for the catalog, ledger, totals, goals
//!   and templates
//! - `events` - event bus implementations
//! - `clock` - system and fixed clocks

pub mod clock;
pub mod events;
pub mod memory;

pub use clock::{FixedClock, SystemClock};
pub use events::InMemoryEventBus;
pub use memory::{
    InMemoryCategoryCatalog, InMemoryGoalRepository, InMemoryGoalTemplateStore,
    InMemoryLedgerStore, InMemoryUserScoreStore,
};
