//! Event bus adapters.
//!
//! - `InMemoryEventBus` - in-process bus capturing envelopes

mod in_memory;

pub use in_memory::InMemoryEventBus;
