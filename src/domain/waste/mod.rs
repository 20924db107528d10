//! Waste module - catalog entries, ledger entries and scoring.
//!
//! The catalog and the ledger are owned by the surrounding application;
//! this module holds the shapes the core reads from them and the single
//! scoring rule every aggregate is built on.

mod category;
mod ledger_entry;
mod mutation;
mod scoring;

pub use category::{SubCategory, Unit, WasteCategory};
pub use ledger_entry::{LedgerEntry, WindowBasis};
pub use mutation::LedgerMutation;
pub use scoring::{score, MultiplierMode, ScoringError};
