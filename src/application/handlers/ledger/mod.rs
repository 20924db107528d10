//! Ledger handlers.
//!
//! - Applying create / update / delete of ledger entries to derived state

mod ledger_mutation;

pub use ledger_mutation::{LedgerMutationHandler, LedgerMutationOutcome};
