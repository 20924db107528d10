//! Waste Goals - goal progress tracking and score aggregation.
//!
//! This crate is the scoring core of a gamified waste-logging application.
//! The surrounding web layer records disposal events in its own ledger and
//! calls into [`application::LedgerMutationHandler`] after every mutation;
//! the core keeps each user's running score and every affected goal's
//! progress and status consistent with the ledger.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
