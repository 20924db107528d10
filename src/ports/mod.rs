//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Inbound data
//!
//! - `CategoryCatalog` - multipliers and activity flags
//! - `LedgerReader` - the owner's disposal records
//! - `GoalTemplateReader` - curated goal templates
//!
//! ## Derived state
//!
//! - `UserScoreStore` - running total per user
//! - `GoalRepository` - goals and their cached progress/status
//!
//! ## Infrastructure
//!
//! - `EventPublisher` - domain event delivery
//! - `Clock` - current time

mod category_catalog;
mod clock;
mod event_publisher;
mod goal_repository;
mod goal_template_reader;
mod ledger_reader;
mod score_store;

pub use category_catalog::CategoryCatalog;
pub use clock::Clock;
pub use event_publisher::EventPublisher;
pub use goal_repository::GoalRepository;
pub use goal_template_reader::GoalTemplateReader;
pub use ledger_reader::LedgerReader;
pub use score_store::UserScoreStore;
