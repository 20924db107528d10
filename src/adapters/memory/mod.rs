//! In-memory storage adapters.
//!
//! Back every storage port with `tokio::sync::RwLock`-guarded maps. Used by
//! the test suites and by embedders that keep goals in process.

mod category_catalog;
mod goal_repository;
mod goal_template_store;
mod ledger_store;
mod score_store;

pub use category_catalog::InMemoryCategoryCatalog;
pub use goal_repository::InMemoryGoalRepository;
pub use goal_template_store::InMemoryGoalTemplateStore;
pub use ledger_store::InMemoryLedgerStore;
pub use score_store::InMemoryUserScoreStore;
