//! Clock port - the single source of "now".

use crate::domain::foundation::Timestamp;

/// Supplies the current instant.
///
/// Window boundaries and failure transitions depend on "now", so every
/// read of it goes through this port.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}
