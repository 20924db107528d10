//! Goal tracking configuration

use serde::Deserialize;

use crate::domain::waste::WindowBasis;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct GoalsConfig {
    /// Which entry timestamp places it inside a goal window.
    #[serde(default)]
    pub window_basis: WindowBasis,
}
