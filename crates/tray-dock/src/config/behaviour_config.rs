use crate::config::{default_debug, default_hide_on_startup};

use serde::{Deserialize, Serialize};

/// Application behavior configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehaviourConfig {
    /// Whether to emit verbose diagnostic logging.
    #[serde(default = "default_debug")]
    pub debug: bool,
    /// Whether to hide all windows right after initialization.
    #[serde(default = "default_hide_on_startup")]
    pub hide_on_startup: bool,
}

impl Default for BehaviourConfig {
    fn default() -> Self {
        Self {
            debug: default_debug(),
            hide_on_startup: default_hide_on_startup(),
        }
    }
}
