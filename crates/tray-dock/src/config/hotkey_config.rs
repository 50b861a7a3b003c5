use crate::config::default_global_hotkey;

use serde::{Deserialize, Serialize};

/// Global hotkey configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotkeyConfig {
    /// Hotkey spec in `[modifier+]*key` form, e.g. `Alt+N`.
    ///
    /// An empty string disables hotkey registration entirely.
    #[serde(default = "default_global_hotkey")]
    pub global_hotkey: String,
}

impl Default for HotkeyConfig {
    fn default() -> Self {
        Self {
            global_hotkey: default_global_hotkey(),
        }
    }
}
