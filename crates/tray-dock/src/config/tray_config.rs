use serde::{Deserialize, Serialize};
use tray_dock_core::ActivationPolicy;

/// Tray icon behavior configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrayConfig {
    /// Override for the platform hide-suppression policy.
    ///
    /// When unset, tray clicks never hide on Windows (focus information is
    /// stale there at the moment the click arrives) and may hide
    /// elsewhere. Set explicitly to force either behavior.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suppress_click_hide: Option<bool>,
}

impl TrayConfig {
    /// Resolve the configured override against the platform default.
    pub fn activation_policy(&self) -> ActivationPolicy {
        match self.suppress_click_hide {
            Some(true) => ActivationPolicy::hide_suppressed(),
            Some(false) => ActivationPolicy::hide_allowed(),
            None => ActivationPolicy::for_current_platform(),
        }
    }
}
