mod behaviour_config;
#[allow(clippy::module_inception)]
mod config;
mod hotkey_config;
mod tray_config;

pub(crate) use {
    behaviour_config::BehaviourConfig, config::Config, hotkey_config::HotkeyConfig,
    tray_config::TrayConfig,
};

pub(crate) const DEFAULT_DEBUG: bool = false;
pub(crate) const DEFAULT_HIDE_ON_STARTUP: bool = false;
pub(crate) const DEFAULT_GLOBAL_HOTKEY: &str = "Alt+N";

pub(crate) fn default_debug() -> bool {
    DEFAULT_DEBUG
}

pub(crate) fn default_hide_on_startup() -> bool {
    DEFAULT_HIDE_ON_STARTUP
}

pub(crate) fn default_global_hotkey() -> String {
    DEFAULT_GLOBAL_HOTKEY.to_string()
}
