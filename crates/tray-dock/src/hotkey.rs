//! Global hotkey registration and paired teardown.
//!
//! Registration must happen on a thread with a message pump (the main
//! thread running the `tao` event loop) so that `WM_HOTKEY` messages are
//! dispatched on Windows. The manager stays alive inside
//! [`RegisteredHotkey`] for as long as the binding should exist.

use crate::{AppError, AppResult};

use std::panic::Location;

use error_location::ErrorLocation;
use global_hotkey::{GlobalHotKeyManager, hotkey::HotKey};
use tracing::{debug, info, warn};
use tray_dock_core::hotkey_from_spec;

/// A registered global hotkey paired with the manager that owns it.
///
/// Every successful registration is matched by exactly one unregister call
/// during shutdown; callers hold this in an `Option` and `take()` it so
/// teardown tolerates the registration having never succeeded.
pub struct RegisteredHotkey {
    manager: GlobalHotKeyManager,
    hotkey: HotKey,
}

impl RegisteredHotkey {
    /// Parse `spec` and register it with the OS.
    ///
    /// Parsing happens first, so a bad spec never touches the platform
    /// hotkey APIs.
    #[track_caller]
    pub fn register(spec: &str) -> AppResult<Self> {
        let hotkey = hotkey_from_spec(spec)?;

        let manager = GlobalHotKeyManager::new().map_err(|e| {
            AppError::HotkeyRegistrationFailed {
                reason: format!("Failed to create manager: {}", e),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        manager
            .register(hotkey)
            .map_err(|e| AppError::HotkeyRegistrationFailed {
                reason: format!("Failed to register {:?}: {}", spec, e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!(hotkey = spec, id = hotkey.id(), "Global hotkey registered");

        Ok(Self { manager, hotkey })
    }

    /// The id carried by matching `GlobalHotKeyEvent`s.
    pub fn id(&self) -> u32 {
        self.hotkey.id()
    }

    /// Release the OS binding.
    pub fn unregister(self) {
        if let Err(e) = self.manager.unregister(self.hotkey) {
            warn!(error = ?e, "Failed to unregister global hotkey");
        } else {
            debug!(id = self.hotkey.id(), "Global hotkey unregistered");
        }
    }
}

/// Register the configured hotkey, degrading to tray-only control when it
/// cannot be bound.
///
/// An empty spec disables the hotkey entirely. Parse failures and OS
/// registration conflicts are logged; the application keeps running with
/// tray-click and close-interception alone.
pub fn maybe_register(spec: &str) -> Option<RegisteredHotkey> {
    if spec.trim().is_empty() {
        debug!("Global hotkey disabled by configuration");
        return None;
    }

    match RegisteredHotkey::register(spec) {
        Ok(registered) => Some(registered),
        Err(e) => {
            warn!(error = %e, "Global hotkey unavailable, continuing with tray-only control");
            None
        }
    }
}
