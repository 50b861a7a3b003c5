use std::{panic::Location, result::Result as StdResult};

use error_location::ErrorLocation;
use thiserror::Error;
use tray_dock_core::HotkeyError;

/// Application-level errors for the tray-dock binary.
///
/// All variants include `ErrorLocation` for call-site tracking. None of
/// these are allowed to crash the process once the event loop is running;
/// only tray-icon creation failure aborts startup.
#[derive(Error, Debug)]
pub enum AppError {
    /// Hotkey spec rejected by the grammar in tray-dock-core.
    #[error("Hotkey parse error: {source} {location}")]
    Hotkey {
        /// The underlying parse error.
        #[source]
        source: HotkeyError,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// Failed to register the global hotkey with the OS.
    #[error("Hotkey registration failed: {reason} {location}")]
    HotkeyRegistrationFailed {
        /// Human-readable reason for failure.
        reason: String,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// Failed to create or update the tray icon or its menu.
    #[error("Tray icon error: {reason} {location}")]
    TrayError {
        /// Human-readable reason for failure.
        reason: String,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// Failed to create a top-level window.
    #[error("Window error: {reason} {location}")]
    WindowError {
        /// Human-readable reason for failure.
        reason: String,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// Configuration loading or saving error.
    #[error("Configuration error: {reason} {location}")]
    ConfigError {
        /// Human-readable reason for failure.
        reason: String,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// IO error from filesystem operations.
    #[error("IO error: {source} {location}")]
    IoError {
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
        /// Location where this error was created.
        location: ErrorLocation,
    },
}

// Manual From<HotkeyError> with location tracking.
// Cannot use #[from] because it does not support extra fields.
impl From<HotkeyError> for AppError {
    #[track_caller]
    fn from(source: HotkeyError) -> Self {
        AppError::Hotkey {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<std::io::Error> for AppError {
    #[track_caller]
    fn from(source: std::io::Error) -> Self {
        AppError::IoError {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convenience type alias for Results using `AppError`.
pub type Result<T> = StdResult<T, AppError>;
