use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

/// Hotkey grammar errors with source location tracking.
///
/// These never abort anything: callers log the failure and continue
/// without a registered hotkey.
#[derive(Error, Debug)]
pub enum HotkeyError {
    /// The hotkey string contained no tokens at all.
    #[error("Empty hotkey spec {location}")]
    EmptySpec {
        /// Source location where the error occurred.
        location: ErrorLocation,
    },

    /// A token before the final `+` is not a known modifier name.
    #[error("Unknown modifier {token:?} {location}")]
    UnknownModifier {
        /// The offending token.
        token: String,
        /// Source location where the error occurred.
        location: ErrorLocation,
    },

    /// The final token is not a known key name.
    #[error("Unknown key {token:?} {location}")]
    UnknownKey {
        /// The offending token.
        token: String,
        /// Source location where the error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`HotkeyError`].
pub type Result<T> = StdResult<T, HotkeyError>;
