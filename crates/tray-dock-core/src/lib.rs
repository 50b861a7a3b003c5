//! Tray-dock Core Library
//!
//! Host-agnostic window-visibility state machine for minimize-to-tray
//! behavior. The [`TrayController`] owns the show/hide decision logic and a
//! visibility snapshot of the application's top-level windows; the host
//! application wires it to a real window set through the [`WindowHost`]
//! trait and feeds it external stimuli (tray clicks, focus changes,
//! minimize detection, hotkey presses).
//!
//! # Example
//!
//! ```
//! use tray_dock_core::{parse_hotkey, CoreResult};
//!
//! use global_hotkey::hotkey::{Code, Modifiers};
//!
//! fn main() -> CoreResult<()> {
//!     let (modifiers, code) = parse_hotkey("Ctrl+Shift+F1")?;
//!
//!     assert_eq!(modifiers, Modifiers::CONTROL | Modifiers::SHIFT);
//!     assert_eq!(code, Code::F1);
//!     Ok(())
//! }
//! ```

mod controller;
mod error;
mod hotkey;
mod policy;
mod snapshot;
mod window;

pub use {
    controller::{ActivationReason, TrayController},
    error::{HotkeyError, Result as CoreResult},
    hotkey::{hotkey_from_spec, parse_hotkey},
    policy::ActivationPolicy,
    snapshot::VisibilitySnapshot,
    window::{WindowHost, WindowId},
};

#[cfg(test)]
mod tests;
