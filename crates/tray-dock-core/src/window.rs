//! Non-owning window handles and the host-side window services.

use std::fmt;

/// Opaque identifier for a top-level window owned by the host.
///
/// A `WindowId` is a relation, never ownership: the host controls the
/// window's lifetime and may destroy it at any time, so every use must go
/// through a liveness check on the [`WindowHost`] that issued the id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(u64);

impl WindowId {
    /// Wrap a raw host-allocated id.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw id value, for host-side bookkeeping.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "window#{}", self.0)
    }
}

/// Window services the controller calls into.
///
/// Implementations wrap the application's live window set. The controller
/// never creates or destroys windows; it only queries state and toggles
/// visibility. Query methods on a destroyed id must report dead/false, and
/// mutating methods on a destroyed id must be silent no-ops, so that a stale
/// handle can never surface an error.
pub trait WindowHost {
    /// All current top-level windows, including hidden ones.
    fn top_level_windows(&self) -> Vec<WindowId>;

    /// Whether the window still exists.
    fn is_alive(&self, id: WindowId) -> bool;

    /// Whether the window is currently visible (not hidden).
    ///
    /// A minimized window still counts as visible; hidden means removed
    /// from the screen and taskbar entirely.
    fn is_visible(&self, id: WindowId) -> bool;

    /// Whether the window is currently minimized.
    fn is_minimized(&self, id: WindowId) -> bool;

    /// Whether the window carries real content.
    ///
    /// Hosts surface internal artifacts (menus, tooltip shells) as
    /// top-level windows; those report `false` here and are excluded from
    /// every enumeration the controller performs.
    fn has_content(&self, id: WindowId) -> bool;

    /// Remove the window from the screen.
    fn hide(&mut self, id: WindowId);

    /// Make the window visible again.
    fn show(&mut self, id: WindowId);

    /// Restore a minimized window to its normal state and show it.
    fn restore(&mut self, id: WindowId);

    /// Bring the window above other windows.
    fn raise(&mut self, id: WindowId);

    /// Raise the window and give it input focus.
    fn focus(&mut self, id: WindowId);
}
