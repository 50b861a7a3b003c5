//! Live window set plus focus and minimize bookkeeping.
//!
//! Owns the application's top-level tao windows and adapts them to the
//! core [`WindowHost`] trait. A window's core id stays allocated for the
//! registry's lifetime; once the entry is removed every host query on that
//! id reports dead and every mutation is a silent no-op.

use std::collections::HashMap;

use tao::window::Window;
use tracing::debug;
use tray_dock_core::{WindowHost, WindowId};

struct Entry {
    window: Window,
    content: bool,
    minimized: bool,
}

/// Registry mapping core window ids onto live tao windows.
pub struct WindowRegistry {
    entries: HashMap<WindowId, Entry>,
    by_tao_id: HashMap<tao::window::WindowId, WindowId>,
    focused: Option<WindowId>,
    next_id: u64,
}

impl Default for WindowRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowRegistry {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            by_tao_id: HashMap::new(),
            focused: None,
            next_id: 1,
        }
    }

    /// Register a window and return its core id.
    ///
    /// `content` marks real application windows; helper shells register
    /// with `false` and stay invisible to the controller's enumeration.
    pub fn insert(&mut self, window: Window, content: bool) -> WindowId {
        let id = WindowId::new(self.next_id);
        self.next_id += 1;

        self.by_tao_id.insert(window.id(), id);
        let minimized = window.is_minimized();
        self.entries.insert(
            id,
            Entry {
                window,
                content,
                minimized,
            },
        );

        debug!(%id, content, "window registered");
        id
    }

    /// Translate a tao window id into the core id, if still tracked.
    pub fn resolve(&self, tao_id: tao::window::WindowId) -> Option<WindowId> {
        self.by_tao_id.get(&tao_id).copied()
    }

    /// Drop a window the platform destroyed (or that we are closing).
    pub fn remove(&mut self, id: WindowId) {
        if let Some(entry) = self.entries.remove(&id) {
            self.by_tao_id.remove(&entry.window.id());
            if self.focused == Some(id) {
                self.focused = None;
            }
            debug!(%id, "window removed from registry");
        }
    }

    /// Fold a per-window focus event into the application-wide focus
    /// transition `(old, now)` the controller expects.
    ///
    /// tao reports focus per window; the host-wide view is "some window
    /// focused" vs "none". Losing focus on a window we did not consider
    /// focused changes nothing.
    pub fn focus_event(
        &mut self,
        id: WindowId,
        gained: bool,
    ) -> (Option<WindowId>, Option<WindowId>) {
        let old = self.focused;
        if gained {
            self.focused = Some(id);
        } else if self.focused == Some(id) {
            self.focused = None;
        }
        (old, self.focused)
    }

    /// Poll the window's minimized state and report a false-to-true edge.
    ///
    /// tao has no dedicated minimize event, so state changes are detected
    /// by polling on the window events that accompany them.
    pub fn minimize_edge(&mut self, id: WindowId) -> bool {
        let Some(entry) = self.entries.get_mut(&id) else {
            return false;
        };
        let now = entry.window.is_minimized();
        let was = entry.minimized;
        entry.minimized = now;
        now && !was
    }
}

impl WindowHost for WindowRegistry {
    fn top_level_windows(&self) -> Vec<WindowId> {
        self.entries.keys().copied().collect()
    }

    fn is_alive(&self, id: WindowId) -> bool {
        self.entries.contains_key(&id)
    }

    fn is_visible(&self, id: WindowId) -> bool {
        self.entries.get(&id).is_some_and(|e| e.window.is_visible())
    }

    fn is_minimized(&self, id: WindowId) -> bool {
        self.entries
            .get(&id)
            .is_some_and(|e| e.window.is_minimized())
    }

    fn has_content(&self, id: WindowId) -> bool {
        self.entries.get(&id).is_some_and(|e| e.content)
    }

    fn hide(&mut self, id: WindowId) {
        if let Some(entry) = self.entries.get(&id) {
            entry.window.set_visible(false);
        }
    }

    fn show(&mut self, id: WindowId) {
        if let Some(entry) = self.entries.get(&id) {
            entry.window.set_visible(true);
        }
    }

    fn restore(&mut self, id: WindowId) {
        if let Some(entry) = self.entries.get_mut(&id) {
            entry.window.set_minimized(false);
            entry.window.set_visible(true);
            entry.minimized = false;
        }
    }

    fn raise(&mut self, id: WindowId) {
        // tao has no raise-without-activate; set_focus brings the window
        // to the front. The controller focuses the last-focused window
        // afterwards, so that one still ends up with input focus.
        if let Some(entry) = self.entries.get(&id) {
            entry.window.set_focus();
        }
    }

    fn focus(&mut self, id: WindowId) {
        if let Some(entry) = self.entries.get(&id) {
            entry.window.set_focus();
        }
    }
}
