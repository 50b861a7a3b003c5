//! Pre-hide visibility snapshot.

use std::collections::HashMap;

use tracing::debug;

use crate::{WindowHost, WindowId};

/// Recorded visibility of every content window, captured at hide time.
///
/// A snapshot is created fresh on each hide and overwritten by the next
/// one; it is read and cleared when the windows are shown again. Entries
/// are only meaningful while the application is minimized to the tray.
#[derive(Debug, Default)]
pub struct VisibilitySnapshot {
    entries: HashMap<WindowId, bool>,
}

impl VisibilitySnapshot {
    /// Record the current visibility of every live content window.
    pub fn capture(host: &dyn WindowHost) -> Self {
        let mut entries = HashMap::new();

        for id in host.top_level_windows() {
            if host.is_alive(id) && host.has_content(id) {
                entries.insert(id, host.is_visible(id));
            }
        }

        debug!(windows = entries.len(), "captured visibility snapshot");

        Self { entries }
    }

    /// Recorded pre-hide visibility for `id`, if it was captured.
    pub fn recorded(&self, id: WindowId) -> Option<bool> {
        self.entries.get(&id).copied()
    }

    /// Number of captured windows.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the snapshot holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Re-apply the recorded state to windows whose live visibility drifted
    /// while the application was minimized.
    ///
    /// Windows the host created after the capture are not in the snapshot
    /// and are left alone; destroyed windows are skipped. Returns the
    /// number of corrected windows.
    pub fn reconcile(&self, host: &mut dyn WindowHost) -> usize {
        let mut corrected = 0;

        for (&id, &was_visible) in &self.entries {
            if !host.is_alive(id) {
                debug!(%id, "skipping destroyed window during reconcile");
                continue;
            }

            if host.is_visible(id) != was_visible {
                if was_visible {
                    host.show(id);
                } else {
                    host.hide(id);
                }
                corrected += 1;
            }
        }

        corrected
    }

    /// Drop all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
