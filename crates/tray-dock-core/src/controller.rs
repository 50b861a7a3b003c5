//! Window-visibility state machine behind the tray icon.

use tracing::{debug, info, instrument};

use crate::{ActivationPolicy, VisibilitySnapshot, WindowHost, WindowId};

/// Why the tray icon fired an activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationReason {
    /// Primary interaction (left click on the icon).
    Primary,
    /// Context-menu request; the menu handles it on its own.
    Context,
    /// Anything else (hover, wheel, double click).
    Other,
}

/// Reactive state holder deciding, on every external stimulus, whether the
/// application's top-level windows should be shown or hidden.
///
/// The controller owns no windows. It talks to the host's window set
/// through [`WindowHost`], remembers which windows were visible before the
/// last hide so restoration is faithful, and tracks the last focused
/// window so it can be re-activated on restore.
///
/// `is_minimized_to_tray` is true exactly when the most recent hide/show
/// transition ended hidden; it is only ever toggled by [`hide_all`] and
/// [`show_all`].
///
/// [`hide_all`]: TrayController::hide_all
/// [`show_all`]: TrayController::show_all
#[derive(Debug)]
pub struct TrayController {
    policy: ActivationPolicy,
    is_app_focused: bool,
    is_minimized_to_tray: bool,
    last_focused: Option<WindowId>,
    explicitly_hidden: Vec<WindowId>,
    snapshot: VisibilitySnapshot,
}

impl TrayController {
    /// Create a controller with the given activation policy.
    ///
    /// The application is assumed focused at startup; the first focus
    /// event corrects this if it is not.
    pub fn new(policy: ActivationPolicy) -> Self {
        Self {
            policy,
            is_app_focused: true,
            is_minimized_to_tray: false,
            last_focused: None,
            explicitly_hidden: Vec::new(),
            snapshot: VisibilitySnapshot::default(),
        }
    }

    /// Whether the application is currently minimized to the tray.
    pub fn is_minimized_to_tray(&self) -> bool {
        self.is_minimized_to_tray
    }

    /// The window that will be re-activated by the next [`show_all`].
    ///
    /// [`show_all`]: TrayController::show_all
    pub fn last_focused(&self) -> Option<WindowId> {
        self.last_focused
    }

    /// Hide every visible content window and remember what was visible.
    ///
    /// No-op when already minimized to the tray. Windows destroyed between
    /// enumeration and hide are skipped silently.
    #[instrument(skip(self, host))]
    pub fn hide_all(&mut self, host: &mut dyn WindowHost) {
        if self.is_minimized_to_tray {
            debug!("already minimized to tray, nothing to hide");
            return;
        }

        self.snapshot = VisibilitySnapshot::capture(host);
        self.explicitly_hidden = visible_windows(host);

        info!(count = self.explicitly_hidden.len(), "hiding all windows");

        for &id in &self.explicitly_hidden {
            if !host.is_alive(id) {
                debug!(%id, "window destroyed before hide, skipping");
                continue;
            }
            host.hide(id);
        }

        self.is_minimized_to_tray = true;
    }

    /// Restore the application's windows.
    ///
    /// When minimized to the tray, restores the explicitly hidden set,
    /// reconciles against the pre-hide snapshot (windows the host opened
    /// or closed in the meantime get corrected), and clears the snapshot.
    /// Otherwise raises the currently visible set, which covers the
    /// show-after-losing-focus case. Either way the last focused window,
    /// if still alive, ends up raised with input focus.
    #[instrument(skip(self, host))]
    pub fn show_all(&mut self, host: &mut dyn WindowHost) {
        if self.is_minimized_to_tray {
            debug!(
                count = self.explicitly_hidden.len(),
                "restoring explicitly hidden windows"
            );
            let hidden = std::mem::take(&mut self.explicitly_hidden);
            restore_windows(host, &hidden);

            let corrected = self.snapshot.reconcile(host);
            if corrected > 0 {
                debug!(corrected, "reconciled windows changed by the host while minimized");
            }
            self.snapshot.clear();
        } else {
            let visible = visible_windows(host);
            debug!(count = visible.len(), "raising currently visible windows");
            restore_windows(host, &visible);
        }

        match self.last_focused {
            Some(id) if host.is_alive(id) => {
                debug!(%id, "activating last focused window");
                host.focus(id);
            }
            Some(id) => {
                debug!(%id, "last focused window no longer exists");
                self.last_focused = None;
            }
            None => {}
        }

        self.is_minimized_to_tray = false;
    }

    /// Global-hotkey toggle: restore when minimized to the tray, hide
    /// otherwise.
    pub fn toggle(&mut self, host: &mut dyn WindowHost) {
        if self.is_minimized_to_tray {
            self.show_all(host);
        } else {
            self.hide_all(host);
        }
    }

    /// React to a tray icon activation.
    ///
    /// Only the primary trigger is handled. The windows are shown if any
    /// of these hold: the application is not focused, some visible window
    /// is minimized, or the application is minimized to the tray. They
    /// are hidden otherwise, unless the policy suppresses the hide branch
    /// because focus information is stale at click time on this platform.
    #[instrument(skip(self, host))]
    pub fn on_activated(&mut self, host: &mut dyn WindowHost, reason: ActivationReason) {
        if reason != ActivationReason::Primary {
            debug!(?reason, "ignoring non-primary tray activation");
            return;
        }

        let any_minimized = any_visible_window_minimized(host);
        let should_show =
            !self.is_app_focused || any_minimized || self.is_minimized_to_tray;

        debug!(
            is_app_focused = self.is_app_focused,
            any_minimized,
            is_minimized_to_tray = self.is_minimized_to_tray,
            should_show,
            "tray icon activated"
        );

        if should_show {
            self.show_all(host);
        } else if self.policy.suppress_hide_on_ambiguous_focus {
            debug!("hide suppressed: focus state is unreliable at click time on this platform");
        } else {
            self.hide_all(host);
        }
    }

    /// Track which window holds focus so [`show_all`] can re-activate it.
    ///
    /// This is the only place `last_focused` is updated. `now == None`
    /// means the application as a whole lost focus.
    ///
    /// [`show_all`]: TrayController::show_all
    pub fn on_focus_changed(&mut self, old: Option<WindowId>, now: Option<WindowId>) {
        self.is_app_focused = now.is_some();
        debug!(
            ?old,
            ?now,
            is_app_focused = self.is_app_focused,
            "focus changed"
        );
        if let Some(id) = now {
            self.last_focused = Some(id);
        }
    }
}

/// The live content windows that are currently visible.
fn visible_windows(host: &dyn WindowHost) -> Vec<WindowId> {
    host.top_level_windows()
        .into_iter()
        .filter(|&id| host.is_alive(id) && host.has_content(id) && host.is_visible(id))
        .collect()
}

fn any_visible_window_minimized(host: &dyn WindowHost) -> bool {
    visible_windows(host)
        .into_iter()
        .any(|id| host.is_minimized(id))
}

/// Bring each window back on screen, skipping destroyed ones.
///
/// A minimized window is restored with a normal restore call. A hidden
/// window goes through a hide-then-show double toggle: a single show does
/// not reliably put the window above pre-existing foreground windows on
/// every platform, and the toggle also raises it without stealing the
/// restore-last-focus step that follows.
fn restore_windows(host: &mut dyn WindowHost, windows: &[WindowId]) {
    for &id in windows {
        if !host.is_alive(id) {
            debug!(%id, "window destroyed before restore, skipping");
            continue;
        }

        if host.is_minimized(id) {
            host.restore(id);
        } else {
            host.hide(id);
            host.show(id);
        }
        host.raise(id);
    }
}
