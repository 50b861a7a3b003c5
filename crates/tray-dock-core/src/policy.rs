//! Platform-dependent tray activation policy.

/// Decisions that vary per platform when the tray icon is clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivationPolicy {
    /// Never hide on a primary tray click.
    ///
    /// On Windows the main window reports focus loss before the click
    /// event reaches the controller, so the "application is focused, hide
    /// it" branch would fire on stale data and hide windows the user just
    /// tried to reach. Platforms with that event ordering opt out of the
    /// hide branch entirely; showing still works.
    pub suppress_hide_on_ambiguous_focus: bool,
}

impl ActivationPolicy {
    /// Policy for the platform this binary was compiled for.
    pub fn for_current_platform() -> Self {
        Self {
            suppress_hide_on_ambiguous_focus: cfg!(target_os = "windows"),
        }
    }

    /// Policy that allows the hide branch unconditionally.
    pub fn hide_allowed() -> Self {
        Self {
            suppress_hide_on_ambiguous_focus: false,
        }
    }

    /// Policy that suppresses the hide branch unconditionally.
    pub fn hide_suppressed() -> Self {
        Self {
            suppress_hide_on_ambiguous_focus: true,
        }
    }
}

impl Default for ActivationPolicy {
    fn default() -> Self {
        Self::for_current_platform()
    }
}
