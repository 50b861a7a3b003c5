use global_hotkey::GlobalHotKeyEvent;
use tray_icon::{TrayIconEvent, menu::MenuEvent};

/// Events injected into the tao event loop from outside it.
///
/// tray-icon and global-hotkey deliver their events on internal channels;
/// their `set_event_handler` hooks forward everything here through the
/// loop proxy so all handling happens on the main thread.
#[derive(Debug)]
pub enum AppEvent {
    /// Tray icon interaction (clicks, hover, wheel).
    Tray(TrayIconEvent),
    /// Context-menu item chosen.
    Menu(MenuEvent),
    /// Global hotkey press or release.
    Hotkey(GlobalHotKeyEvent),
    /// Hide deferred from minimize detection to a later loop turn.
    ///
    /// Hiding inline from the window-state handler would mutate window
    /// state while the platform is still mid-mutation of the same window.
    DeferredHide,
}
