//! Event-driven glue between the tao loop and the core controller.

use crate::{AppError, AppEvent, AppResult, RegisteredHotkey, TrayManager, WindowRegistry, config::Config, hotkey};

use std::panic::Location;

use error_location::ErrorLocation;
use global_hotkey::{GlobalHotKeyEvent, HotKeyState};
use tao::{
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ControlFlow, EventLoopProxy, EventLoopWindowTarget},
    window::WindowBuilder,
};
use tracing::{debug, info, warn};
use tray_icon::{MouseButton, MouseButtonState, TrayIconEvent, menu::MenuEvent};
use tray_dock_core::{ActivationReason, TrayController, WindowId};

/// What an intercepted close request should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseDisposition {
    /// Exit action: run the genuine shutdown sequence.
    Shutdown,
    /// Native close control: hide to tray, the close is not performed.
    HideToTray,
}

impl CloseDisposition {
    /// Closes hide to tray unless the exit action armed the real path
    /// immediately beforehand.
    pub fn from_flag(close_from_exit: bool) -> Self {
        if close_from_exit {
            Self::Shutdown
        } else {
            Self::HideToTray
        }
    }
}

/// Main application state, owned by the event-loop closure.
///
/// Everything runs on the main thread; external event sources are bridged
/// in as [`AppEvent`] user events.
pub struct App {
    controller: TrayController,
    registry: WindowRegistry,
    tray: TrayManager,
    hotkey: Option<RegisteredHotkey>,
    main_window: WindowId,
    close_from_exit: bool,
    proxy: EventLoopProxy<AppEvent>,
}

impl App {
    /// One-time setup: tray icon, main window, controller, hotkey.
    ///
    /// Tray creation failure is the only fatal error here; a failed hotkey
    /// registration just degrades to tray-only control.
    #[track_caller]
    pub fn new(
        window_target: &EventLoopWindowTarget<AppEvent>,
        proxy: EventLoopProxy<AppEvent>,
        config: Config,
    ) -> AppResult<Self> {
        let tray = TrayManager::new()?;

        let mut registry = WindowRegistry::new();
        let window = WindowBuilder::new()
            .with_title("Tray Dock")
            .with_inner_size(LogicalSize::new(640.0, 420.0))
            .build(window_target)
            .map_err(|e| AppError::WindowError {
                reason: format!("Failed to create main window: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;
        let main_window = registry.insert(window, true);

        let mut controller = TrayController::new(config.tray.activation_policy());
        // The main window is the refocus target until a focus event says
        // otherwise.
        controller.on_focus_changed(None, Some(main_window));

        let hotkey = hotkey::maybe_register(&config.hotkey.global_hotkey);

        info!(
            debug = config.behavior.debug,
            hide_on_startup = config.behavior.hide_on_startup,
            hotkey = %config.hotkey.global_hotkey,
            "Tray Dock initialized"
        );

        let mut app = Self {
            controller,
            registry,
            tray,
            hotkey,
            main_window,
            close_from_exit: false,
            proxy,
        };

        if config.behavior.hide_on_startup {
            info!("Hiding all windows on startup");
            app.hide_all();
        }

        Ok(app)
    }

    /// Dispatch a window event from the tao loop.
    pub fn handle_window_event(
        &mut self,
        tao_id: tao::window::WindowId,
        event: &WindowEvent<'_>,
        control_flow: &mut ControlFlow,
    ) {
        let Some(id) = self.registry.resolve(tao_id) else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                if id == self.main_window {
                    self.close_main(control_flow);
                } else {
                    debug!(%id, "closing secondary window");
                    self.registry.remove(id);
                }
            }
            WindowEvent::Focused(gained) => {
                let (old, now) = self.registry.focus_event(id, *gained);
                self.controller.on_focus_changed(old, now);
            }
            WindowEvent::Resized(_) => {
                // tao reports no dedicated minimize event; the resize that
                // accompanies minimization is where the edge is observable.
                if self.registry.minimize_edge(id) && id == self.main_window {
                    debug!("main window minimized, deferring hide to next loop turn");
                    let _ = self.proxy.send_event(AppEvent::DeferredHide);
                }
            }
            WindowEvent::Destroyed => {
                self.registry.remove(id);
            }
            _ => {}
        }
    }

    /// Dispatch a bridged user event.
    pub fn handle_app_event(&mut self, event: AppEvent, control_flow: &mut ControlFlow) {
        match event {
            AppEvent::Tray(tray_event) => {
                let reason = activation_reason(&tray_event);
                self.controller.on_activated(&mut self.registry, reason);
                self.refresh_tooltip();
            }
            AppEvent::Menu(menu_event) => self.handle_menu_event(&menu_event, control_flow),
            AppEvent::Hotkey(hotkey_event) => self.handle_hotkey_event(&hotkey_event),
            AppEvent::DeferredHide => {
                self.hide_all();
            }
        }
    }

    /// Final teardown when the loop is going away.
    ///
    /// The hotkey may already have been unregistered by the exit action;
    /// `take()` keeps the pairing at exactly one unregister either way.
    pub fn on_loop_destroyed(&mut self) {
        if let Some(registered) = self.hotkey.take() {
            registered.unregister();
        }
        info!("Tray Dock shut down");
    }

    fn handle_menu_event(&mut self, event: &MenuEvent, control_flow: &mut ControlFlow) {
        if event.id == *self.tray.show_all_item_id() {
            debug!("show-all menu item selected");
            self.show_all();
        } else if event.id == *self.tray.exit_item_id() {
            info!("Exit requested from tray menu");
            // Arm the real close path right before invoking it; the
            // intercepted handler consults this flag.
            self.close_from_exit = true;
            self.close_main(control_flow);
        }
    }

    fn handle_hotkey_event(&mut self, event: &GlobalHotKeyEvent) {
        let Some(registered) = &self.hotkey else {
            return;
        };

        if event.id != registered.id() {
            debug!(id = event.id, "ignoring hotkey event for a foreign binding");
            return;
        }

        if event.state == HotKeyState::Pressed {
            debug!("global hotkey pressed, toggling visibility");
            self.controller.toggle(&mut self.registry);
            self.refresh_tooltip();
        }
    }

    /// The intercepted close path for the main window.
    fn close_main(&mut self, control_flow: &mut ControlFlow) {
        match CloseDisposition::from_flag(self.close_from_exit) {
            CloseDisposition::Shutdown => self.shutdown(control_flow),
            CloseDisposition::HideToTray => {
                debug!("close request intercepted, hiding to tray");
                self.hide_all();
            }
        }
    }

    /// Genuine application shutdown, bypassing the tray interception.
    fn shutdown(&mut self, control_flow: &mut ControlFlow) {
        info!("Shutting down");
        if let Some(registered) = self.hotkey.take() {
            registered.unregister();
        }
        *control_flow = ControlFlow::Exit;
    }

    fn hide_all(&mut self) {
        self.controller.hide_all(&mut self.registry);
        self.refresh_tooltip();
    }

    fn show_all(&mut self) {
        self.controller.show_all(&mut self.registry);
        self.refresh_tooltip();
    }

    fn refresh_tooltip(&mut self) {
        let minimized = self.controller.is_minimized_to_tray();
        if let Err(e) = self.tray.update_tooltip(minimized) {
            warn!(error = %e, "Failed to refresh tray tooltip");
        }
    }
}

/// Map a raw tray event onto the controller's activation reasons.
///
/// Only a completed left click is the primary trigger; right clicks open
/// the context menu and everything else is noise.
fn activation_reason(event: &TrayIconEvent) -> ActivationReason {
    match event {
        TrayIconEvent::Click {
            button: MouseButton::Left,
            button_state: MouseButtonState::Up,
            ..
        } => ActivationReason::Primary,
        TrayIconEvent::Click {
            button: MouseButton::Right,
            ..
        } => ActivationReason::Context,
        _ => ActivationReason::Other,
    }
}
