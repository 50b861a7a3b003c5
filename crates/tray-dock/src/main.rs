//! Tray Dock: minimize a desktop application to the system tray.
//!
//! Intercepts window close and minimize, hides all top-level windows to a
//! tray icon, and restores them faithfully on tray click or global hotkey.

mod app;
mod app_event;
mod config;
mod error;
mod hotkey;
mod tray_manager;
mod window_registry;

pub(crate) use {
    app::{App, CloseDisposition},
    app_event::AppEvent,
    error::{AppError, Result as AppResult},
    hotkey::RegisteredHotkey,
    tray_manager::TrayManager,
    window_registry::WindowRegistry,
};

use crate::config::Config;

use global_hotkey::GlobalHotKeyEvent;
use tao::{
    event::{Event, StartCause},
    event_loop::{ControlFlow, EventLoopBuilder},
};
use tracing::error;
use tray_icon::{TrayIconEvent, menu::MenuEvent};

/// Application entry point.
fn main() {
    let config = Config::load().unwrap_or_else(|e| {
        // The subscriber is not up yet, so stderr is the only channel.
        eprintln!("tray-dock: failed to load config, using defaults: {e}");
        Config::default()
    });

    let default_filter = if config.behavior.debug {
        "tray_dock=debug"
    } else {
        "tray_dock=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    let event_loop = EventLoopBuilder::<AppEvent>::with_user_event().build();
    let proxy = event_loop.create_proxy();

    // tray-icon and global-hotkey deliver events on internal channels.
    // Forward everything into the tao loop so handling stays on the main
    // thread; unrecognized events are dropped by the handlers, never
    // consumed from anyone else.
    TrayIconEvent::set_event_handler(Some({
        let proxy = proxy.clone();
        move |event| {
            let _ = proxy.send_event(AppEvent::Tray(event));
        }
    }));

    MenuEvent::set_event_handler(Some({
        let proxy = proxy.clone();
        move |event| {
            let _ = proxy.send_event(AppEvent::Menu(event));
        }
    }));

    GlobalHotKeyEvent::set_event_handler(Some({
        let proxy = proxy.clone();
        move |event| {
            let _ = proxy.send_event(AppEvent::Hotkey(event));
        }
    }));

    // Created on the first Init event; the guard keeps a second firing
    // from re-initializing.
    let mut app: Option<App> = None;

    event_loop.run(move |event, window_target, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::NewEvents(StartCause::Init) => {
                if app.is_some() {
                    return;
                }
                match App::new(window_target, proxy.clone(), config.clone()) {
                    Ok(initialized) => app = Some(initialized),
                    Err(e) => {
                        error!(error = %e, "Failed to initialize, exiting");
                        *control_flow = ControlFlow::ExitWithCode(1);
                    }
                }
            }
            Event::WindowEvent {
                window_id, event, ..
            } => {
                if let Some(app) = app.as_mut() {
                    app.handle_window_event(window_id, &event, control_flow);
                }
            }
            Event::UserEvent(app_event) => {
                if let Some(app) = app.as_mut() {
                    app.handle_app_event(app_event, control_flow);
                }
            }
            Event::LoopDestroyed => {
                if let Some(app) = app.as_mut() {
                    app.on_loop_destroyed();
                }
            }
            _ => {}
        }
    });
}
