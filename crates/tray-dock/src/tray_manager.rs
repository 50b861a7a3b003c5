//! System tray icon with context menu.
//!
//! Manages the tray icon representing the application in the notification
//! area, with a context menu offering "Show all windows" and "Exit".

use crate::{AppError, AppResult};

use std::panic::Location;

use error_location::ErrorLocation;
use tracing::info;
use tray_icon::menu::{Menu, MenuId, MenuItem};
use tray_icon::{Icon, TrayIcon, TrayIconBuilder};

const TOOLTIP_VISIBLE: &str = "Tray Dock";
const TOOLTIP_MINIMIZED: &str = "Tray Dock - minimized to tray";

/// System tray icon manager.
pub struct TrayManager {
    tray_icon: TrayIcon,
    show_all_item_id: MenuId,
    exit_item_id: MenuId,
}

impl TrayManager {
    /// Create the tray icon with its context menu.
    #[track_caller]
    pub fn new() -> AppResult<Self> {
        let menu = Menu::new();

        let show_all_item = MenuItem::new("Show all windows", true, None);
        let exit_item = MenuItem::new("Exit", true, None);

        let show_all_id = show_all_item.id().clone();
        let exit_id = exit_item.id().clone();

        menu.append(&show_all_item).map_err(|e| AppError::TrayError {
            reason: format!("Failed to add show-all menu item: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        menu.append(&exit_item).map_err(|e| AppError::TrayError {
            reason: format!("Failed to add exit menu item: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let icon = Self::load_icon()?;

        let tray_icon = TrayIconBuilder::new()
            .with_tooltip(TOOLTIP_VISIBLE)
            .with_menu(Box::new(menu))
            .with_icon(icon)
            .build()
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to create tray icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!("System tray icon initialized");

        Ok(Self {
            tray_icon,
            show_all_item_id: show_all_id,
            exit_item_id: exit_id,
        })
    }

    /// Reflect the minimized-to-tray state in the tooltip.
    #[track_caller]
    pub fn update_tooltip(&mut self, minimized_to_tray: bool) -> AppResult<()> {
        let tooltip = if minimized_to_tray {
            TOOLTIP_MINIMIZED
        } else {
            TOOLTIP_VISIBLE
        };

        self.tray_icon
            .set_tooltip(Some(tooltip))
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to update tooltip: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Load the icon from compile-time embedded PNG bytes.
    ///
    /// Embedded via include_bytes! so it works regardless of install
    /// location, with no filesystem path involved.
    #[track_caller]
    fn load_icon() -> AppResult<Icon> {
        let png_bytes: &[u8] = include_bytes!("../resources/icons/tray.png");

        let img = image::load_from_memory(png_bytes).map_err(|e| AppError::TrayError {
            reason: format!("Failed to decode embedded icon: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let rgba = img.into_rgba8();
        let (width, height) = (rgba.width(), rgba.height());

        Icon::from_rgba(rgba.into_raw(), width, height).map_err(|e| AppError::TrayError {
            reason: format!("Failed to create icon from RGBA: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Get the "Show all windows" menu item ID.
    pub fn show_all_item_id(&self) -> &MenuId {
        &self.show_all_item_id
    }

    /// Get the exit menu item ID.
    pub fn exit_item_id(&self) -> &MenuId {
        &self.exit_item_id
    }
}
