//! Status item with a state-dependent template icon.
//!
//! Shows whether the bars are visible or hidden and carries the About/Quit
//! context menu.

use crate::{AppError, AppResult};

use nobars_core::VisibilityState;

use std::panic::Location;

use error_location::ErrorLocation;
use objc2::{MainThreadMarker, rc::Retained};
use tracing::{debug, info, instrument};
use tray_icon::menu::{
    AboutMetadata, ContextMenu, Menu, MenuId, MenuItem, PredefinedMenuItem,
    accelerator::{Accelerator, Code, Modifiers},
};
use tray_icon::{Icon, TrayIcon, TrayIconBuilder};

/// Status bar item manager.
pub struct TrayManager {
    tray_icon: TrayIcon,
    menu: Menu,
    quit_item_id: MenuId,
}

impl TrayManager {
    /// Create the status item showing `state`.
    ///
    /// Must run after the event loop has started (macOS only creates status
    /// items on a running application).
    #[track_caller]
    #[instrument]
    pub fn new(state: VisibilityState) -> AppResult<Self> {
        let menu = Menu::new();

        let about_item = PredefinedMenuItem::about(
            Some("About NoBars"),
            Some(AboutMetadata {
                name: Some("NoBars".to_string()),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
                comments: Some("Hide the menu bar and Dock with one click.".to_string()),
                ..Default::default()
            }),
        );
        let quit_item = MenuItem::new(
            "Quit",
            true,
            Some(Accelerator::new(Some(Modifiers::SUPER), Code::KeyQ)),
        );

        let quit_id = quit_item.id().clone();

        menu.append(&about_item).map_err(|e| AppError::TrayError {
            reason: format!("Failed to add about menu: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        menu.append(&quit_item).map_err(|e| AppError::TrayError {
            reason: format!("Failed to add quit menu: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let icon = Self::load_icon(state)?;

        // Left clicks go to the controller; the menu opens on right click.
        let tray_icon = TrayIconBuilder::new()
            .with_tooltip(Self::tooltip(state))
            .with_menu(Box::new(menu.clone()))
            .with_menu_on_left_click(false)
            .with_icon(icon)
            .with_icon_as_template(true)
            .build()
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to create status item: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!(state = %state, "Status item initialized");

        Ok(Self {
            tray_icon,
            menu,
            quit_item_id: quit_id,
        })
    }

    /// Re-render icon and tooltip for `state`.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn update_state(&mut self, state: VisibilityState) -> AppResult<()> {
        let icon = Self::load_icon(state)?;

        self.tray_icon
            .set_icon(Some(icon))
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to update icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        self.tray_icon
            .set_tooltip(Some(Self::tooltip(state)))
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to update tooltip: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(())
    }

    /// Pop the context menu up under the pointer, anchored to the status
    /// item's button.
    ///
    /// Right clicks never need this: the status item opens its own menu on
    /// those. Control-click arrives as a left click and does.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn show_context_menu(&self) -> AppResult<()> {
        let status_item = self
            .tray_icon
            .ns_status_item()
            .ok_or_else(|| AppError::TrayError {
                reason: "Status item is not available".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let mtm = MainThreadMarker::new().ok_or_else(|| AppError::TrayError {
            reason: "Context menu requested off the main thread".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let button = status_item.button(mtm).ok_or_else(|| AppError::TrayError {
            reason: "Status item has no button".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        // SAFETY: `button` is a live NSStatusBarButton (an NSView) retained
        // for the duration of the call, on the main thread.
        let selected = unsafe {
            self.menu
                .show_context_menu_for_nsview(Retained::as_ptr(&button).cast(), None)
        };

        debug!(selected, "Context menu closed");
        Ok(())
    }

    /// Get the quit menu item ID.
    pub fn quit_item_id(&self) -> &MenuId {
        &self.quit_item_id
    }

    fn tooltip(state: VisibilityState) -> &'static str {
        match state {
            VisibilityState::BarsVisible => "NoBars - Bars visible",
            VisibilityState::BarsHidden => "NoBars - Bars hidden",
        }
    }

    /// Load icon from compile-time embedded PNG bytes.
    #[track_caller]
    fn load_icon(state: VisibilityState) -> AppResult<Icon> {
        let png_bytes: &[u8] = match state {
            VisibilityState::BarsVisible => include_bytes!("../resources/icons/bars.png"),
            VisibilityState::BarsHidden => include_bytes!("../resources/icons/no_bars.png"),
        };

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
}
