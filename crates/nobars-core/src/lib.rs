//! NoBars Core Library
//!
//! Toggles the macOS menu bar and Dock between always-visible and auto-hidden
//! by flipping `_HIHideMenuBar` (global domain) and `autohide`
//! (`com.apple.dock`) together, then broadcasting the notifications that make
//! the shell apply them live.
//!
//! # Example
//!
//! ```no_run
//! # #[cfg(target_os = "macos")]
//! # fn main() -> nobars_core::CoreResult<()> {
//! use nobars_core::{BarVisibilityController, CfPreferenceStore, DistributedNotificationCenter};
//!
//! let mut controller =
//!     BarVisibilityController::new(CfPreferenceStore::new(), DistributedNotificationCenter::new());
//!
//! let state = controller.toggle()?;
//! println!("Now {}", state);
//! # Ok(())
//! # }
//! # #[cfg(not(target_os = "macos"))]
//! # fn main() {}
//! ```

mod automation;
mod click;
mod controller;
mod error;
mod notifications;
mod preferences;
mod state;

pub use {
    automation::{CLEAN_UP_DESKTOP_SCRIPT, DesktopCleanup},
    click::{ButtonPhase, ClickAction, ClickButton, ClickEvent, ClickOutcome},
    controller::BarVisibilityController,
    error::{Result as CoreResult, ToggleError},
    notifications::{NotificationBus, SystemNotification},
    preferences::{
        DOCK_AUTOHIDE, MENU_BAR_HIDING, MemoryPreferenceStore, PreferenceDomain, PreferenceKey,
        PreferenceStore,
    },
    state::VisibilityState,
};

#[cfg(target_os = "macos")]
pub use {notifications::DistributedNotificationCenter, preferences::CfPreferenceStore};

#[cfg(test)]
mod tests;
