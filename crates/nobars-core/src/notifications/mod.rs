//! System-wide broadcasts that make the menu bar and Dock re-read their
//! preferences.

#[cfg(target_os = "macos")]
mod distributed;

#[cfg(target_os = "macos")]
pub use distributed::DistributedNotificationCenter;

use crate::CoreResult;

/// A payload-less distributed notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SystemNotification {
    /// The global menu-bar hiding flag changed.
    MenuBarHidingChanged,
    /// The Dock preference domain changed.
    DockPreferencesChanged,
}

impl SystemNotification {
    /// Both notifications, in the order they are handed to the bus.
    pub const ALL: [SystemNotification; 2] = [
        SystemNotification::MenuBarHidingChanged,
        SystemNotification::DockPreferencesChanged,
    ];

    /// Distributed notification name observed by the OS shell.
    pub fn name(self) -> &'static str {
        match self {
            SystemNotification::MenuBarHidingChanged => {
                "AppleInterfaceMenuBarHidingChangedNotification"
            }
            SystemNotification::DockPreferencesChanged => "com.apple.dock.prefchanged",
        }
    }
}

/// Fire-and-forget broadcast channel.
pub trait NotificationBus {
    /// Post (or schedule) a notification.
    fn post(&self, notification: SystemNotification) -> CoreResult<()>;
}
