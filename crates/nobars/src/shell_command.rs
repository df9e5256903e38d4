use nobars_core::SystemNotification;
use tray_icon::{TrayIconEvent, menu::MenuEvent};

/// User events delivered to the main thread's event loop.
///
/// Everything that touches the status item or posts to the distributed
/// notification center runs on the main thread, so all of it flows through
/// this enum.
#[derive(Debug, Clone)]
pub enum ShellCommand {
    /// Mouse activity on the status item.
    Tray(TrayIconEvent),
    /// A context menu item was chosen.
    Menu(MenuEvent),
    /// Post a change notification on this loop turn.
    PostNotification(SystemNotification),
    /// Run the Finder clean-up script.
    CleanUpDesktop,
}
