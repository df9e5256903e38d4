use crate::ShellCommand;

use nobars_core::{CoreResult, NotificationBus, SystemNotification, ToggleError};

use std::panic::Location;

use error_location::ErrorLocation;
use tao::event_loop::EventLoopProxy;
use tracing::debug;

/// Defers notification posts to a later turn of the event loop.
///
/// The click that triggered a toggle is still being handled when the
/// controller posts; queueing keeps the shell's reaction out of that handler.
pub struct DeferredNotificationBus {
    proxy: EventLoopProxy<ShellCommand>,
}

impl DeferredNotificationBus {
    /// Queue posts onto the loop behind `proxy`.
    pub fn new(proxy: EventLoopProxy<ShellCommand>) -> Self {
        Self { proxy }
    }
}

impl NotificationBus for DeferredNotificationBus {
    #[track_caller]
    fn post(&self, notification: SystemNotification) -> CoreResult<()> {
        self.proxy
            .send_event(ShellCommand::PostNotification(notification))
            .map_err(|e| ToggleError::NotificationPost {
                name: notification.name(),
                reason: format!("Event loop closed: {:?}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        debug!(name = notification.name(), "Notification queued");
        Ok(())
    }
}
