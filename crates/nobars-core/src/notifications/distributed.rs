use crate::{CoreResult, SystemNotification, ToggleError, notifications::NotificationBus};

use std::{panic::Location, ptr};

use core_foundation::{base::TCFType, string::CFString};
use core_foundation_sys::notification_center::{
    CFNotificationCenterGetDistributedCenter, CFNotificationCenterPostNotification,
};
use error_location::ErrorLocation;
use tracing::{debug, instrument};

/// Posts to the per-user distributed notification center.
///
/// Not `Send`: post from the main thread.
#[derive(Debug, Default)]
pub struct DistributedNotificationCenter {
    _not_send: std::marker::PhantomData<*const ()>,
}

impl DistributedNotificationCenter {
    /// Handle to the distributed center.
    pub fn new() -> Self {
        Self::default()
    }
}

impl NotificationBus for DistributedNotificationCenter {
    #[track_caller]
    #[instrument(skip(self))]
    fn post(&self, notification: SystemNotification) -> CoreResult<()> {
        let name = CFString::from_static_string(notification.name());

        // SAFETY: the distributed center is a process-wide singleton owned by
        // CoreFoundation; `name` outlives the call.
        let posted = unsafe {
            let center = CFNotificationCenterGetDistributedCenter();
            if center.is_null() {
                false
            } else {
                CFNotificationCenterPostNotification(
                    center,
                    name.as_concrete_TypeRef(),
                    ptr::null(),
                    ptr::null(),
                    1,
                );
                true
            }
        };

        if !posted {
            return Err(ToggleError::NotificationPost {
                name: notification.name(),
                reason: "distributed notification center unavailable".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        debug!(name = notification.name(), "Notification posted");
        Ok(())
    }
}
