mod controller;

use crate::{CoreResult, NotificationBus, SystemNotification, ToggleError};

use std::{cell::RefCell, panic::Location};

use error_location::ErrorLocation;

/// Notification bus that records instead of broadcasting.
#[derive(Default)]
pub(crate) struct RecordingBus {
    posted: RefCell<Vec<SystemNotification>>,
    failing: bool,
}

impl RecordingBus {
    pub(crate) fn failing() -> Self {
        Self {
            posted: RefCell::default(),
            failing: true,
        }
    }

    pub(crate) fn posted(&self) -> Vec<SystemNotification> {
        self.posted.borrow().clone()
    }
}

impl NotificationBus for RecordingBus {
    fn post(&self, notification: SystemNotification) -> CoreResult<()> {
        if self.failing {
            return Err(ToggleError::NotificationPost {
                name: notification.name(),
                reason: "bus closed".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        self.posted.borrow_mut().push(notification);
        Ok(())
    }
}
