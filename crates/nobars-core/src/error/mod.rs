use crate::PreferenceDomain;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors raised while reading, toggling and broadcasting bar visibility.
#[derive(Error, Debug)]
pub enum ToggleError {
    /// The backing store for a preference domain could not be loaded.
    #[error("Could not read preference domain {domain} {location}")]
    PreferenceRead {
        /// Domain that failed to load.
        domain: PreferenceDomain,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A preference write was not persisted or did not read back.
    #[error("Could not write {key} in {domain}: {reason} {location}")]
    PreferenceWrite {
        /// Domain holding the key.
        domain: PreferenceDomain,
        /// Key being written.
        key: &'static str,
        /// Why the write is unconfirmed.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A change notification could not be posted.
    #[error("Could not post notification {name}: {reason} {location}")]
    NotificationPost {
        /// Distributed notification name.
        name: &'static str,
        /// Description of the failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The desktop clean-up script failed to run.
    #[error("Desktop automation failed: {reason} {location}")]
    Automation {
        /// Description of the failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`ToggleError`].
pub type Result<T> = std::result::Result<T, ToggleError>;
