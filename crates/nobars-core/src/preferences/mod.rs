//! Key-value access to the OS preference domains that control bar visibility.

#[cfg(target_os = "macos")]
mod cf_store;
mod memory;

#[cfg(target_os = "macos")]
pub use cf_store::CfPreferenceStore;
#[cfg(all(test, target_os = "macos"))]
pub(crate) use cf_store::{bool_from_property, key_count};
pub use memory::MemoryPreferenceStore;

use crate::CoreResult;

use std::fmt;

/// A preference domain touched by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreferenceDomain {
    /// `.GlobalPreferences`, shared by every application.
    Global,
    /// `com.apple.dock`.
    Dock,
}

impl fmt::Display for PreferenceDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreferenceDomain::Global => f.write_str(".GlobalPreferences"),
            PreferenceDomain::Dock => f.write_str("com.apple.dock"),
        }
    }
}

/// A named boolean in a preference domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PreferenceKey {
    /// Domain holding the key.
    pub domain: PreferenceDomain,
    /// Key name.
    pub name: &'static str,
}

/// Hides the menu bar until the pointer reaches the top of the screen.
pub const MENU_BAR_HIDING: PreferenceKey = PreferenceKey {
    domain: PreferenceDomain::Global,
    name: "_HIHideMenuBar",
};

/// Dock auto-hide.
pub const DOCK_AUTOHIDE: PreferenceKey = PreferenceKey {
    domain: PreferenceDomain::Dock,
    name: "autohide",
};

/// Read/write access to boolean preferences.
pub trait PreferenceStore {
    /// Check that a domain's backing store can be loaded.
    fn load_domain(&self, domain: PreferenceDomain) -> CoreResult<()>;

    /// Read a boolean. `Ok(None)` when the key is absent.
    fn read_bool(&self, key: PreferenceKey) -> CoreResult<Option<bool>>;

    /// Write a boolean and confirm it was persisted.
    fn write_bool(&mut self, key: PreferenceKey, value: bool) -> CoreResult<()>;
}
