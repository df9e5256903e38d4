use crate::{
    CoreResult, ToggleError,
    preferences::{PreferenceDomain, PreferenceKey, PreferenceStore},
};

use std::panic::Location;

use core_foundation::{
    array::CFArray,
    base::{CFType, TCFType},
    boolean::CFBoolean,
    number::CFNumber,
    string::CFString,
};
use core_foundation_sys::preferences::{
    CFPreferencesCopyKeyList, CFPreferencesCopyValue, CFPreferencesSetValue,
    CFPreferencesSynchronize, kCFPreferencesAnyApplication, kCFPreferencesAnyHost,
    kCFPreferencesCurrentUser,
};
use error_location::ErrorLocation;
use tracing::{debug, instrument, warn};

/// Preference store backed by `CFPreferences`, scoped to the current user on
/// any host (the same scope `defaults write` uses).
///
/// `CFPreferences` has no notion of a domain failing to load: a domain with
/// no stored keys and a missing domain both list zero keys, and both read as
/// empty. [`PreferenceStore::load_domain`] therefore always succeeds here.
#[derive(Debug, Default)]
pub struct CfPreferenceStore;

impl CfPreferenceStore {
    /// Create a store for the current user.
    pub fn new() -> Self {
        Self
    }

    fn application_id(domain: PreferenceDomain) -> CFString {
        match domain {
            // SAFETY: a framework constant, valid for the process lifetime.
            PreferenceDomain::Global => unsafe {
                CFString::wrap_under_get_rule(kCFPreferencesAnyApplication)
            },
            PreferenceDomain::Dock => CFString::from_static_string("com.apple.dock"),
        }
    }

    fn copy_value(key: PreferenceKey) -> Option<CFType> {
        let app = Self::application_id(key.domain);
        let name = CFString::from_static_string(key.name);

        // SAFETY: all arguments are live CFStrings; the result follows the
        // create rule and is released by the CFType wrapper.
        unsafe {
            let value = CFPreferencesCopyValue(
                name.as_concrete_TypeRef(),
                app.as_concrete_TypeRef(),
                kCFPreferencesCurrentUser,
                kCFPreferencesAnyHost,
            );
            if value.is_null() {
                None
            } else {
                Some(CFType::wrap_under_create_rule(value))
            }
        }
    }
}

/// Number of keys stored for `application_id`. NULL key lists count as zero.
pub(crate) fn key_count(application_id: &CFString) -> usize {
    // SAFETY: `application_id` is a live CFString; the user/host constants
    // are framework statics.
    let keys = unsafe {
        CFPreferencesCopyKeyList(
            application_id.as_concrete_TypeRef(),
            kCFPreferencesCurrentUser,
            kCFPreferencesAnyHost,
        )
    };

    if keys.is_null() {
        return 0;
    }

    // SAFETY: non-null and owned by us under the create rule.
    let keys = unsafe { CFArray::<CFType>::wrap_under_create_rule(keys) };
    keys.len() as usize
}

/// Interpret a stored property as a flag.
///
/// Booleans map directly; numbers (`defaults write -int`) are true when
/// non-zero; anything else is not a flag.
pub(crate) fn bool_from_property(value: &CFType) -> Option<bool> {
    if let Some(flag) = value.downcast::<CFBoolean>() {
        return Some(bool::from(flag));
    }

    value
        .downcast::<CFNumber>()
        .and_then(|number| number.to_i64())
        .map(|n| n != 0)
}

impl PreferenceStore for CfPreferenceStore {
    #[instrument(skip(self))]
    fn load_domain(&self, domain: PreferenceDomain) -> CoreResult<()> {
        let count = key_count(&Self::application_id(domain));
        if count == 0 {
            debug!(domain = %domain, "Preference domain has no stored keys");
        }
        Ok(())
    }

    #[instrument(skip(self))]
    fn read_bool(&self, key: PreferenceKey) -> CoreResult<Option<bool>> {
        let Some(value) = Self::copy_value(key) else {
            return Ok(None);
        };

        let flag = bool_from_property(&value);
        if flag.is_none() {
            warn!(domain = %key.domain, key = key.name, "Preference is not a boolean, ignoring");
        }

        Ok(flag)
    }

    #[track_caller]
    #[instrument(skip(self))]
    fn write_bool(&mut self, key: PreferenceKey, value: bool) -> CoreResult<()> {
        let app = Self::application_id(key.domain);
        let name = CFString::from_static_string(key.name);
        let flag = CFBoolean::from(value);

        // SAFETY: see copy_value.
        let synced = unsafe {
            CFPreferencesSetValue(
                name.as_concrete_TypeRef(),
                flag.as_CFTypeRef(),
                app.as_concrete_TypeRef(),
                kCFPreferencesCurrentUser,
                kCFPreferencesAnyHost,
            );
            CFPreferencesSynchronize(
                app.as_concrete_TypeRef(),
                kCFPreferencesCurrentUser,
                kCFPreferencesAnyHost,
            ) != 0
        };

        if !synced {
            return Err(ToggleError::PreferenceWrite {
                domain: key.domain,
                key: key.name,
                reason: "CFPreferencesSynchronize returned false".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let stored = self.read_bool(key).ok().flatten();
        if stored != Some(value) {
            return Err(ToggleError::PreferenceWrite {
                domain: key.domain,
                key: key.name,
                reason: format!("read back {:?} after writing {}", stored, value),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        debug!(domain = %key.domain, key = key.name, value, "Preference written");
        Ok(())
    }
}
