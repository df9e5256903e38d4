use crate::{
    CoreResult, ToggleError,
    preferences::{PreferenceDomain, PreferenceKey, PreferenceStore},
};

use std::{
    collections::{HashMap, HashSet},
    panic::Location,
};

use error_location::ErrorLocation;

/// In-process preference store.
///
/// Stands in for the OS store on hosts without `CFPreferences` and in tests.
/// Domains can be marked unreadable and keys unwritable to exercise the
/// controller's failure paths.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: HashMap<PreferenceKey, bool>,
    unreadable: HashSet<PreferenceDomain>,
    unwritable: HashSet<PreferenceKey>,
    writes: Vec<(PreferenceKey, bool)>,
}

impl MemoryPreferenceStore {
    /// Empty store with every domain readable and every key writable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value without recording it as a write.
    pub fn with_value(mut self, key: PreferenceKey, value: bool) -> Self {
        self.values.insert(key, value);
        self
    }

    /// Make every read of `domain` fail.
    pub fn with_unreadable_domain(mut self, domain: PreferenceDomain) -> Self {
        self.unreadable.insert(domain);
        self
    }

    /// Make every write of `key` fail.
    pub fn with_unwritable_key(mut self, key: PreferenceKey) -> Self {
        self.unwritable.insert(key);
        self
    }

    /// Current value of `key`, bypassing failure switches.
    pub fn value(&self, key: PreferenceKey) -> Option<bool> {
        self.values.get(&key).copied()
    }

    /// Successful writes in the order they happened.
    pub fn writes(&self) -> &[(PreferenceKey, bool)] {
        &self.writes
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    #[track_caller]
    fn load_domain(&self, domain: PreferenceDomain) -> CoreResult<()> {
        if self.unreadable.contains(&domain) {
            return Err(ToggleError::PreferenceRead {
                domain,
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }

    #[track_caller]
    fn read_bool(&self, key: PreferenceKey) -> CoreResult<Option<bool>> {
        self.load_domain(key.domain)?;
        Ok(self.value(key))
    }

    #[track_caller]
    fn write_bool(&mut self, key: PreferenceKey, value: bool) -> CoreResult<()> {
        if self.unwritable.contains(&key) {
            return Err(ToggleError::PreferenceWrite {
                domain: key.domain,
                key: key.name,
                reason: "store rejected the write".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.values.insert(key, value);
        self.writes.push((key, value));
        Ok(())
    }
}
