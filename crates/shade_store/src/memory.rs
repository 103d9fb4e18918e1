use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use shade_theme::ThemeSettings;

use crate::{decode_settings, encode_settings, SettingsStore, StoreError, DEFAULT_STORE_KEY};

/// In-process store; clones share the same entries
#[derive(Clone, Debug)]
pub struct MemoryStore {
    key: String,
    entries: Arc<Mutex<BTreeMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_key(DEFAULT_STORE_KEY)
    }

    pub fn with_key(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            entries: Arc::default(),
        }
    }

    /// Raw entry text, as another reader of the store would see it
    pub fn raw_entry(&self) -> Option<String> {
        self.entries.lock().ok()?.get(&self.key).cloned()
    }

    /// Overwrite the raw entry text
    pub fn set_raw_entry(&self, entry: impl Into<String>) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        entries.insert(self.key.clone(), entry.into());
        Ok(())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsStore for MemoryStore {
    fn load(&self) -> Option<ThemeSettings> {
        decode_settings(&self.raw_entry()?)
    }

    fn save(&self, settings: &ThemeSettings) -> Result<(), StoreError> {
        self.set_raw_entry(encode_settings(settings)?)
    }

    fn clear(&self) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        entries.remove(&self.key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_entries() {
        let store = MemoryStore::new();
        let view = store.clone();
        store.save(&ThemeSettings::default()).unwrap();
        assert_eq!(view.load(), Some(ThemeSettings::default()));

        view.clear().unwrap();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn corrupt_raw_entry_loads_as_none() {
        let store = MemoryStore::new();
        store.set_raw_entry("][").unwrap();
        assert_eq!(store.load(), None);
    }
}
