use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use shade_theme::ThemeSettings;
use tracing::{debug, info, warn};

use crate::{decode_settings, encode_settings, SettingsStore, StoreError, DEFAULT_STORE_KEY};

/// Key-value store kept as one JSON object in a file
///
/// Entries other than this store's key are preserved on save. Writes go to
/// a sibling temporary file which is then renamed over the original.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    key: String,
}

/// State of the backing file
enum Contents {
    Missing,
    Entries(Map<String, Value>),
    /// Exists but cannot be read as a JSON object
    Unusable,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_key(path, DEFAULT_STORE_KEY)
    }

    pub fn with_key(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            key: key.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    fn read_contents(&self) -> Contents {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => return Contents::Missing,
            Err(err) => {
                debug!(path = %self.path.display(), %err, "Cannot read settings store");
                return Contents::Unusable;
            }
        };

        match serde_json::from_str::<Value>(&text) {
            Ok(Value::Object(entries)) => Contents::Entries(entries),
            Ok(_) => {
                debug!(path = %self.path.display(), "Settings store is not a JSON object");
                Contents::Unusable
            }
            Err(err) => {
                debug!(path = %self.path.display(), %err, "Settings store is not valid JSON");
                Contents::Unusable
            }
        }
    }

    fn read_entries(&self) -> Option<Map<String, Value>> {
        match self.read_contents() {
            Contents::Entries(entries) => Some(entries),
            Contents::Missing | Contents::Unusable => None,
        }
    }

    fn write_entries(&self, entries: &Map<String, Value>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
        }

        let text = serde_json::to_string_pretty(entries)?;
        let mut tmp = OsString::from(self.path.as_os_str());
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, text).map_err(|e| StoreError::io(&tmp, e))?;
        fs::rename(&tmp, &self.path).map_err(|e| StoreError::io(&self.path, e))?;
        Ok(())
    }
}

impl SettingsStore for JsonFileStore {
    fn load(&self) -> Option<ThemeSettings> {
        let entries = self.read_entries()?;
        let entry = entries.get(&self.key)?;
        match entry {
            Value::String(text) => decode_settings(text),
            Value::Object(_) => Some(ThemeSettings::from_json_over_defaults(entry)),
            _ => {
                debug!(key = %self.key, "Ignoring settings entry of unexpected type");
                None
            }
        }
    }

    fn save(&self, settings: &ThemeSettings) -> Result<(), StoreError> {
        let mut entries = match self.read_contents() {
            Contents::Entries(entries) => entries,
            Contents::Missing => Map::new(),
            Contents::Unusable => {
                warn!(
                    path = %self.path.display(),
                    "Settings store is not a readable JSON object, overwriting it"
                );
                Map::new()
            }
        };
        entries.insert(self.key.clone(), Value::String(encode_settings(settings)?));
        self.write_entries(&entries)?;
        debug!(path = %self.path.display(), key = %self.key, "Saved theme settings");
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        let Some(mut entries) = self.read_entries() else {
            return Ok(());
        };
        if entries.remove(&self.key).is_some() {
            self.write_entries(&entries)?;
            info!(path = %self.path.display(), key = %self.key, "Cleared theme settings");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    #[traced_test]
    fn saving_over_an_unreadable_file_warns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(matches!(store.read_contents(), Contents::Unusable));
        store.save(&ThemeSettings::default()).unwrap();

        assert!(logs_contain("overwriting it"));
        assert!(matches!(store.read_contents(), Contents::Entries(_)));
    }

    #[test]
    #[traced_test]
    fn saving_a_new_file_does_not_warn() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested").join("settings.json"));
        assert!(matches!(store.read_contents(), Contents::Missing));

        store.save(&ThemeSettings::default()).unwrap();
        assert!(!logs_contain("overwriting it"));
    }
}
