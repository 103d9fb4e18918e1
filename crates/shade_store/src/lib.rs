//! Shade Settings Store
//!
//! Persists [`ThemeSettings`] under a single key of a local key-value store,
//! the same shape a browser's local storage has: every entry is a string and
//! the settings entry holds a JSON document.
//!
//! Loading is forgiving. A missing entry or corrupt JSON yields `None`, and
//! a readable document is merged over the defaults field by field, so a
//! stale or partial entry never loses the fields it does carry.
//!
//! ```rust
//! use shade_store::{MemoryStore, SettingsStore};
//! use shade_theme::ThemeSettings;
//!
//! let store = MemoryStore::new();
//! assert!(store.load().is_none());
//!
//! let settings = ThemeSettings { border_radius: 4, ..ThemeSettings::default() };
//! store.save(&settings).unwrap();
//! assert_eq!(store.load(), Some(settings));
//! ```

mod error;
mod file;
mod memory;

pub use error::StoreError;
pub use file::JsonFileStore;
pub use memory::MemoryStore;

use shade_theme::ThemeSettings;
use tracing::debug;

/// Key the settings entry is stored under
pub const DEFAULT_STORE_KEY: &str = "css-generator-settings";

/// Where settings live between sessions
pub trait SettingsStore {
    /// Persisted settings merged over defaults, or `None` if there are none
    fn load(&self) -> Option<ThemeSettings>;

    /// Replace the persisted settings
    fn save(&self, settings: &ThemeSettings) -> Result<(), StoreError>;

    /// Remove the persisted settings
    fn clear(&self) -> Result<(), StoreError>;
}

impl<S: SettingsStore + ?Sized> SettingsStore for Box<S> {
    fn load(&self) -> Option<ThemeSettings> {
        (**self).load()
    }

    fn save(&self, settings: &ThemeSettings) -> Result<(), StoreError> {
        (**self).save(settings)
    }

    fn clear(&self) -> Result<(), StoreError> {
        (**self).clear()
    }
}

/// Encode settings as the stored entry text
pub fn encode_settings(settings: &ThemeSettings) -> Result<String, StoreError> {
    Ok(serde_json::to_string(settings)?)
}

/// Decode a stored entry, merging over defaults; `None` when it is not JSON
pub fn decode_settings(entry: &str) -> Option<ThemeSettings> {
    match serde_json::from_str::<serde_json::Value>(entry) {
        Ok(json) => Some(ThemeSettings::from_json_over_defaults(&json)),
        Err(err) => {
            debug!(%err, "Persisted settings are not valid JSON");
            None
        }
    }
}
