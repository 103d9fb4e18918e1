//! Shade configuration file handling

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shade_css::DEFAULT_CSS_FILENAME;
use shade_preview::{PreviewPage, Viewport};
use shade_store::DEFAULT_STORE_KEY;
use shade_sync::SyncConfig;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Name of the configuration file looked up in a directory
pub const CONFIG_FILE_NAME: &str = "shade.toml";

/// Top-level Shade configuration (shade.toml)
///
/// Every section and field is optional.
#[derive(Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ShadeConfig {
    #[serde(default)]
    pub sync: SyncSection,
    #[serde(default)]
    pub store: StoreSection,
    #[serde(default)]
    pub export: ExportSection,
    #[serde(default)]
    pub preview: PreviewSection,
}

/// Live sync tuning
#[derive(Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct SyncSection {
    /// Quiet period after the last CSS edit before it is parsed
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

fn default_debounce_ms() -> u64 {
    500
}

impl Default for SyncSection {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

/// Settings persistence
#[derive(Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct StoreSection {
    /// JSON key-value file holding the settings entry
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
    /// Key of the settings entry
    #[serde(default = "default_store_key")]
    pub key: String,
}

fn default_store_path() -> PathBuf {
    PathBuf::from(".shade/store.json")
}

fn default_store_key() -> String {
    DEFAULT_STORE_KEY.to_string()
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            path: default_store_path(),
            key: default_store_key(),
        }
    }
}

/// Stylesheet export
#[derive(Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExportSection {
    #[serde(default = "default_export_filename")]
    pub filename: String,
}

fn default_export_filename() -> String {
    DEFAULT_CSS_FILENAME.to_string()
}

impl Default for ExportSection {
    fn default() -> Self {
        Self {
            filename: default_export_filename(),
        }
    }
}

/// Preview defaults
#[derive(Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PreviewSection {
    #[serde(default)]
    pub viewport: Viewport,
    #[serde(default)]
    pub page: PreviewPage,
}

impl ShadeConfig {
    /// Load configuration from a file, or from `shade.toml` in a directory
    ///
    /// A directory without `shade.toml` yields the defaults. An explicitly
    /// named file must exist.
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = if path.is_dir() {
            let candidate = path.join(CONFIG_FILE_NAME);
            if !candidate.exists() {
                debug!(dir = %path.display(), "No shade.toml, using default configuration");
                return Ok(Self::default());
            }
            candidate
        } else {
            path.to_path_buf()
        };

        if !config_path.exists() {
            anyhow::bail!("Config file {} does not exist", config_path.display());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        let config: ShadeConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        debug!(path = %config_path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Controller tuning derived from `[sync]`
    pub fn sync_config(&self) -> SyncConfig {
        SyncConfig {
            debounce: Duration::from_millis(self.sync.debounce_ms),
        }
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_file_in_directory_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ShadeConfig::load_from_dir(dir.path()).unwrap();
        assert_eq!(config, ShadeConfig::default());
        assert_eq!(config.sync_config().debounce, Duration::from_millis(500));
        assert_eq!(config.store.key, "css-generator-settings");
        assert_eq!(config.export.filename, "custom-theme.css");
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[sync]\ndebounce_ms = 250\n\n[preview]\nviewport = \"mobile\"\n",
        )
        .unwrap();

        let config = ShadeConfig::load_from_dir(dir.path()).unwrap();
        assert_eq!(config.sync.debounce_ms, 250);
        assert_eq!(config.preview.viewport, Viewport::Mobile);
        assert_eq!(config.preview.page, PreviewPage::Home);
        assert_eq!(config.store, StoreSection::default());
    }

    #[test]
    fn named_file_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let err = ShadeConfig::load_from_dir(&dir.path().join("custom.toml")).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn invalid_toml_is_reported_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[sync\n").unwrap();
        let err = ShadeConfig::load_from_dir(dir.path()).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse"));
    }

    #[test]
    fn serializes_back_to_toml() {
        let toml = ShadeConfig::default().to_toml().unwrap();
        let reparsed: ShadeConfig = toml::from_str(&toml).unwrap();
        assert_eq!(reparsed, ShadeConfig::default());
    }
}
