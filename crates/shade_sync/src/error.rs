use shade_theme::{SettingsError, UnknownPreset};
use thiserror::Error;

/// Commands the controller refused; the live state is unchanged
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SyncError {
    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    Preset(#[from] UnknownPreset),
}
