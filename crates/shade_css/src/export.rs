//! Downloadable stylesheet files

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use shade_theme::ThemeSettings;
use tracing::info;

use crate::generator::generate;

/// Default name of the exported stylesheet
pub const DEFAULT_CSS_FILENAME: &str = "custom-theme.css";

/// A named file ready to be written or offered for download
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportFile {
    pub filename: String,
    pub mime_type: &'static str,
    pub content: String,
}

impl ExportFile {
    pub fn css(filename: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            mime_type: "text/css",
            content: content.into(),
        }
    }

    pub fn html(filename: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            mime_type: "text/html",
            content: content.into(),
        }
    }

    /// Write into `dir` under the file's own name, creating `dir` if needed
    pub fn write_to_dir(&self, dir: &Path) -> io::Result<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(&self.filename);
        fs::write(&path, &self.content)?;
        info!(path = %path.display(), bytes = self.content.len(), "Exported {}", self.mime_type);
        Ok(path)
    }
}

/// The generated stylesheet as `custom-theme.css`
pub fn export_css(settings: &ThemeSettings) -> ExportFile {
    export_css_as(settings, DEFAULT_CSS_FILENAME)
}

/// The generated stylesheet under a caller-chosen name
pub fn export_css_as(settings: &ThemeSettings, filename: &str) -> ExportFile {
    ExportFile::css(filename, generate(settings))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_uses_generated_text() {
        let settings = ThemeSettings::default();
        let file = export_css(&settings);
        assert_eq!(file.filename, "custom-theme.css");
        assert_eq!(file.mime_type, "text/css");
        assert_eq!(file.content, generate(&settings));
    }
}
