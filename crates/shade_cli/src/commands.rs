//! One-shot subcommands
//!
//! Every command reads the persisted settings, drives a
//! [`LiveSyncController`] when it changes them, and saves the result back.
//! Output goes to the writer passed in so the commands can be tested
//! without a terminal.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use shade_css::{export_css_as, generate};
use shade_preview::{render_page, ComponentTemplate, ContentOverrides, PreviewPage, Viewport};
use shade_store::{JsonFileStore, SettingsStore};
use shade_sync::{LiveSyncController, ParseOutcome};
use shade_theme::{SettingsError, SettingsField, ThemePreset, ThemeSettings, FONT_OPTIONS};
use tracing::{info, warn};

use crate::config::ShadeConfig;

/// Configuration plus the store it points at
pub struct Session {
    pub config: ShadeConfig,
    pub store: JsonFileStore,
}

impl Session {
    /// `store_path` overrides the configured store file
    pub fn new(config: ShadeConfig, store_path: Option<PathBuf>) -> Self {
        let path = store_path.unwrap_or_else(|| config.store.path.clone());
        let store = JsonFileStore::with_key(path, config.store.key.clone());
        Self { config, store }
    }

    /// Persisted settings, or the defaults
    pub fn settings(&self) -> ThemeSettings {
        self.store.load().unwrap_or_default()
    }

    /// Controller over the persisted settings that does not save by itself
    fn controller(&self) -> LiveSyncController {
        LiveSyncController::new(self.settings(), self.config.sync_config())
    }

    fn save(&self, settings: &ThemeSettings) -> Result<()> {
        self.store
            .save(settings)
            .with_context(|| format!("Failed to save settings to {}", self.store.path().display()))
    }
}

/// Print (or write) the generated stylesheet
pub fn generate_css(session: &Session, out_path: Option<&Path>, out: &mut dyn Write) -> Result<()> {
    let css = generate(&session.settings());
    match out_path {
        Some(path) => {
            fs::write(path, &css).with_context(|| format!("Failed to write {}", path.display()))?;
            writeln!(out, "Wrote {}", path.display())?;
        }
        None => out.write_all(css.as_bytes())?,
    }
    Ok(())
}

/// Parse a CSS file and report diagnostics
///
/// Returns whether the file parsed without errors. With `apply`, a clean
/// parse is merged into the persisted settings.
pub fn check(
    session: &Session,
    file: &Path,
    apply: bool,
    colored: bool,
    out: &mut dyn Write,
) -> Result<bool> {
    let css = fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))?;

    let mut sync = session.controller();
    sync.on_css_text_edited(css, Instant::now());
    let outcome = sync.flush();
    sync.diagnostics().log();

    if !sync.diagnostics().is_empty() {
        writeln!(out, "{}\n", sync.diagnostics().render(colored))?;
    }
    writeln!(out, "{}", sync.diagnostics().summary(colored))?;

    match outcome {
        Some(ParseOutcome::Applied { fields }) => {
            if apply {
                session.save(sync.settings())?;
                writeln!(out, "Applied {} field(s) to {}", fields, session.store.path().display())?;
            }
            Ok(true)
        }
        Some(ParseOutcome::Rejected { .. }) => Ok(false),
        None => Ok(true),
    }
}

/// List the preset catalog, marking the preset the current colours match
pub fn list_presets(session: &Session, out: &mut dyn Write) -> Result<()> {
    let settings = session.settings();
    for preset in ThemePreset::all() {
        let marker = if preset.to_patch().merged(&settings) == settings { "*" } else { " " };
        writeln!(
            out,
            "{} {:<16} {:<18} {}",
            marker,
            preset.key(),
            preset.display_name(),
            preset.colors().primary_color
        )?;
    }
    Ok(())
}

/// List the fonts offered for `font-family`
pub fn list_fonts(out: &mut dyn Write) -> Result<()> {
    for font in FONT_OPTIONS {
        writeln!(out, "{:<16} {}", font.family, font.label)?;
    }
    Ok(())
}

/// Apply a preset's colours to the persisted settings
pub fn apply_preset(session: &Session, key: &str, out: &mut dyn Write) -> Result<()> {
    let mut sync = session.controller();
    let preset = sync.apply_preset_key(key)?;
    session.save(sync.settings())?;
    writeln!(out, "Applied preset {} ({})", preset, preset.key())?;
    Ok(())
}

/// Set one field from raw input
///
/// `field` is a custom property name (`border-radius`, `--border-radius`) or
/// a camelCase key (`borderRadius`).
pub fn set_field(session: &Session, field: &str, value: &str, out: &mut dyn Write) -> Result<()> {
    let field =
        SettingsField::from_name(field).ok_or_else(|| SettingsError::UnknownField(field.to_string()))?;

    let mut sync = session.controller();
    let advisory = sync.set_field(field, value)?;
    session.save(sync.settings())?;

    if let Some(advisory) = advisory {
        warn!(%advisory, "Stored unusual value");
        writeln!(out, "warning: {advisory}")?;
    }
    writeln!(out, "{} = {}", field, sync.settings().value(field))?;
    Ok(())
}

/// Print the persisted settings as JSON
pub fn show(session: &Session, out: &mut dyn Write) -> Result<()> {
    let json = serde_json::to_string_pretty(&session.settings()).context("Failed to serialize settings")?;
    writeln!(out, "{json}")?;
    Ok(())
}

/// Restore the default settings
pub fn reset(session: &Session, out: &mut dyn Write) -> Result<()> {
    let mut sync = session.controller();
    sync.reset_to_defaults();
    session.save(sync.settings())?;
    writeln!(out, "Settings reset to defaults")?;
    Ok(())
}

/// Write the generated stylesheet into `dir`
pub fn export(session: &Session, dir: &Path, filename: Option<&str>, out: &mut dyn Write) -> Result<PathBuf> {
    let filename = filename.unwrap_or(session.config.export.filename.as_str());
    let file = export_css_as(&session.settings(), filename);
    let path = file
        .write_to_dir(dir)
        .with_context(|| format!("Failed to export {} into {}", filename, dir.display()))?;
    writeln!(out, "Exported {}", path.display())?;
    Ok(path)
}

/// What to render for `shade preview`
#[derive(Debug, Default)]
pub struct PreviewRequest {
    pub viewport: Option<Viewport>,
    pub page: Option<PreviewPage>,
    pub content: ContentOverrides,
    pub out_path: Option<PathBuf>,
}

/// Render a storefront page as a standalone HTML document
pub fn preview(session: &Session, request: PreviewRequest, out: &mut dyn Write) -> Result<()> {
    let viewport = request.viewport.unwrap_or(session.config.preview.viewport);
    let page = request.page.unwrap_or(session.config.preview.page);

    let node = render_page(&session.settings(), viewport, page, &request.content);
    let title = format!("{} · {} preview", request.content.store_name(), page.label());
    let document = node.to_document(&title);

    match request.out_path {
        Some(path) => {
            fs::write(&path, document).with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), %viewport, %page, "Wrote preview");
            writeln!(out, "Wrote {} ({} / {})", path.display(), page, viewport)?;
        }
        None => out.write_all(document.as_bytes())?,
    }
    Ok(())
}

/// List the component templates, or export one into `dir`
pub fn template(
    key: Option<&str>,
    dir: &Path,
    with_document: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let Some(key) = key else {
        for template in ComponentTemplate::ALL {
            writeln!(out, "{:<12} {}", template.key(), template.display_name())?;
        }
        return Ok(());
    };

    let template = ComponentTemplate::from_key(key)?;
    for file in template.export() {
        let path = file
            .write_to_dir(dir)
            .with_context(|| format!("Failed to export {} into {}", file.filename, dir.display()))?;
        writeln!(out, "Exported {}", path.display())?;
    }
    if with_document {
        let path = dir.join(format!("{}.preview.html", template.key()));
        fs::write(&path, template.document()).with_context(|| format!("Failed to write {}", path.display()))?;
        writeln!(out, "Exported {}", path.display())?;
    }
    Ok(())
}
