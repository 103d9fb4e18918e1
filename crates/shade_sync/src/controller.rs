//! Single owner of the live theme state
//!
//! Three sources mutate the settings: visual edits, hand-edited CSS (after a
//! debounced parse) and presets. All of them go through
//! [`LiveSyncController`], so there is exactly one writer and no update can
//! race another.
//!
//! - a settings-side change regenerates the CSS text immediately and cancels
//!   any parse still waiting on the debounce
//! - a CSS edit stores the text immediately and schedules a parse; only the
//!   latest scheduled parse ever runs
//! - a parse with errors leaves the settings untouched; warnings never block
//! - a successful parse merges into the settings but keeps the hand-edited
//!   text as it is

use std::time::{Duration, Instant};

use shade_css::{generate, parse, Diagnostics};
use shade_store::SettingsStore;
use shade_theme::{FieldAdvisory, FieldValue, SettingsField, ThemePreset, ThemeSettings};
use tracing::{debug, info, warn};

use crate::debounce::{Debouncer, DEFAULT_PARSE_DEBOUNCE};
use crate::error::SyncError;

/// Controller tuning
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SyncConfig {
    /// Quiet period after the last CSS edit before it is parsed
    pub debounce: Duration,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_PARSE_DEBOUNCE,
        }
    }
}

/// Every way the live state can be driven
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SyncCommand {
    /// Replace the settings wholesale (visual panel)
    ReplaceSettings(ThemeSettings),
    /// Set one field from raw input text
    SetField { field: SettingsField, raw: String },
    /// The CSS text was edited at `at`
    EditCss { text: String, at: Instant },
    /// Merge a preset's colours
    ApplyPreset(ThemePreset),
    /// Go back to the default settings
    Reset,
    /// Throw away the CSS text and regenerate it from the settings
    AutoFix,
    /// Run the pending parse if it is due at `now`
    Tick(Instant),
    /// Run the pending parse now
    Flush,
}

/// What a parse did to the live settings
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseOutcome {
    /// No errors; `fields` values were merged
    Applied { fields: usize },
    /// At least one error; nothing was merged
    Rejected { errors: usize },
}

/// Result of [`LiveSyncController::dispatch`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Settings changed and the CSS text was regenerated
    SettingsUpdated { advisory: Option<FieldAdvisory> },
    /// A parse is waiting until `deadline`
    ParseScheduled { deadline: Instant },
    /// A pending parse ran
    Parsed(ParseOutcome),
    /// CSS text regenerated, settings unchanged
    Regenerated,
    /// Nothing was due
    Idle,
}

/// Counters for observing controller activity
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SyncStats {
    /// Parses actually run
    pub parses: u64,
    /// Parses whose patch was merged
    pub applied: u64,
    /// Parses rejected because of errors
    pub rejected: u64,
    /// Settings-side updates (visual edit, preset, reset)
    pub settings_updates: u64,
}

type Observer = Box<dyn FnMut(&ThemeSettings)>;

pub struct LiveSyncController {
    settings: ThemeSettings,
    css_text: String,
    diagnostics: Diagnostics,
    pending: Debouncer<String>,
    store: Option<Box<dyn SettingsStore>>,
    observers: Vec<Observer>,
    stats: SyncStats,
}

impl LiveSyncController {
    pub fn new(settings: ThemeSettings, config: SyncConfig) -> Self {
        let css_text = generate(&settings);
        Self {
            settings,
            css_text,
            diagnostics: Diagnostics::new(),
            pending: Debouncer::new(config.debounce),
            store: None,
            observers: Vec::new(),
            stats: SyncStats::default(),
        }
    }

    /// Start from the persisted settings, or defaults if there are none
    ///
    /// Every later settings change is saved back to `store`.
    pub fn from_store(store: Box<dyn SettingsStore>, config: SyncConfig) -> Self {
        let settings = match store.load() {
            Some(settings) => {
                info!("Loaded persisted theme settings");
                settings
            }
            None => {
                debug!("No persisted theme settings, using defaults");
                ThemeSettings::default()
            }
        };
        let mut controller = Self::new(settings, config);
        controller.store = Some(store);
        controller
    }

    pub fn settings(&self) -> &ThemeSettings {
        &self.settings
    }

    /// Current CSS text: generated, or as last hand-edited
    pub fn css_text(&self) -> &str {
        &self.css_text
    }

    /// Diagnostics of the last parse; empty after any settings-side change
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn stats(&self) -> SyncStats {
        self.stats
    }

    pub fn is_parse_pending(&self) -> bool {
        self.pending.is_pending()
    }

    /// When the pending parse becomes due; an event loop should wake then
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.deadline()
    }

    /// Call `observer` after every change to the settings
    pub fn subscribe(&mut self, observer: impl FnMut(&ThemeSettings) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Replace the settings and regenerate the CSS text
    pub fn on_settings_changed(&mut self, settings: ThemeSettings) {
        self.settings = settings;
        self.css_text = generate(&self.settings);
        self.diagnostics = Diagnostics::new();
        if self.pending.cancel().is_some() {
            debug!("Settings changed, dropping pending CSS parse");
        }
        self.stats.settings_updates += 1;
        self.persist();
        self.notify();
    }

    /// Set one field from raw input, as a visual control would
    ///
    /// A numeric field that does not decode is rejected and nothing changes.
    /// An unusual but storable value is applied and its advisory returned.
    pub fn set_field(&mut self, field: SettingsField, raw: &str) -> Result<Option<FieldAdvisory>, SyncError> {
        let value = FieldValue::decode(field, raw)?;
        let advisory = value.advisory(field);
        if let Some(advisory) = &advisory {
            info!(%advisory, "Applying unusual value");
        }

        let mut settings = self.settings.clone();
        settings.set_value(field, value)?;
        self.on_settings_changed(settings);
        Ok(advisory)
    }

    /// Store edited CSS text and (re)schedule its parse
    ///
    /// Returns the deadline of the scheduled parse.
    pub fn on_css_text_edited(&mut self, text: impl Into<String>, now: Instant) -> Instant {
        let text = text.into();
        self.css_text.clone_from(&text);
        let deadline = self.pending.schedule(text, now);
        debug!(delay_ms = self.pending.delay().as_millis() as u64, "Scheduled CSS parse");
        deadline
    }

    /// Run the pending parse if its deadline has passed
    pub fn poll(&mut self, now: Instant) -> Option<ParseOutcome> {
        let text = self.pending.poll(now)?;
        Some(self.run_parse(&text))
    }

    /// Run the pending parse immediately
    pub fn flush(&mut self) -> Option<ParseOutcome> {
        let text = self.pending.flush()?;
        Some(self.run_parse(&text))
    }

    /// Merge a preset's colours, keeping every other field
    pub fn apply_preset(&mut self, preset: ThemePreset) {
        let settings = preset.to_patch().merged(&self.settings);
        info!(preset = preset.key(), "Applying theme preset {}", preset);
        self.on_settings_changed(settings);
    }

    /// [`apply_preset`](Self::apply_preset) by key
    pub fn apply_preset_key(&mut self, key: &str) -> Result<ThemePreset, SyncError> {
        let preset = ThemePreset::from_key(key)?;
        self.apply_preset(preset);
        Ok(preset)
    }

    pub fn reset_to_defaults(&mut self) {
        info!("Resetting theme settings to defaults");
        self.on_settings_changed(ThemeSettings::default());
    }

    /// Discard the CSS text and regenerate it from the current settings
    pub fn regenerate_from_settings(&mut self) {
        self.css_text = generate(&self.settings);
        self.diagnostics = Diagnostics::new();
        if self.pending.cancel().is_some() {
            debug!("Regenerated CSS, dropping pending parse");
        }
    }

    /// Single entry point for every command
    pub fn dispatch(&mut self, command: SyncCommand) -> Result<SyncOutcome, SyncError> {
        let outcome = match command {
            SyncCommand::ReplaceSettings(settings) => {
                self.on_settings_changed(settings);
                SyncOutcome::SettingsUpdated { advisory: None }
            }
            SyncCommand::SetField { field, raw } => SyncOutcome::SettingsUpdated {
                advisory: self.set_field(field, &raw)?,
            },
            SyncCommand::EditCss { text, at } => SyncOutcome::ParseScheduled {
                deadline: self.on_css_text_edited(text, at),
            },
            SyncCommand::ApplyPreset(preset) => {
                self.apply_preset(preset);
                SyncOutcome::SettingsUpdated { advisory: None }
            }
            SyncCommand::Reset => {
                self.reset_to_defaults();
                SyncOutcome::SettingsUpdated { advisory: None }
            }
            SyncCommand::AutoFix => {
                self.regenerate_from_settings();
                SyncOutcome::Regenerated
            }
            SyncCommand::Tick(now) => self.poll(now).map_or(SyncOutcome::Idle, SyncOutcome::Parsed),
            SyncCommand::Flush => self.flush().map_or(SyncOutcome::Idle, SyncOutcome::Parsed),
        };
        Ok(outcome)
    }

    fn run_parse(&mut self, text: &str) -> ParseOutcome {
        self.stats.parses += 1;
        let result = parse(text, &self.settings);
        let errors = result.errors().count();
        let warnings = result.warnings().count();
        self.diagnostics = result.diagnostics;

        if errors > 0 {
            self.stats.rejected += 1;
            info!(errors, warnings, "CSS has errors, keeping previous settings");
            return ParseOutcome::Rejected { errors };
        }

        let fields = result.updated.len();
        result.updated.apply(&mut self.settings);
        self.stats.applied += 1;
        debug!(fields, warnings, "Applied settings from CSS");
        self.persist();
        self.notify();
        ParseOutcome::Applied { fields }
    }

    fn persist(&self) {
        if let Some(store) = &self.store {
            if let Err(err) = store.save(&self.settings) {
                warn!(%err, "Failed to persist theme settings");
            }
        }
    }

    fn notify(&mut self) {
        let settings = &self.settings;
        for observer in self.observers.iter_mut() {
            observer(settings);
        }
    }
}

impl Default for LiveSyncController {
    fn default() -> Self {
        Self::new(ThemeSettings::default(), SyncConfig::default())
    }
}

impl std::fmt::Debug for LiveSyncController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LiveSyncController")
            .field("settings", &self.settings)
            .field("pending_deadline", &self.pending.deadline())
            .field("observers", &self.observers.len())
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}
