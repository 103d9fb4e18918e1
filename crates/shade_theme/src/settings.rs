//! The canonical theme settings value
//!
//! [`ThemeSettings`] is a plain value: every update produces a new value (or a
//! mutation under `&mut`), and every field always holds something. Partial
//! updates travel as a [`SettingsPatch`] and are merged shallowly.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::is_recognized_color;
use crate::error::SettingsError;
use crate::fields::{FieldKind, SettingsField};
use crate::fonts::family_from_value;
use crate::presets::ThemePreset;

/// Default corner radius in pixels
pub const DEFAULT_BORDER_RADIUS: i32 = 8;
/// Default vertical button padding in pixels
pub const DEFAULT_BUTTON_PADDING: i32 = 14;
/// Default shadow intensity in percent
pub const DEFAULT_SHADOW_INTENSITY: i32 = 40;
/// Default font family
pub const DEFAULT_FONT_FAMILY: &str = "Inter";

/// Structured design tokens driving both the generated CSS and the preview
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSettings {
    pub primary_color: String,
    pub secondary_color: String,
    pub text_color: String,
    pub heading_color: String,
    pub link_color: String,
    pub link_hover_color: String,
    pub muted_text_color: String,
    pub background_color: String,
    pub header_bg: String,
    pub footer_bg: String,
    pub footer_text: String,
    pub border_radius: i32,
    pub button_padding: i32,
    pub shadow_intensity: i32,
    pub font_family: String,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        let mut settings = Self {
            primary_color: String::new(),
            secondary_color: String::new(),
            text_color: String::new(),
            heading_color: String::new(),
            link_color: String::new(),
            link_hover_color: String::new(),
            muted_text_color: String::new(),
            background_color: String::new(),
            header_bg: String::new(),
            footer_bg: String::new(),
            footer_text: String::new(),
            border_radius: DEFAULT_BORDER_RADIUS,
            button_padding: DEFAULT_BUTTON_PADDING,
            shadow_intensity: DEFAULT_SHADOW_INTENSITY,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
        };
        ThemePreset::DEFAULT.apply_to(&mut settings);
        settings
    }
}

impl ThemeSettings {
    /// Read a field as a [`FieldValue`]
    pub fn value(&self, field: SettingsField) -> FieldValue {
        match field {
            SettingsField::BorderRadius => FieldValue::Integer(self.border_radius),
            SettingsField::ButtonPadding => FieldValue::Integer(self.button_padding),
            SettingsField::ShadowIntensity => FieldValue::Integer(self.shadow_intensity),
            _ => FieldValue::Text(self.text_slot(field).clone()),
        }
    }

    /// Borrow a colour or font field
    ///
    /// Numeric fields have no string slot; asking for one returns the font.
    fn text_slot(&self, field: SettingsField) -> &String {
        match field {
            SettingsField::PrimaryColor => &self.primary_color,
            SettingsField::SecondaryColor => &self.secondary_color,
            SettingsField::TextColor => &self.text_color,
            SettingsField::HeadingColor => &self.heading_color,
            SettingsField::LinkColor => &self.link_color,
            SettingsField::LinkHoverColor => &self.link_hover_color,
            SettingsField::MutedTextColor => &self.muted_text_color,
            SettingsField::BackgroundColor => &self.background_color,
            SettingsField::HeaderBg => &self.header_bg,
            SettingsField::FooterBg => &self.footer_bg,
            SettingsField::FooterText => &self.footer_text,
            _ => &self.font_family,
        }
    }

    fn text_slot_mut(&mut self, field: SettingsField) -> &mut String {
        match field {
            SettingsField::PrimaryColor => &mut self.primary_color,
            SettingsField::SecondaryColor => &mut self.secondary_color,
            SettingsField::TextColor => &mut self.text_color,
            SettingsField::HeadingColor => &mut self.heading_color,
            SettingsField::LinkColor => &mut self.link_color,
            SettingsField::LinkHoverColor => &mut self.link_hover_color,
            SettingsField::MutedTextColor => &mut self.muted_text_color,
            SettingsField::BackgroundColor => &mut self.background_color,
            SettingsField::HeaderBg => &mut self.header_bg,
            SettingsField::FooterBg => &mut self.footer_bg,
            SettingsField::FooterText => &mut self.footer_text,
            _ => &mut self.font_family,
        }
    }

    fn int_slot_mut(&mut self, field: SettingsField) -> Option<&mut i32> {
        match field {
            SettingsField::BorderRadius => Some(&mut self.border_radius),
            SettingsField::ButtonPadding => Some(&mut self.button_padding),
            SettingsField::ShadowIntensity => Some(&mut self.shadow_intensity),
            _ => None,
        }
    }

    /// Store a value into a field
    ///
    /// A textual value for a numeric field is decoded first; if that fails
    /// the field keeps its old value and the error is returned.
    pub fn set_value(&mut self, field: SettingsField, value: FieldValue) -> Result<(), SettingsError> {
        match (self.int_slot_mut(field), value) {
            (Some(slot), FieldValue::Integer(n)) => *slot = n,
            (Some(slot), FieldValue::Text(raw)) => {
                *slot = decode_integer(field, &raw)?;
            }
            (None, FieldValue::Text(text)) => *self.text_slot_mut(field) = text,
            (None, FieldValue::Integer(n)) => *self.text_slot_mut(field) = n.to_string(),
        }
        Ok(())
    }

    /// Snapshot of every field as a patch
    pub fn to_patch(&self) -> SettingsPatch {
        let mut patch = SettingsPatch::new();
        for field in SettingsField::ALL {
            patch.set(field, self.value(field));
        }
        patch
    }

    /// Build settings from persisted JSON, falling back per field
    ///
    /// Unknown keys are ignored. Missing keys, or keys whose value has the
    /// wrong shape, keep their default. Anything other than a JSON object
    /// yields the defaults.
    pub fn from_json_over_defaults(json: &serde_json::Value) -> Self {
        let mut settings = Self::default();
        let Some(object) = json.as_object() else {
            debug!("Persisted settings are not a JSON object, using defaults");
            return settings;
        };

        for field in SettingsField::ALL {
            let Some(raw) = object.get(field.key()) else {
                continue;
            };
            let value = match (field.kind().is_numeric(), raw) {
                (true, serde_json::Value::Number(n)) => n
                    .as_i64()
                    .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
                    .and_then(|n| i32::try_from(n).ok())
                    .map(FieldValue::Integer),
                (true, serde_json::Value::String(s)) => {
                    decode_integer(field, s).ok().map(FieldValue::Integer)
                }
                (false, serde_json::Value::String(s)) => Some(FieldValue::Text(s.clone())),
                _ => None,
            };
            match value {
                Some(value) => {
                    // Both arms above produce values that cannot fail to store.
                    let _ = settings.set_value(field, value);
                }
                None => debug!(key = field.key(), "Ignoring malformed persisted field"),
            }
        }
        settings
    }
}

/// A single field value
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
    /// Colour or font family
    Text(String),
    /// Pixels or percent, unit already stripped
    Integer(i32),
}

impl FieldValue {
    /// Decode raw text (a CSS value or a form input) for `field`
    ///
    /// - numeric fields: after `!important` is stripped, the leading
    ///   optionally signed run of digits is taken and the rest ignored
    ///   (`12.5px` is 12); no digits at all is an error
    /// - font: a quoted name, else the text before the first comma
    /// - colours: taken verbatim (trimmed)
    pub fn decode(field: SettingsField, raw: &str) -> Result<Self, SettingsError> {
        match field.kind() {
            FieldKind::Pixels | FieldKind::Percent => decode_integer(field, raw).map(FieldValue::Integer),
            FieldKind::Font => Ok(FieldValue::Text(family_from_value(strip_important(raw)))),
            FieldKind::Color => Ok(FieldValue::Text(strip_important(raw).to_string())),
        }
    }

    /// Advisory check for a decoded value; `None` when nothing is unusual
    pub fn advisory(&self, field: SettingsField) -> Option<FieldAdvisory> {
        match (field.kind(), self) {
            (FieldKind::Color, FieldValue::Text(color)) if !is_recognized_color(color) => {
                Some(FieldAdvisory::UnusualColor {
                    field,
                    value: color.clone(),
                })
            }
            (_, FieldValue::Integer(n)) => {
                let (min, max) = field.domain()?;
                (*n < min || *n > max).then_some(FieldAdvisory::OutOfRange {
                    field,
                    value: *n,
                    min,
                    max,
                })
            }
            _ => None,
        }
    }
}

impl Display for FieldValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Text(text) => f.write_str(text),
            FieldValue::Integer(n) => write!(f, "{n}"),
        }
    }
}

/// Soft problem with a value that is still applied
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldAdvisory {
    /// Colour is not hex3, hex6, or `rgb`-prefixed
    UnusualColor { field: SettingsField, value: String },
    /// Integer lies outside the slider range for the field
    OutOfRange {
        field: SettingsField,
        value: i32,
        min: i32,
        max: i32,
    },
}

impl Display for FieldAdvisory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldAdvisory::UnusualColor { field, value } => {
                write!(f, "Unusual color value for {}: {}", field.property(), value)
            }
            FieldAdvisory::OutOfRange {
                field,
                value,
                min,
                max,
            } => write!(
                f,
                "Value {} for {} is outside the usual range {}-{}",
                value,
                field.property(),
                min,
                max
            ),
        }
    }
}

fn strip_important(raw: &str) -> &str {
    let raw = raw.trim();
    raw.strip_suffix("!important").map(str::trim_end).unwrap_or(raw)
}

fn decode_integer(field: SettingsField, raw: &str) -> Result<i32, SettingsError> {
    let invalid = || SettingsError::InvalidNumber {
        field,
        value: raw.trim().to_string(),
    };
    let value = strip_important(raw);
    let unsigned = value.trim_start_matches(['-', '+']);
    if value.len() - unsigned.len() > 1 {
        return Err(invalid());
    }
    let digits = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .map_or(unsigned, |end| &unsigned[..end]);
    if digits.is_empty() {
        return Err(invalid());
    }

    // Leading integer only: "12.5px" reads as 12
    let signed = &value[..value.len() - unsigned.len() + digits.len()];
    signed.parse::<i32>().map_err(|_| invalid())
}

/// Partial settings update: only the fields present are merged
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SettingsPatch {
    values: BTreeMap<SettingsField, FieldValue>,
}

impl SettingsPatch {
    /// Create an empty patch
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing any earlier value for it
    pub fn set(&mut self, field: SettingsField, value: FieldValue) {
        self.values.insert(field, value);
    }

    /// Drop `field` from the patch
    pub fn remove(&mut self, field: SettingsField) -> Option<FieldValue> {
        self.values.remove(&field)
    }

    /// Value for `field`, if present
    pub fn get(&self, field: SettingsField) -> Option<&FieldValue> {
        self.values.get(&field)
    }

    /// Whether `field` is present
    pub fn contains(&self, field: SettingsField) -> bool {
        self.values.contains_key(&field)
    }

    /// Number of fields present
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no field is present
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over the present fields in `SettingsField` order
    pub fn iter(&self) -> impl Iterator<Item = (SettingsField, &FieldValue)> {
        self.values.iter().map(|(field, value)| (*field, value))
    }

    /// Shallow-merge into `settings`; absent fields are untouched
    ///
    /// Values that cannot be stored are skipped and logged.
    pub fn apply(&self, settings: &mut ThemeSettings) {
        for (field, value) in self.iter() {
            if let Err(err) = settings.set_value(field, value.clone()) {
                debug!(%err, "Skipping patch value that does not fit its field");
            }
        }
    }

    /// Return a merged copy of `settings`
    pub fn merged(&self, settings: &ThemeSettings) -> ThemeSettings {
        let mut merged = settings.clone();
        self.apply(&mut merged);
        merged
    }
}

impl FromIterator<(SettingsField, FieldValue)> for SettingsPatch {
    fn from_iter<I: IntoIterator<Item = (SettingsField, FieldValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
