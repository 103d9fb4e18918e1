//! Shade Theme Model
//!
//! The structured side of the storefront customizer: the settings value that
//! both the generated stylesheet and the preview are derived from.
//!
//! # Overview
//!
//! - **Settings**: [`ThemeSettings`], eleven colours, three integer tokens and
//!   a font family. Every field always has a value.
//! - **Fields**: [`SettingsField`] names each field and fixes its CSS custom
//!   property (`--primary-color`, `--border-radius`, ...).
//! - **Patches**: [`SettingsPatch`] is a partial update merged shallowly.
//! - **Presets**: [`ThemePreset`] bundles of colours applied in bulk.
//!
//! # Quick Start
//!
//! ```rust
//! use shade_theme::{FieldValue, SettingsField, ThemePreset, ThemeSettings};
//!
//! let mut settings = ThemeSettings::default();
//! settings.border_radius = 12;
//!
//! ThemePreset::from_key("oceanBreeze").unwrap().apply_to(&mut settings);
//! assert_eq!(settings.primary_color, "#06b6d4");
//! assert_eq!(settings.border_radius, 12);
//!
//! let padding = FieldValue::decode(SettingsField::ButtonPadding, "18px").unwrap();
//! assert_eq!(padding, FieldValue::Integer(18));
//! ```

pub mod color;
pub mod error;
pub mod fields;
pub mod fonts;
pub mod presets;
pub mod settings;

pub use color::{is_recognized_color, with_alpha};
pub use error::{SettingsError, UnknownPreset};
pub use fields::{FieldKind, SettingsField};
pub use fonts::{family_from_value, is_known_font, FontOption, FONT_FALLBACK_STACK, FONT_OPTIONS};
pub use presets::{PresetColors, ThemePreset};
pub use settings::{
    FieldAdvisory, FieldValue, SettingsPatch, ThemeSettings, DEFAULT_BORDER_RADIUS,
    DEFAULT_BUTTON_PADDING, DEFAULT_FONT_FAMILY, DEFAULT_SHADOW_INTENSITY,
};
