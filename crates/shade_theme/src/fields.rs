//! Field keys for the settings model
//!
//! Every [`ThemeSettings`](crate::ThemeSettings) field has a stable CSS custom
//! property name. The generator emits these names and the parser maps them
//! back, so renaming a property breaks round-tripping of existing stylesheets.

use std::fmt::{Display, Formatter};

/// How a field's value is encoded in CSS
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Free-form colour string (`#RGB`, `#RRGGBB`, `rgb(...)`)
    Color,
    /// Integer pixel length, emitted with a `px` suffix
    Pixels,
    /// Integer percentage, emitted with a `%` suffix
    Percent,
    /// Font family name, emitted quoted with a system fallback stack
    Font,
}

impl FieldKind {
    /// Unit suffix appended when the value is written to CSS
    pub fn unit(self) -> &'static str {
        match self {
            FieldKind::Pixels => "px",
            FieldKind::Percent => "%",
            FieldKind::Color | FieldKind::Font => "",
        }
    }

    /// Whether values of this kind are integers
    pub fn is_numeric(self) -> bool {
        matches!(self, FieldKind::Pixels | FieldKind::Percent)
    }
}

/// Semantic key for each settings field
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SettingsField {
    // Brand colours
    PrimaryColor,
    SecondaryColor,

    // Text colours
    TextColor,
    HeadingColor,
    LinkColor,
    LinkHoverColor,
    MutedTextColor,

    // Surface colours
    BackgroundColor,
    HeaderBg,
    FooterBg,
    FooterText,

    // Shape and spacing
    BorderRadius,
    ButtonPadding,
    ShadowIntensity,

    // Typography
    FontFamily,
}

impl SettingsField {
    /// All fields, in the order they appear in the generated `:root` block
    pub const ALL: [SettingsField; 15] = [
        SettingsField::PrimaryColor,
        SettingsField::SecondaryColor,
        SettingsField::TextColor,
        SettingsField::HeadingColor,
        SettingsField::LinkColor,
        SettingsField::LinkHoverColor,
        SettingsField::MutedTextColor,
        SettingsField::BackgroundColor,
        SettingsField::HeaderBg,
        SettingsField::FooterBg,
        SettingsField::FooterText,
        SettingsField::BorderRadius,
        SettingsField::ButtonPadding,
        SettingsField::ShadowIntensity,
        SettingsField::FontFamily,
    ];

    /// The colour fields, which are the ones carried by presets
    pub const COLORS: [SettingsField; 11] = [
        SettingsField::PrimaryColor,
        SettingsField::SecondaryColor,
        SettingsField::TextColor,
        SettingsField::HeadingColor,
        SettingsField::LinkColor,
        SettingsField::LinkHoverColor,
        SettingsField::MutedTextColor,
        SettingsField::BackgroundColor,
        SettingsField::HeaderBg,
        SettingsField::FooterBg,
        SettingsField::FooterText,
    ];

    /// Custom property name without the leading `--`
    pub fn property(self) -> &'static str {
        match self {
            SettingsField::PrimaryColor => "primary-color",
            SettingsField::SecondaryColor => "secondary-color",
            SettingsField::TextColor => "text-color",
            SettingsField::HeadingColor => "heading-color",
            SettingsField::LinkColor => "link-color",
            SettingsField::LinkHoverColor => "link-hover-color",
            SettingsField::MutedTextColor => "muted-text-color",
            SettingsField::BackgroundColor => "background-color",
            SettingsField::HeaderBg => "header-bg",
            SettingsField::FooterBg => "footer-bg",
            SettingsField::FooterText => "footer-text",
            SettingsField::BorderRadius => "border-radius",
            SettingsField::ButtonPadding => "button-padding",
            SettingsField::ShadowIntensity => "shadow-intensity",
            SettingsField::FontFamily => "font-family",
        }
    }

    /// camelCase key used in persisted JSON
    pub fn key(self) -> &'static str {
        match self {
            SettingsField::PrimaryColor => "primaryColor",
            SettingsField::SecondaryColor => "secondaryColor",
            SettingsField::TextColor => "textColor",
            SettingsField::HeadingColor => "headingColor",
            SettingsField::LinkColor => "linkColor",
            SettingsField::LinkHoverColor => "linkHoverColor",
            SettingsField::MutedTextColor => "mutedTextColor",
            SettingsField::BackgroundColor => "backgroundColor",
            SettingsField::HeaderBg => "headerBg",
            SettingsField::FooterBg => "footerBg",
            SettingsField::FooterText => "footerText",
            SettingsField::BorderRadius => "borderRadius",
            SettingsField::ButtonPadding => "buttonPadding",
            SettingsField::ShadowIntensity => "shadowIntensity",
            SettingsField::FontFamily => "fontFamily",
        }
    }

    /// Value encoding of this field
    pub fn kind(self) -> FieldKind {
        match self {
            SettingsField::BorderRadius | SettingsField::ButtonPadding => FieldKind::Pixels,
            SettingsField::ShadowIntensity => FieldKind::Percent,
            SettingsField::FontFamily => FieldKind::Font,
            _ => FieldKind::Color,
        }
    }

    /// Inclusive slider range for numeric fields
    pub fn domain(self) -> Option<(i32, i32)> {
        match self {
            SettingsField::BorderRadius => Some((0, 24)),
            SettingsField::ButtonPadding => Some((8, 24)),
            SettingsField::ShadowIntensity => Some((0, 100)),
            _ => None,
        }
    }

    /// Look up a field by custom property name (with or without `--`)
    pub fn from_property(name: &str) -> Option<Self> {
        let name = name.strip_prefix("--").unwrap_or(name);
        Self::ALL.into_iter().find(|f| f.property() == name)
    }

    /// Look up a field by its property name or camelCase key
    pub fn from_name(name: &str) -> Option<Self> {
        Self::from_property(name).or_else(|| Self::ALL.into_iter().find(|f| f.key() == name))
    }
}

impl Display for SettingsField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "--{}", self.property())
    }
}
