//! Built-in colour presets
//!
//! A preset carries only the colour fields plus a label. Applying one merges
//! those colours into the live settings and leaves radius, padding, shadow and
//! font alone.

use std::fmt::{Display, Formatter};

use crate::error::UnknownPreset;
use crate::fields::SettingsField;
use crate::settings::{FieldValue, SettingsPatch, ThemeSettings};

/// Built-in preset catalog, in display order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThemePreset {
    DarkBlue,
    VibrantPurple,
    OceanBreeze,
    SunsetGlow,
    ForestFresh,
    CherryPop,
    RoyalGold,
    MintCream,
    ElectricBlue,
    HotPink,
    NeonNights,
    CoralReef,
    LavenderDream,
    CitrusBurst,
    MidnightPurple,
    RoseGold,
    EmeraldForest,
    CrimsonFire,
    ArcticBlue,
    SandyBeach,
    BubblegumPink,
    TropicalSunset,
    TurquoiseDream,
    GalaxyPurple,
    LimeLight,
    Peachy,
    SkyBlue,
    BerryBlast,
    GoldRush,
    AquaMarine,
}

/// The eleven colours of a preset
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PresetColors {
    pub primary_color: &'static str,
    pub secondary_color: &'static str,
    pub text_color: &'static str,
    pub heading_color: &'static str,
    pub link_color: &'static str,
    pub link_hover_color: &'static str,
    pub muted_text_color: &'static str,
    pub background_color: &'static str,
    pub header_bg: &'static str,
    pub footer_bg: &'static str,
    pub footer_text: &'static str,
}

impl PresetColors {
    /// Colour for one of the colour fields; `None` for non-colour fields
    pub fn get(&self, field: SettingsField) -> Option<&'static str> {
        let color = match field {
            SettingsField::PrimaryColor => self.primary_color,
            SettingsField::SecondaryColor => self.secondary_color,
            SettingsField::TextColor => self.text_color,
            SettingsField::HeadingColor => self.heading_color,
            SettingsField::LinkColor => self.link_color,
            SettingsField::LinkHoverColor => self.link_hover_color,
            SettingsField::MutedTextColor => self.muted_text_color,
            SettingsField::BackgroundColor => self.background_color,
            SettingsField::HeaderBg => self.header_bg,
            SettingsField::FooterBg => self.footer_bg,
            SettingsField::FooterText => self.footer_text,
            _ => return None,
        };
        Some(color)
    }
}

impl ThemePreset {
    /// Preset applied by defaults and reset
    pub const DEFAULT: ThemePreset = ThemePreset::DarkBlue;

    /// Stable preset key for config and the command line
    pub fn key(self) -> &'static str {
        match self {
            Self::DarkBlue => "default",
            Self::VibrantPurple => "vibrantPurple",
            Self::OceanBreeze => "oceanBreeze",
            Self::SunsetGlow => "sunsetGlow",
            Self::ForestFresh => "forestFresh",
            Self::CherryPop => "cherryPop",
            Self::RoyalGold => "royalGold",
            Self::MintCream => "mintCream",
            Self::ElectricBlue => "electricBlue",
            Self::HotPink => "hotPink",
            Self::NeonNights => "neonNights",
            Self::CoralReef => "coralReef",
            Self::LavenderDream => "lavenderDream",
            Self::CitrusBurst => "citrusBurst",
            Self::MidnightPurple => "midnightPurple",
            Self::RoseGold => "roseGold",
            Self::EmeraldForest => "emeraldForest",
            Self::CrimsonFire => "crimsonFire",
            Self::ArcticBlue => "arcticBlue",
            Self::SandyBeach => "sandyBeach",
            Self::BubblegumPink => "bubblegumPink",
            Self::TropicalSunset => "tropicalSunset",
            Self::TurquoiseDream => "turquoiseDream",
            Self::GalaxyPurple => "galaxyPurple",
            Self::LimeLight => "limeLight",
            Self::Peachy => "peachy",
            Self::SkyBlue => "skyBlue",
            Self::BerryBlast => "berryBlast",
            Self::GoldRush => "goldRush",
            Self::AquaMarine => "aquaMarine",
        }
    }

    /// User-facing display name
    pub fn display_name(self) -> &'static str {
        match self {
            Self::DarkBlue => "Dark Blue",
            Self::VibrantPurple => "Vibrant Purple",
            Self::OceanBreeze => "Ocean Breeze",
            Self::SunsetGlow => "Sunset Glow",
            Self::ForestFresh => "Forest Fresh",
            Self::CherryPop => "Cherry Pop",
            Self::RoyalGold => "Royal Gold",
            Self::MintCream => "Mint Cream",
            Self::ElectricBlue => "Electric Blue",
            Self::HotPink => "Hot Pink",
            Self::NeonNights => "Neon Nights",
            Self::CoralReef => "Coral Reef",
            Self::LavenderDream => "Lavender Dream",
            Self::CitrusBurst => "Citrus Burst",
            Self::MidnightPurple => "Midnight Purple",
            Self::RoseGold => "Rose Gold",
            Self::EmeraldForest => "Emerald Forest",
            Self::CrimsonFire => "Crimson Fire",
            Self::ArcticBlue => "Arctic Blue",
            Self::SandyBeach => "Sandy Beach",
            Self::BubblegumPink => "Bubblegum Pink",
            Self::TropicalSunset => "Tropical Sunset",
            Self::TurquoiseDream => "Turquoise Dream",
            Self::GalaxyPurple => "Galaxy Purple",
            Self::LimeLight => "Lime Light",
            Self::Peachy => "Peachy",
            Self::SkyBlue => "Sky Blue",
            Self::BerryBlast => "Berry Blast",
            Self::GoldRush => "Gold Rush",
            Self::AquaMarine => "Aqua Marine",
        }
    }

    /// Full preset list
    pub fn all() -> &'static [ThemePreset] {
        const PRESETS: [ThemePreset; 30] = [
            ThemePreset::DarkBlue,
            ThemePreset::VibrantPurple,
            ThemePreset::OceanBreeze,
            ThemePreset::SunsetGlow,
            ThemePreset::ForestFresh,
            ThemePreset::CherryPop,
            ThemePreset::RoyalGold,
            ThemePreset::MintCream,
            ThemePreset::ElectricBlue,
            ThemePreset::HotPink,
            ThemePreset::NeonNights,
            ThemePreset::CoralReef,
            ThemePreset::LavenderDream,
            ThemePreset::CitrusBurst,
            ThemePreset::MidnightPurple,
            ThemePreset::RoseGold,
            ThemePreset::EmeraldForest,
            ThemePreset::CrimsonFire,
            ThemePreset::ArcticBlue,
            ThemePreset::SandyBeach,
            ThemePreset::BubblegumPink,
            ThemePreset::TropicalSunset,
            ThemePreset::TurquoiseDream,
            ThemePreset::GalaxyPurple,
            ThemePreset::LimeLight,
            ThemePreset::Peachy,
            ThemePreset::SkyBlue,
            ThemePreset::BerryBlast,
            ThemePreset::GoldRush,
            ThemePreset::AquaMarine,
        ];
        &PRESETS
    }

    /// Look up a preset by key
    pub fn from_key(key: &str) -> Result<Self, UnknownPreset> {
        Self::all()
            .iter()
            .copied()
            .find(|preset| preset.key() == key)
            .ok_or_else(|| UnknownPreset(key.to_string()))
    }

    /// The preset's colour palette
    pub fn colors(self) -> PresetColors {
        match self {
            Self::DarkBlue => PresetColors {
                primary_color: "#ffc600",
                secondary_color: "#0088ff",
                text_color: "#e1efff",
                heading_color: "#ffffff",
                link_color: "#0088ff",
                link_hover_color: "#ffc600",
                muted_text_color: "#8a9ab0",
                background_color: "#193549",
                header_bg: "#15232d",
                footer_bg: "#0d1a23",
                footer_text: "#e1efff",
            },
            Self::VibrantPurple => PresetColors {
                primary_color: "#a855f7",
                secondary_color: "#ec4899",
                text_color: "#1f2937",
                heading_color: "#111827",
                link_color: "#a855f7",
                link_hover_color: "#ec4899",
                muted_text_color: "#6b7280",
                background_color: "#faf5ff",
                header_bg: "#ffffff",
                footer_bg: "#7c3aed",
                footer_text: "#faf5ff",
            },
            Self::OceanBreeze => PresetColors {
                primary_color: "#06b6d4",
                secondary_color: "#3b82f6",
                text_color: "#0f172a",
                heading_color: "#020617",
                link_color: "#0ea5e9",
                link_hover_color: "#06b6d4",
                muted_text_color: "#64748b",
                background_color: "#f0fdff",
                header_bg: "#ffffff",
                footer_bg: "#0c4a6e",
                footer_text: "#e0f2fe",
            },
            Self::SunsetGlow => PresetColors {
                primary_color: "#f97316",
                secondary_color: "#ef4444",
                text_color: "#292524",
                heading_color: "#1c1917",
                link_color: "#ea580c",
                link_hover_color: "#f97316",
                muted_text_color: "#78716c",
                background_color: "#fff7ed",
                header_bg: "#ffffff",
                footer_bg: "#9a3412",
                footer_text: "#fff7ed",
            },
            Self::ForestFresh => PresetColors {
                primary_color: "#10b981",
                secondary_color: "#22c55e",
                text_color: "#1c1917",
                heading_color: "#0c0a09",
                link_color: "#059669",
                link_hover_color: "#10b981",
                muted_text_color: "#57534e",
                background_color: "#f0fdf4",
                header_bg: "#ffffff",
                footer_bg: "#065f46",
                footer_text: "#ecfdf5",
            },
            Self::CherryPop => PresetColors {
                primary_color: "#ff006e",
                secondary_color: "#fb5607",
                text_color: "#1a1423",
                heading_color: "#000000",
                link_color: "#ff006e",
                link_hover_color: "#fb5607",
                muted_text_color: "#6c757d",
                background_color: "#fff0f6",
                header_bg: "#ffffff",
                footer_bg: "#c9184a",
                footer_text: "#fff0f6",
            },
            Self::RoyalGold => PresetColors {
                primary_color: "#eab308",
                secondary_color: "#f59e0b",
                text_color: "#292524",
                heading_color: "#1c1917",
                link_color: "#ca8a04",
                link_hover_color: "#eab308",
                muted_text_color: "#78716c",
                background_color: "#fffbeb",
                header_bg: "#ffffff",
                footer_bg: "#713f12",
                footer_text: "#fef3c7",
            },
            Self::MintCream => PresetColors {
                primary_color: "#14b8a6",
                secondary_color: "#2dd4bf",
                text_color: "#134e4a",
                heading_color: "#042f2e",
                link_color: "#0f766e",
                link_hover_color: "#14b8a6",
                muted_text_color: "#5f7c78",
                background_color: "#f0fdfa",
                header_bg: "#ffffff",
                footer_bg: "#0f766e",
                footer_text: "#ccfbf1",
            },
            Self::ElectricBlue => PresetColors {
                primary_color: "#00d9ff",
                secondary_color: "#0099ff",
                text_color: "#0a1929",
                heading_color: "#000000",
                link_color: "#00b8d4",
                link_hover_color: "#00d9ff",
                muted_text_color: "#546e7a",
                background_color: "#e3f2fd",
                header_bg: "#ffffff",
                footer_bg: "#01579b",
                footer_text: "#e1f5fe",
            },
            Self::HotPink => PresetColors {
                primary_color: "#ff1493",
                secondary_color: "#ff69b4",
                text_color: "#1a0a14",
                heading_color: "#000000",
                link_color: "#c2185b",
                link_hover_color: "#ff1493",
                muted_text_color: "#6d4c5c",
                background_color: "#fce4ec",
                header_bg: "#ffffff",
                footer_bg: "#880e4f",
                footer_text: "#fce4ec",
            },
            Self::NeonNights => PresetColors {
                primary_color: "#00ff88",
                secondary_color: "#00ddff",
                text_color: "#e0e0e0",
                heading_color: "#ffffff",
                link_color: "#00ff88",
                link_hover_color: "#00ddff",
                muted_text_color: "#9e9e9e",
                background_color: "#0a0e27",
                header_bg: "#1a1f3a",
                footer_bg: "#000000",
                footer_text: "#e0e0e0",
            },
            Self::CoralReef => PresetColors {
                primary_color: "#ff6f61",
                secondary_color: "#26c6da",
                text_color: "#263238",
                heading_color: "#000a12",
                link_color: "#ff5722",
                link_hover_color: "#ff6f61",
                muted_text_color: "#607d8b",
                background_color: "#fff3e0",
                header_bg: "#ffffff",
                footer_bg: "#006064",
                footer_text: "#e0f7fa",
            },
            Self::LavenderDream => PresetColors {
                primary_color: "#b39ddb",
                secondary_color: "#ce93d8",
                text_color: "#4a148c",
                heading_color: "#311b92",
                link_color: "#9575cd",
                link_hover_color: "#b39ddb",
                muted_text_color: "#7e57c2",
                background_color: "#f3e5f5",
                header_bg: "#ffffff",
                footer_bg: "#6a1b9a",
                footer_text: "#f3e5f5",
            },
            Self::CitrusBurst => PresetColors {
                primary_color: "#ffd600",
                secondary_color: "#ff6f00",
                text_color: "#3e2723",
                heading_color: "#1b0000",
                link_color: "#f57f17",
                link_hover_color: "#ffd600",
                muted_text_color: "#6d4c41",
                background_color: "#fffde7",
                header_bg: "#ffffff",
                footer_bg: "#e65100",
                footer_text: "#fff8e1",
            },
            Self::MidnightPurple => PresetColors {
                primary_color: "#9c27b0",
                secondary_color: "#7b1fa2",
                text_color: "#f3e5f5",
                heading_color: "#ffffff",
                link_color: "#ba68c8",
                link_hover_color: "#ce93d8",
                muted_text_color: "#ce93d8",
                background_color: "#1a0033",
                header_bg: "#4a148c",
                footer_bg: "#000000",
                footer_text: "#f3e5f5",
            },
            Self::RoseGold => PresetColors {
                primary_color: "#e91e63",
                secondary_color: "#ff9800",
                text_color: "#3e2723",
                heading_color: "#1b0000",
                link_color: "#d81b60",
                link_hover_color: "#e91e63",
                muted_text_color: "#795548",
                background_color: "#fff8f0",
                header_bg: "#ffffff",
                footer_bg: "#bf360c",
                footer_text: "#fff3e0",
            },
            Self::EmeraldForest => PresetColors {
                primary_color: "#00c853",
                secondary_color: "#00e676",
                text_color: "#1b5e20",
                heading_color: "#0d3d13",
                link_color: "#00a152",
                link_hover_color: "#00c853",
                muted_text_color: "#558b2f",
                background_color: "#f1f8e9",
                header_bg: "#ffffff",
                footer_bg: "#1b5e20",
                footer_text: "#e8f5e9",
            },
            Self::CrimsonFire => PresetColors {
                primary_color: "#d32f2f",
                secondary_color: "#ff5722",
                text_color: "#1a1a1a",
                heading_color: "#000000",
                link_color: "#c62828",
                link_hover_color: "#d32f2f",
                muted_text_color: "#616161",
                background_color: "#ffebee",
                header_bg: "#ffffff",
                footer_bg: "#b71c1c",
                footer_text: "#ffcdd2",
            },
            Self::ArcticBlue => PresetColors {
                primary_color: "#29b6f6",
                secondary_color: "#4dd0e1",
                text_color: "#01579b",
                heading_color: "#0d47a1",
                link_color: "#0288d1",
                link_hover_color: "#29b6f6",
                muted_text_color: "#455a64",
                background_color: "#e1f5fe",
                header_bg: "#ffffff",
                footer_bg: "#01579b",
                footer_text: "#b3e5fc",
            },
            Self::SandyBeach => PresetColors {
                primary_color: "#ff9800",
                secondary_color: "#ffc107",
                text_color: "#3e2723",
                heading_color: "#1b0000",
                link_color: "#f57c00",
                link_hover_color: "#ff9800",
                muted_text_color: "#6d4c41",
                background_color: "#fff3e0",
                header_bg: "#ffffff",
                footer_bg: "#e65100",
                footer_text: "#ffe0b2",
            },
            Self::BubblegumPink => PresetColors {
                primary_color: "#ff69b4",
                secondary_color: "#ffb6c1",
                text_color: "#4a1942",
                heading_color: "#2d0a26",
                link_color: "#ff1493",
                link_hover_color: "#ff69b4",
                muted_text_color: "#8b4789",
                background_color: "#fff0f5",
                header_bg: "#ffffff",
                footer_bg: "#c71585",
                footer_text: "#ffe4e1",
            },
            Self::TropicalSunset => PresetColors {
                primary_color: "#ff6347",
                secondary_color: "#ffb347",
                text_color: "#2b1810",
                heading_color: "#1a0000",
                link_color: "#ff4500",
                link_hover_color: "#ff6347",
                muted_text_color: "#704214",
                background_color: "#fff5ee",
                header_bg: "#ffffff",
                footer_bg: "#d2691e",
                footer_text: "#ffdab9",
            },
            Self::TurquoiseDream => PresetColors {
                primary_color: "#40e0d0",
                secondary_color: "#00ced1",
                text_color: "#0a3d3d",
                heading_color: "#002626",
                link_color: "#20b2aa",
                link_hover_color: "#48d1cc",
                muted_text_color: "#5f8a8b",
                background_color: "#e0ffff",
                header_bg: "#ffffff",
                footer_bg: "#008b8b",
                footer_text: "#afeeee",
            },
            Self::GalaxyPurple => PresetColors {
                primary_color: "#9370db",
                secondary_color: "#8a2be2",
                text_color: "#1e1433",
                heading_color: "#0f0721",
                link_color: "#6a5acd",
                link_hover_color: "#9370db",
                muted_text_color: "#67567c",
                background_color: "#f5f0ff",
                header_bg: "#ffffff",
                footer_bg: "#4b0082",
                footer_text: "#e6e6fa",
            },
            Self::LimeLight => PresetColors {
                primary_color: "#32cd32",
                secondary_color: "#adff2f",
                text_color: "#1a3300",
                heading_color: "#0d1a00",
                link_color: "#228b22",
                link_hover_color: "#32cd32",
                muted_text_color: "#556b2f",
                background_color: "#f0fff0",
                header_bg: "#ffffff",
                footer_bg: "#006400",
                footer_text: "#98fb98",
            },
            Self::Peachy => PresetColors {
                primary_color: "#ffb347",
                secondary_color: "#ffc09f",
                text_color: "#4a2c1f",
                heading_color: "#2b1810",
                link_color: "#ff8c42",
                link_hover_color: "#ffb347",
                muted_text_color: "#8b6f47",
                background_color: "#fff5ee",
                header_bg: "#ffffff",
                footer_bg: "#cd853f",
                footer_text: "#ffdead",
            },
            Self::SkyBlue => PresetColors {
                primary_color: "#87ceeb",
                secondary_color: "#00bfff",
                text_color: "#0f3854",
                heading_color: "#001f3f",
                link_color: "#4682b4",
                link_hover_color: "#5f9ea0",
                muted_text_color: "#708090",
                background_color: "#f0f8ff",
                header_bg: "#ffffff",
                footer_bg: "#1e90ff",
                footer_text: "#b0e0e6",
            },
            Self::BerryBlast => PresetColors {
                primary_color: "#dc143c",
                secondary_color: "#ff1493",
                text_color: "#330011",
                heading_color: "#1a0008",
                link_color: "#c71585",
                link_hover_color: "#dc143c",
                muted_text_color: "#8b2252",
                background_color: "#fff0f5",
                header_bg: "#ffffff",
                footer_bg: "#8b0000",
                footer_text: "#ffe4e1",
            },
            Self::GoldRush => PresetColors {
                primary_color: "#ffd700",
                secondary_color: "#ffec8b",
                text_color: "#3d2b00",
                heading_color: "#1f1500",
                link_color: "#daa520",
                link_hover_color: "#ffd700",
                muted_text_color: "#8b7500",
                background_color: "#fffacd",
                header_bg: "#ffffff",
                footer_bg: "#b8860b",
                footer_text: "#fff8dc",
            },
            Self::AquaMarine => PresetColors {
                primary_color: "#7fffd4",
                secondary_color: "#66cdaa",
                text_color: "#0d3d33",
                heading_color: "#002620",
                link_color: "#2e8b57",
                link_hover_color: "#3cb371",
                muted_text_color: "#5f8575",
                background_color: "#f0ffff",
                header_bg: "#ffffff",
                footer_bg: "#008080",
                footer_text: "#afeeee",
            },
        }
    }

    /// Patch holding exactly the colour fields
    pub fn to_patch(self) -> SettingsPatch {
        let colors = self.colors();
        SettingsField::COLORS
            .into_iter()
            .filter_map(|field| {
                colors
                    .get(field)
                    .map(|color| (field, FieldValue::Text(color.to_string())))
            })
            .collect()
    }

    /// Merge the colours into `settings`
    pub fn apply_to(self, settings: &mut ThemeSettings) {
        self.to_patch().apply(settings);
    }
}

impl Display for ThemePreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
