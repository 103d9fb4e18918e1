use std::collections::HashSet;

use shade_theme::{
    is_recognized_color, SettingsField, ThemePreset, ThemeSettings, UnknownPreset,
};

#[test]
fn preset_catalog_starts_with_dark_blue() {
    let all = ThemePreset::all();
    assert_eq!(all.len(), 30);
    assert_eq!(all[0], ThemePreset::DEFAULT);
    assert_eq!(all[0].key(), "default");
    assert_eq!(all[0].display_name(), "Dark Blue");
}

#[test]
fn preset_keys_and_names_are_unique() {
    let keys: HashSet<_> = ThemePreset::all().iter().map(|p| p.key()).collect();
    let names: HashSet<_> = ThemePreset::all().iter().map(|p| p.display_name()).collect();
    assert_eq!(keys.len(), ThemePreset::all().len());
    assert_eq!(names.len(), ThemePreset::all().len());
}

#[test]
fn every_preset_key_round_trips() {
    for preset in ThemePreset::all() {
        assert_eq!(ThemePreset::from_key(preset.key()), Ok(*preset));
    }
}

#[test]
fn unknown_preset_is_an_error() {
    assert_eq!(
        ThemePreset::from_key("doesNotExist"),
        Err(UnknownPreset("doesNotExist".to_string()))
    );
}

#[test]
fn preset_colours_are_all_hex() {
    for preset in ThemePreset::all() {
        let colors = preset.colors();
        for field in SettingsField::COLORS {
            let color = colors.get(field).unwrap();
            assert!(
                is_recognized_color(color),
                "Preset {:?} has unusual {}: {}",
                preset,
                field,
                color
            );
        }
    }
}

#[test]
fn preset_patch_holds_only_colours() {
    for preset in ThemePreset::all() {
        let patch = preset.to_patch();
        assert_eq!(patch.len(), SettingsField::COLORS.len());
        assert!(!patch.contains(SettingsField::BorderRadius));
        assert!(!patch.contains(SettingsField::FontFamily));
    }
}

#[test]
fn applying_preset_preserves_non_colour_fields() {
    let mut settings = ThemeSettings {
        border_radius: 12,
        button_padding: 20,
        shadow_intensity: 90,
        font_family: "Orbitron".to_string(),
        ..ThemeSettings::default()
    };

    ThemePreset::NeonNights.apply_to(&mut settings);

    assert_eq!(settings.primary_color, "#00ff88");
    assert_eq!(settings.background_color, "#0a0e27");
    assert_eq!(settings.border_radius, 12);
    assert_eq!(settings.button_padding, 20);
    assert_eq!(settings.shadow_intensity, 90);
    assert_eq!(settings.font_family, "Orbitron");
}

#[test]
fn display_uses_display_name() {
    assert_eq!(ThemePreset::AquaMarine.to_string(), "Aqua Marine");
}
