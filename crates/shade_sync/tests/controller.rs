use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use pretty_assertions::assert_eq;
use shade_css::generate;
use shade_store::{MemoryStore, SettingsStore};
use shade_theme::{FieldAdvisory, SettingsError, SettingsField, ThemePreset, ThemeSettings, UnknownPreset};
use shade_sync::{
    LiveSyncController, ParseOutcome, SyncCommand, SyncConfig, SyncError, SyncOutcome,
};

const DEBOUNCE: Duration = Duration::from_millis(500);

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn css_with_radius(radius: i32) -> String {
    generate(&ThemeSettings {
        border_radius: radius,
        ..ThemeSettings::default()
    })
}

#[test]
fn rapid_edits_collapse_into_one_parse_of_the_final_text() {
    let mut sync = LiveSyncController::default();
    let start = Instant::now();

    for i in 0..5u64 {
        let at = start + ms(100 * i);
        assert_eq!(sync.poll(at), None);
        sync.on_css_text_edited(css_with_radius(i as i32 + 1), at);
    }

    assert_eq!(sync.next_deadline(), Some(start + ms(400) + DEBOUNCE));
    assert_eq!(sync.poll(start + ms(899)), None);
    assert_eq!(sync.stats().parses, 0);

    assert_eq!(
        sync.poll(start + ms(900)),
        Some(ParseOutcome::Applied { fields: 15 })
    );
    assert_eq!(sync.stats().parses, 1);
    assert_eq!(sync.settings().border_radius, 5);
    assert_eq!(sync.poll(start + ms(5000)), None);
    assert_eq!(sync.stats().parses, 1);
}

#[test]
fn css_text_is_stored_before_the_parse_runs() {
    let mut sync = LiveSyncController::default();
    let start = Instant::now();
    sync.on_css_text_edited("body { }", start);

    assert_eq!(sync.css_text(), "body { }");
    assert!(sync.is_parse_pending());
    assert_eq!(sync.settings(), &ThemeSettings::default());
}

#[test]
fn parse_errors_leave_settings_untouched() {
    let mut sync = LiveSyncController::default();
    let start = Instant::now();
    let broken = css_with_radius(3).replace("--border-radius: 3px;", "--border-radius: abc;")
        + "\n.unclosed {";

    sync.on_css_text_edited(broken.clone(), start);
    assert_eq!(
        sync.poll(start + DEBOUNCE),
        Some(ParseOutcome::Rejected { errors: 2 })
    );

    assert_eq!(sync.settings(), &ThemeSettings::default());
    assert_eq!(sync.css_text(), broken);
    assert_eq!(sync.diagnostics().errors().count(), 2);
    assert_eq!(sync.stats().rejected, 1);
    assert_eq!(sync.stats().applied, 0);
}

#[test]
fn warnings_do_not_block_the_update() {
    let mut sync = LiveSyncController::default();
    let start = Instant::now();
    let css = ":root {\n  --link-color: tomato;\n}\n";

    sync.on_css_text_edited(css, start);
    assert_eq!(
        sync.poll(start + DEBOUNCE),
        Some(ParseOutcome::Applied { fields: 1 })
    );
    assert_eq!(sync.settings().link_color, "tomato");
    assert_eq!(
        sync.diagnostics().warning_messages(),
        vec!["Unusual color value for link-color: tomato".to_string()]
    );
    // The hand-edited text is kept, not regenerated
    assert_eq!(sync.css_text(), css);
}

#[test]
fn preset_keeps_non_colour_fields() {
    let mut sync = LiveSyncController::new(
        ThemeSettings {
            border_radius: 12,
            ..ThemeSettings::default()
        },
        SyncConfig::default(),
    );

    sync.apply_preset(ThemePreset::SunsetGlow);

    assert_eq!(sync.settings().primary_color, "#f97316");
    assert_eq!(sync.settings().border_radius, 12);
    assert!(sync.css_text().contains("--primary-color: #f97316;"));
    assert!(sync.css_text().contains("--border-radius: 12px;"));
}

#[test]
fn unknown_preset_key_is_a_distinct_error() {
    let mut sync = LiveSyncController::default();
    assert_eq!(
        sync.apply_preset_key("plaid"),
        Err(SyncError::Preset(UnknownPreset("plaid".to_string())))
    );
    assert_eq!(sync.stats().settings_updates, 0);
}

#[test]
fn settings_change_cancels_pending_parse() {
    let mut sync = LiveSyncController::default();
    let start = Instant::now();
    sync.on_css_text_edited(css_with_radius(20), start);

    sync.set_field(SettingsField::ButtonPadding, "18").unwrap();

    assert!(!sync.is_parse_pending());
    assert_eq!(sync.poll(start + DEBOUNCE), None);
    assert_eq!(sync.settings().border_radius, 8);
    assert_eq!(sync.settings().button_padding, 18);
    assert_eq!(sync.css_text(), generate(sync.settings()));
}

#[test]
fn auto_fix_regenerates_and_clears_diagnostics() {
    let mut sync = LiveSyncController::default();
    let start = Instant::now();
    sync.on_css_text_edited(":root { --border-radius: nope; }", start);
    sync.poll(start + DEBOUNCE);
    assert!(sync.diagnostics().has_errors());

    sync.on_css_text_edited("garbage {", start + ms(600));
    assert_eq!(sync.dispatch(SyncCommand::AutoFix), Ok(SyncOutcome::Regenerated));

    assert!(sync.diagnostics().is_empty());
    assert!(!sync.is_parse_pending());
    assert_eq!(sync.css_text(), generate(&ThemeSettings::default()));
}

#[test]
fn reset_restores_defaults() {
    let mut sync = LiveSyncController::default();
    sync.apply_preset(ThemePreset::HotPink);
    sync.set_field(SettingsField::FontFamily, "Teko").unwrap();

    sync.reset_to_defaults();

    assert_eq!(sync.settings(), &ThemeSettings::default());
    assert_eq!(sync.css_text(), generate(&ThemeSettings::default()));
}

#[test]
fn decimal_radius_does_not_block_the_rest_of_the_edit() {
    let mut sync = LiveSyncController::default();
    sync.on_css_text_edited(
        ":root { --border-radius: 12.5px; --primary-color: #123456; }",
        Instant::now(),
    );

    assert_eq!(sync.flush(), Some(ParseOutcome::Applied { fields: 2 }));
    assert_eq!(sync.settings().border_radius, 12);
    assert_eq!(sync.settings().primary_color, "#123456");
    assert!(!sync.diagnostics().has_errors());
}

#[test]
fn bad_numeric_field_is_rejected() {
    let mut sync = LiveSyncController::default();
    let err = sync.set_field(SettingsField::ShadowIntensity, "lots").unwrap_err();
    assert_eq!(
        err,
        SyncError::Settings(SettingsError::InvalidNumber {
            field: SettingsField::ShadowIntensity,
            value: "lots".to_string(),
        })
    );
    assert_eq!(sync.settings().shadow_intensity, 40);
    assert_eq!(sync.stats().settings_updates, 0);
}

#[test]
fn unusual_colour_is_applied_with_advisory() {
    let mut sync = LiveSyncController::default();
    let advisory = sync.set_field(SettingsField::HeaderBg, "navy").unwrap();
    assert_eq!(
        advisory,
        Some(FieldAdvisory::UnusualColor {
            field: SettingsField::HeaderBg,
            value: "navy".to_string(),
        })
    );
    assert_eq!(sync.settings().header_bg, "navy");
}

#[test]
fn every_change_is_persisted() {
    let store = MemoryStore::new();
    let mut sync = LiveSyncController::from_store(Box::new(store.clone()), SyncConfig::default());
    assert_eq!(sync.settings(), &ThemeSettings::default());

    sync.apply_preset(ThemePreset::MintCream);
    assert_eq!(store.load().unwrap().primary_color, "#14b8a6");

    let start = Instant::now();
    sync.on_css_text_edited(":root { --border-radius: 3px; }", start);
    assert_eq!(store.load().unwrap().border_radius, 8);
    sync.flush();
    assert_eq!(store.load().unwrap().border_radius, 3);

    let restored = LiveSyncController::from_store(Box::new(store), SyncConfig::default());
    assert_eq!(restored.settings(), sync.settings());
}

#[test]
fn corrupt_store_starts_from_defaults() {
    let store = MemoryStore::new();
    store.set_raw_entry("{ nope").unwrap();
    let sync = LiveSyncController::from_store(Box::new(store), SyncConfig::default());
    assert_eq!(sync.settings(), &ThemeSettings::default());
}

#[test]
fn observers_see_every_settings_change() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut sync = LiveSyncController::default();
    let sink = Rc::clone(&seen);
    sync.subscribe(move |settings| sink.borrow_mut().push(settings.border_radius));

    sync.set_field(SettingsField::BorderRadius, "4px").unwrap();
    let start = Instant::now();
    sync.on_css_text_edited(":root { --border-radius: 6px; }", start);
    sync.poll(start + DEBOUNCE);
    sync.on_css_text_edited(":root { --border-radius: x; }", start + ms(600));
    sync.flush();

    assert_eq!(*seen.borrow(), vec![4, 6]);
}

#[test]
fn dispatch_drives_the_whole_cycle() {
    let mut sync = LiveSyncController::new(
        ThemeSettings::default(),
        SyncConfig {
            debounce: ms(100),
        },
    );
    let start = Instant::now();

    assert_eq!(
        sync.dispatch(SyncCommand::EditCss {
            text: ":root { --primary-color: #000; }".to_string(),
            at: start,
        }),
        Ok(SyncOutcome::ParseScheduled {
            deadline: start + ms(100)
        })
    );
    assert_eq!(
        sync.dispatch(SyncCommand::Tick(start + ms(50))),
        Ok(SyncOutcome::Idle)
    );
    assert_eq!(
        sync.dispatch(SyncCommand::Tick(start + ms(100))),
        Ok(SyncOutcome::Parsed(ParseOutcome::Applied { fields: 1 }))
    );
    assert_eq!(sync.settings().primary_color, "#000");

    assert_eq!(
        sync.dispatch(SyncCommand::ApplyPreset(ThemePreset::DEFAULT)),
        Ok(SyncOutcome::SettingsUpdated { advisory: None })
    );
    assert_eq!(sync.dispatch(SyncCommand::Flush), Ok(SyncOutcome::Idle));
    assert!(sync
        .dispatch(SyncCommand::SetField {
            field: SettingsField::BorderRadius,
            raw: "wide".to_string(),
        })
        .is_err());
}
