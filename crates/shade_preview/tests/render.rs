use pretty_assertions::assert_eq;
use shade_preview::{render_page, render_preview, ContentOverrides, PreviewPage, Viewport};
use shade_theme::{ThemePreset, ThemeSettings};

fn home(settings: &ThemeSettings) -> shade_preview::PreviewNode {
    render_preview(settings, Viewport::Desktop, &ContentOverrides::default())
}

#[test]
fn frame_is_constrained_to_the_viewport() {
    let settings = ThemeSettings::default();
    for (viewport, width) in [
        (Viewport::Desktop, "100%"),
        (Viewport::Tablet, "768px"),
        (Viewport::Mobile, "375px"),
    ] {
        let frame = render_preview(&settings, viewport, &ContentOverrides::default());
        assert_eq!(frame.style_value("max-width"), Some(width));
        assert_eq!(frame.attr_value("data-viewport"), Some(viewport.key()));
    }
}

#[test]
fn frame_uses_background_and_font() {
    let settings = ThemeSettings {
        font_family: "Poppins".into(),
        ..ThemeSettings::default()
    };
    let frame = home(&settings);
    assert_eq!(frame.style_value("background-color"), Some(settings.background_color.as_str()));
    assert!(frame
        .style_value("font-family")
        .is_some_and(|stack| stack.starts_with("'Poppins', ")));
}

#[test]
fn placeholder_content_and_overrides() {
    let settings = ThemeSettings::default();
    let frame = home(&settings);
    assert_eq!(frame.find_by_class("store-name").map(|n| n.text_content()), Some("MyStore".into()));
    assert_eq!(frame.find_by_class("hero-title").map(|n| n.text_content()), Some("New Arrivals".into()));

    let content = ContentOverrides {
        store_name: Some("Driftwood".into()),
        hero_title: Some("Fall Drop".into()),
        product_image: Some("https://cdn.example.com/tee.png".into()),
        hero_background: None,
    };
    let frame = render_preview(&settings, Viewport::Desktop, &content);
    assert_eq!(frame.find_by_class("store-name").map(|n| n.text_content()), Some("Driftwood".into()));
    assert_eq!(frame.find_by_class("hero-title").map(|n| n.text_content()), Some("Fall Drop".into()));
    assert!(frame.to_html().contains(r#"src="https://cdn.example.com/tee.png""#));
    assert!(frame
        .find_by_class("site-footer")
        .is_some_and(|f| f.text_content().contains("© 2024 Driftwood.")));
}

#[test]
fn sizes_and_shadows_follow_settings() {
    let settings = ThemeSettings {
        border_radius: 12,
        button_padding: 14,
        shadow_intensity: 40,
        ..ThemeSettings::default()
    };
    let frame = home(&settings);

    let card = frame.find_by_class("product-card").unwrap();
    assert_eq!(card.style_value("border-radius"), Some("12px"));

    let hero = frame.find_by_class("hero").unwrap();
    let cta = hero.find_by_class("btn-primary").unwrap();
    assert_eq!(cta.style_value("padding"), Some("9.8px 21px"));
    assert_eq!(cta.style_value("box-shadow"), Some("0 4px 20px rgba(102, 126, 234, 0.4)"));
    assert_eq!(cta.style_value("border-radius"), Some("12px"));
}

#[test]
fn preset_colours_reach_the_preview() {
    let mut settings = ThemeSettings::default();
    ThemePreset::NeonNights.apply_to(&mut settings);
    let frame = home(&settings);

    let price = frame.find_by_class("price").unwrap();
    assert_eq!(price.style_value("color"), Some("#00ff88"));
    let active = frame.find_by_class("active").unwrap();
    assert_eq!(active.style_value("background-color"), Some("#00ff88"));
    assert_eq!(active.text_content(), "Home");
}

#[test]
fn rendering_is_a_pure_function_of_its_inputs() {
    let settings = ThemeSettings::default();
    assert_eq!(home(&settings).to_html(), home(&settings).to_html());

    let rounder = ThemeSettings {
        border_radius: 20,
        ..settings.clone()
    };
    assert_ne!(home(&settings).to_html(), home(&rounder).to_html());
}

#[test]
fn empty_region_colours_fall_back() {
    let settings = ThemeSettings {
        header_bg: String::new(),
        footer_bg: String::new(),
        ..ThemeSettings::default()
    };
    let frame = home(&settings);
    assert_eq!(
        frame.find_by_class("site-header").unwrap().style_value("background-color"),
        Some(settings.background_color.as_str())
    );
    assert_eq!(
        frame.find_by_class("site-footer").unwrap().style_value("background-color"),
        Some(settings.heading_color.as_str())
    );
}

#[test]
fn compact_viewports_collapse_navigation() {
    let settings = ThemeSettings::default();
    let desktop = home(&settings);
    assert!(desktop.find_by_class("nav-links").is_some());
    assert!(desktop.find_by_class("menu-icon").is_none());

    let mobile = render_preview(&settings, Viewport::Mobile, &ContentOverrides::default());
    assert!(mobile.find_by_class("nav-links").is_none());
    assert!(mobile.find_by_class("menu-icon").is_some());
}

#[test]
fn each_page_has_its_own_body() {
    let settings = ThemeSettings::default();
    let content = ContentOverrides::default();

    let home = render_page(&settings, Viewport::Desktop, PreviewPage::Home, &content);
    assert_eq!(home.find_all_by_class("product-card").len(), 3);
    assert!(home.find_by_class("newsletter").is_some());

    let collection = render_page(&settings, Viewport::Desktop, PreviewPage::Collection, &content);
    assert_eq!(collection.find_all_by_class("product-card").len(), 6);
    assert_eq!(collection.find_all_by_class("sale-badge").len(), 3);
    assert_eq!(collection.find_by_class("active").map(|n| n.text_content()), Some("Collection".into()));

    let product = render_page(&settings, Viewport::Desktop, PreviewPage::Product, &content);
    assert_eq!(product.find_all_by_class("size-option").len(), 5);
    assert_eq!(product.find_all_by_class("color-swatch").len(), 4);
    let selected = product
        .find_all_by_class("size-option")
        .into_iter()
        .find(|n| n.class_name() == Some("size-option selected"))
        .unwrap();
    assert_eq!(selected.text_content(), "M");
    assert_eq!(selected.style_value("background-color"), Some(settings.primary_color.as_str()));
    assert_eq!(
        product.find_by_class("add-to-cart").unwrap().style_value("padding"),
        Some("8.4px")
    );

    let blog = render_page(&settings, Viewport::Desktop, PreviewPage::Blog, &content);
    assert!(blog.find_by_class("article").is_some());
    assert!(blog.find_by_class("comment").is_some());
}

#[test]
fn user_text_is_escaped() {
    let content = ContentOverrides {
        store_name: Some("<b>Tom & Co</b>".into()),
        ..ContentOverrides::default()
    };
    let html = render_preview(&ThemeSettings::default(), Viewport::Desktop, &content).to_html();
    assert!(html.contains("&lt;b&gt;Tom &amp; Co&lt;/b&gt;"));
    assert!(!html.contains("<b>"));
}

#[test]
fn content_overrides_use_camel_case_json() {
    let content: ContentOverrides =
        serde_json::from_str(r#"{"storeName":"Driftwood","heroTitle":""}"#).unwrap();
    assert_eq!(content.store_name(), "Driftwood");
    assert_eq!(content.hero_title(), "New Arrivals");
    assert_eq!(
        serde_json::to_string(&ContentOverrides::default()).unwrap(),
        "{}"
    );
}
