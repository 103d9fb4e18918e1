//! Deterministic stylesheet generation
//!
//! [`generate`] is total and byte-stable: the same settings always produce
//! the same text. The `:root` block declares one custom property per
//! [`SettingsField`], in [`SettingsField::ALL`] order, so the parser can
//! recover every field from generated output.

use shade_theme::{with_alpha, FieldKind, SettingsField, ThemeSettings, FONT_FALLBACK_STACK};

const HEADER: &str = "/* Custom Shopify Theme Styles */\n/* Generated with CSS Template Generator */\n\n";

const BASE_AND_HEADER_RULES: &str = r#"
/* Base Styles */
body {
  font-family: var(--font-family);
  color: var(--text-color);
  background-color: var(--background-color);
}

/* ===================== */
/* HEADER STYLES */
/* ===================== */
.header, .site-header, .shopify-section-header {
  background-color: var(--header-bg);
  border-bottom: 1px solid rgba(0, 0, 0, 0.05);
}

.header__nav a, .site-nav__link, .header-menu__link {
  color: var(--link-color);
  font-weight: 500;
  transition: color 0.2s ease;
}

.header__nav a:hover, .site-nav__link:hover, .header-menu__link:hover {
  color: var(--link-hover-color);
}

.header__logo, .site-header__logo {
  color: var(--heading-color);
}

/* Announcement Bar */
.announcement-bar {
  background: linear-gradient(90deg, var(--primary-color), var(--secondary-color));
  color: white;
  text-align: center;
  padding: 10px 20px;
  font-size: 0.875rem;
}

.announcement-bar a {
  color: white;
  text-decoration: underline;
}
"#;

const BUTTON_SELECTORS: &str = ".btn,
.shopify-payment-button button,
button[type=\"submit\"],
.product-form__submit";

const BUTTON_HOVER_SELECTORS: &str = ".btn:hover,
.shopify-payment-button button:hover,
button[type=\"submit\"]:hover,
.product-form__submit:hover";

const SECONDARY_BUTTON_RULES: &str = r#"
.btn--secondary {
  background: transparent;
  border: 2px solid var(--primary-color);
  color: var(--primary-color);
  box-shadow: none;
}

.btn--secondary:hover {
  background: var(--primary-color);
  color: white;
}
"#;

const TYPOGRAPHY_AND_CARD_RULES: &str = r#"
/* ===================== */
/* TYPOGRAPHY */
/* ===================== */
h1, h2, h3, h4, h5, h6 {
  color: var(--heading-color);
  font-family: var(--font-family);
  font-weight: 700;
  line-height: 1.3;
}

a {
  color: var(--link-color);
  transition: color 0.2s ease;
}

a:hover {
  color: var(--link-hover-color);
}

.text-muted,
.product-card__vendor,
.price__compare,
small,
.caption {
  color: var(--muted-text-color);
}

/* ===================== */
/* PRODUCT CARDS & GRID */
/* ===================== */
.product-card,
.card,
.product-item {
  background: var(--background-color);
  border-radius: var(--border-radius);
  overflow: hidden;
  transition: all 0.4s cubic-bezier(0.4, 0, 0.2, 1);
  box-shadow: 0 2px 10px rgba(0, 0, 0, 0.08);
  border: 1px solid rgba(0, 0, 0, 0.05);
}

.product-card:hover,
.card:hover,
.product-item:hover {
  transform: translateY(-6px);
  box-shadow: 0 15px 35px rgba(0, 0, 0, 0.15);
}

.product-card__image-wrapper {
  overflow: hidden;
}

.product-card__image,
.product-item__image {
  transition: transform 0.5s ease;
}

.product-card:hover .product-card__image,
.product-item:hover .product-item__image {
  transform: scale(1.08);
}

.product-card__title,
.product-item__title {
  color: var(--heading-color);
  font-weight: 600;
}

.product-card__price,
.price {
  color: var(--primary-color);
  font-weight: 700;
}

.price__compare,
.product-card__price--compare {
  color: var(--muted-text-color);
  text-decoration: line-through;
}

/* ===================== */
/* FORM INPUTS */
/* ===================== */
input[type="text"],
input[type="email"],
input[type="password"],
input[type="tel"],
input[type="number"],
input[type="search"],
textarea,
select,
.field__input {
  border-radius: var(--border-radius);
  border: 1px solid #e5e7eb;
  padding: 12px 16px;
  font-family: var(--font-family);
  background-color: var(--background-color);
  color: var(--text-color);
  transition: border-color 0.2s ease, box-shadow 0.2s ease;
}
"#;

const LABEL_FOOTER_CART_RULES: &str = r#"
input::placeholder,
textarea::placeholder {
  color: var(--muted-text-color);
}

/* Form Labels */
label, .form__label {
  color: var(--heading-color);
  font-weight: 500;
}

/* ===================== */
/* FOOTER STYLES */
/* ===================== */
.footer, .site-footer, .shopify-section-footer {
  background-color: var(--footer-bg);
  color: var(--footer-text);
  padding: 60px 0 30px;
}

.footer__heading, .footer-block__heading {
  color: var(--footer-text);
  font-weight: 600;
  margin-bottom: 1rem;
}

.footer a, .site-footer a {
  color: var(--footer-text);
  opacity: 0.8;
  transition: opacity 0.2s ease;
}

.footer a:hover, .site-footer a:hover {
  opacity: 1;
  color: var(--footer-text);
}

.footer__bottom, .footer__copyright {
  border-top: 1px solid rgba(255, 255, 255, 0.1);
  margin-top: 40px;
  padding-top: 20px;
  opacity: 0.6;
  font-size: 0.875rem;
}

/* ===================== */
/* NEWSLETTER FORM */
/* ===================== */
.newsletter-form {
  background: rgba(0, 0, 0, 0.05);
  padding: 2rem;
  border-radius: var(--border-radius);
}

.newsletter-form input[type="email"] {
  flex: 1;
}

/* ===================== */
/* CART & CHECKOUT */
/* ===================== */
.cart-icon__bubble {
  background-color: var(--primary-color);
  color: white;
}

.cart-item {
  border-bottom: 1px solid rgba(0, 0, 0, 0.08);
}
"#;

/// Alpha byte of the focus ring tint
const FOCUS_RING_ALPHA: u8 = 0x20;
/// Alpha byte of the badge background tint
const BADGE_ALPHA: u8 = 0x15;

/// Generate the full stylesheet for `settings`
pub fn generate(settings: &ThemeSettings) -> String {
    let mut css = String::with_capacity(8 * 1024);
    css.push_str(HEADER);
    write_root_block(&mut css, settings);
    css.push_str(BASE_AND_HEADER_RULES);
    write_button_rules(&mut css, settings);
    css.push_str(TYPOGRAPHY_AND_CARD_RULES);
    write_focus_rules(&mut css, settings);
    css.push_str(LABEL_FOOTER_CART_RULES);
    write_badge_rules(&mut css, settings);
    css
}

/// Only the `:root` block, one declaration per line
pub fn generate_root_block(settings: &ThemeSettings) -> String {
    let mut css = String::new();
    write_root_block(&mut css, settings);
    css
}

/// CSS text for one field as it appears in the `:root` block
pub fn declaration_value(settings: &ThemeSettings, field: SettingsField) -> String {
    let value = settings.value(field);
    match field.kind() {
        FieldKind::Pixels | FieldKind::Percent => format!("{}{}", value, field.kind().unit()),
        FieldKind::Font => font_stack(&value.to_string()),
        FieldKind::Color => value.to_string(),
    }
}

/// Quoted family followed by the system fallback stack
pub fn font_stack(family: &str) -> String {
    let quote = if family.contains('\'') { '"' } else { '\'' };
    format!("{quote}{family}{quote}, {FONT_FALLBACK_STACK}")
}

fn write_root_block(css: &mut String, settings: &ThemeSettings) {
    css.push_str(":root {\n");
    for field in SettingsField::ALL {
        css.push_str(&format!(
            "  --{}: {};\n",
            field.property(),
            declaration_value(settings, field)
        ));
    }
    css.push_str("}\n");
}

fn write_button_rules(css: &mut String, settings: &ThemeSettings) {
    let padding = settings.button_padding;
    let intensity = settings.shadow_intensity;

    css.push_str("\n/* ===================== */\n/* BUTTON STYLES */\n/* ===================== */\n");
    css.push_str(BUTTON_SELECTORS);
    css.push_str(" {\n");
    css.push_str("  background: linear-gradient(135deg, var(--primary-color) 0%, var(--secondary-color) 100%);\n");
    css.push_str("  border: none;\n");
    css.push_str("  border-radius: var(--border-radius);\n");
    css.push_str(&format!(
        "  padding: {}px {}px;\n",
        padding,
        i64::from(padding) * 2
    ));
    css.push_str("  font-family: var(--font-family);\n");
    css.push_str("  font-weight: 600;\n");
    css.push_str("  color: white;\n");
    css.push_str("  cursor: pointer;\n");
    css.push_str("  transition: all 0.3s ease;\n");
    css.push_str(&format!(
        "  box-shadow: 0 4px {}px rgba(102, 126, 234, {});\n",
        format_halves(intensity),
        format_hundredths(i64::from(intensity))
    ));
    css.push_str("}\n\n");

    css.push_str(BUTTON_HOVER_SELECTORS);
    css.push_str(" {\n");
    css.push_str("  transform: translateY(-2px);\n");
    css.push_str(&format!(
        "  box-shadow: 0 6px {}px rgba(102, 126, 234, {});\n",
        intensity,
        format_hundredths(i64::from(intensity) + 20)
    ));
    css.push_str("}\n");
    css.push_str(SECONDARY_BUTTON_RULES);
}

fn write_focus_rules(css: &mut String, settings: &ThemeSettings) {
    css.push_str("\ninput:focus,\ntextarea:focus,\nselect:focus,\n.field__input:focus {\n");
    css.push_str("  border-color: var(--primary-color);\n");
    css.push_str(&format!(
        "  box-shadow: 0 0 0 3px {};\n",
        with_alpha(&settings.primary_color, FOCUS_RING_ALPHA)
    ));
    css.push_str("  outline: none;\n}\n");
}

fn write_badge_rules(css: &mut String, settings: &ThemeSettings) {
    css.push_str("\n/* ===================== */\n/* MISC COMPONENTS */\n/* ===================== */\n");
    css.push_str(".badge, .tag {\n");
    css.push_str(&format!(
        "  background: {};\n",
        with_alpha(&settings.primary_color, BADGE_ALPHA)
    ));
    css.push_str("  color: var(--primary-color);\n");
    css.push_str("  border-radius: calc(var(--border-radius) / 2);\n");
    css.push_str("  padding: 4px 10px;\n");
    css.push_str("  font-size: 0.75rem;\n");
    css.push_str("  font-weight: 600;\n}\n\n");
    css.push_str(".sale-badge {\n");
    css.push_str("  background: linear-gradient(135deg, var(--primary-color), var(--secondary-color));\n");
    css.push_str("  color: white;\n}\n");
}

/// `n / 2` written exactly (`41` → `20.5`)
pub fn format_halves(n: i32) -> String {
    let sign = if n < 0 { "-" } else { "" };
    let abs = i64::from(n).unsigned_abs();
    if abs % 2 == 0 {
        format!("{sign}{}", abs / 2)
    } else {
        format!("{sign}{}.5", abs / 2)
    }
}

/// `n / 100` written exactly with no trailing zeros (`60` → `0.6`)
pub fn format_hundredths(n: i64) -> String {
    let sign = if n < 0 { "-" } else { "" };
    let abs = n.unsigned_abs();
    let (whole, frac) = (abs / 100, abs % 100);
    match frac {
        0 => format!("{sign}{whole}"),
        f if f % 10 == 0 => format!("{sign}{whole}.{}", f / 10),
        f => format!("{sign}{whole}.{f:02}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn halves_are_exact() {
        assert_eq!(format_halves(40), "20");
        assert_eq!(format_halves(41), "20.5");
        assert_eq!(format_halves(1), "0.5");
        assert_eq!(format_halves(-1), "-0.5");
        assert_eq!(format_halves(0), "0");
    }

    #[test]
    fn hundredths_are_exact() {
        assert_eq!(format_hundredths(40), "0.4");
        assert_eq!(format_hundredths(60), "0.6");
        assert_eq!(format_hundredths(5), "0.05");
        assert_eq!(format_hundredths(100), "1");
        assert_eq!(format_hundredths(120), "1.2");
        assert_eq!(format_hundredths(-35), "-0.35");
    }

    #[test]
    fn root_block_lists_every_field() {
        let root = generate_root_block(&ThemeSettings::default());
        assert_eq!(
            root,
            ":root {\n  --primary-color: #ffc600;\n  --secondary-color: #0088ff;\n  --text-color: #e1efff;\n  --heading-color: #ffffff;\n  --link-color: #0088ff;\n  --link-hover-color: #ffc600;\n  --muted-text-color: #8a9ab0;\n  --background-color: #193549;\n  --header-bg: #15232d;\n  --footer-bg: #0d1a23;\n  --footer-text: #e1efff;\n  --border-radius: 8px;\n  --button-padding: 14px;\n  --shadow-intensity: 40%;\n  --font-family: 'Inter', -apple-system, BlinkMacSystemFont, sans-serif;\n}\n"
        );
    }

    #[test]
    fn button_rules_follow_settings() {
        let settings = ThemeSettings {
            button_padding: 12,
            shadow_intensity: 45,
            ..ThemeSettings::default()
        };
        let css = generate(&settings);
        assert!(css.contains("  padding: 12px 24px;\n"));
        assert!(css.contains("  box-shadow: 0 4px 22.5px rgba(102, 126, 234, 0.45);\n"));
        assert!(css.contains("  box-shadow: 0 6px 45px rgba(102, 126, 234, 0.65);\n"));
    }

    #[test]
    fn tints_use_primary_colour() {
        let css = generate(&ThemeSettings::default());
        assert!(css.contains("  box-shadow: 0 0 0 3px #ffc60020;\n"));
        assert!(css.contains("  background: #ffc60015;\n"));
    }

    #[test]
    fn font_with_apostrophe_uses_double_quotes() {
        assert_eq!(
            font_stack("O'Brien Sans"),
            "\"O'Brien Sans\", -apple-system, BlinkMacSystemFont, sans-serif"
        );
    }
}
