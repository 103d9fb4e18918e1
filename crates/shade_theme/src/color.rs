//! Colour string helpers
//!
//! Colours are stored as the strings the user typed. These helpers only
//! classify them and derive translucent variants; nothing here rejects input.

/// Whether `value` is `#RGB`, `#RRGGBB`, or an `rgb`-prefixed function
///
/// Anything else is still a legal setting, but is reported as unusual.
pub fn is_recognized_color(value: &str) -> bool {
    if value.starts_with("rgb") {
        return true;
    }
    match value.strip_prefix('#') {
        Some(hex) => (hex.len() == 3 || hex.len() == 6) && hex.bytes().all(|b| b.is_ascii_hexdigit()),
        None => false,
    }
}

/// Expand `#RGB` to `#RRGGBB`; returns the six hex digits without `#`
fn six_digit_hex(value: &str) -> Option<String> {
    let hex = value.strip_prefix('#')?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        6 => Some(hex.to_string()),
        3 => Some(hex.chars().flat_map(|c| [c, c]).collect()),
        _ => None,
    }
}

/// Derive a translucent variant of `color` with the given alpha byte
///
/// Hex colours get the alpha appended as a hex byte (`#ffc600` + `0x20` →
/// `#ffc60020`). Other formats fall back to `color-mix` so the output is
/// still valid CSS.
pub fn with_alpha(color: &str, alpha: u8) -> String {
    match six_digit_hex(color) {
        Some(hex) => format!("#{hex}{alpha:02x}"),
        None => {
            let percent = (u32::from(alpha) * 100 + 127) / 255;
            format!("color-mix(in srgb, {color} {percent}%, transparent)")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_hex_and_rgb() {
        assert!(is_recognized_color("#fff"));
        assert!(is_recognized_color("#1A2b3C"));
        assert!(is_recognized_color("rgb(1, 2, 3)"));
        assert!(is_recognized_color("rgba(1, 2, 3, 0.5)"));
    }

    #[test]
    fn flags_unusual_formats() {
        assert!(!is_recognized_color("red"));
        assert!(!is_recognized_color("#12345"));
        assert!(!is_recognized_color("#ggg"));
        assert!(!is_recognized_color("hsl(10, 20%, 30%)"));
        assert!(!is_recognized_color(""));
    }

    #[test]
    fn alpha_suffix_for_hex() {
        assert_eq!(with_alpha("#ffc600", 0x20), "#ffc60020");
        assert_eq!(with_alpha("#abc", 0x15), "#aabbcc15");
    }

    #[test]
    fn alpha_falls_back_to_color_mix() {
        assert_eq!(
            with_alpha("rgb(0, 0, 0)", 0x20),
            "color-mix(in srgb, rgb(0, 0, 0) 13%, transparent)"
        );
    }
}
