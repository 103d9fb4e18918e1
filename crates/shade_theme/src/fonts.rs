//! Font family catalog

/// A font offered by the visual panel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FontOption {
    /// Family name written into CSS
    pub family: &'static str,
    /// Label shown next to the option
    pub label: &'static str,
}

/// Fonts offered by the visual panel, in display order
pub const FONT_OPTIONS: [FontOption; 14] = [
    FontOption { family: "Inter", label: "Inter" },
    FontOption { family: "Orbitron", label: "Orbitron (Sci-Fi)" },
    FontOption { family: "Audiowide", label: "Audiowide (Alien)" },
    FontOption { family: "Exo 2", label: "Exo 2 (Futuristic)" },
    FontOption { family: "Rajdhani", label: "Rajdhani (Tech)" },
    FontOption { family: "Michroma", label: "Michroma (Space)" },
    FontOption { family: "Black Ops One", label: "Black Ops One" },
    FontOption { family: "Teko", label: "Teko (Industrial)" },
    FontOption { family: "Share Tech Mono", label: "Share Tech Mono" },
    FontOption { family: "VT323", label: "VT323 (Retro Terminal)" },
    FontOption { family: "Press Start 2P", label: "Press Start 2P (Pixel)" },
    FontOption { family: "Poppins", label: "Poppins" },
    FontOption { family: "Montserrat", label: "Montserrat" },
    FontOption { family: "Roboto", label: "Roboto" },
];

/// System fallback stack appended after the chosen family
pub const FONT_FALLBACK_STACK: &str = "-apple-system, BlinkMacSystemFont, sans-serif";

/// Whether `family` is one of the catalog fonts
///
/// Informational only: settings accept any family name.
pub fn is_known_font(family: &str) -> bool {
    FONT_OPTIONS.iter().any(|f| f.family == family)
}

/// Extract a family name from a `font-family` value
///
/// A quoted name wins (`'Exo 2', sans-serif` → `Exo 2`); otherwise the text
/// before the first comma is used.
pub fn family_from_value(value: &str) -> String {
    let value = value.trim();
    for quote in ['\'', '"'] {
        if let Some(start) = value.find(quote) {
            let rest = &value[start + 1..];
            if let Some(end) = rest.find(quote) {
                return rest[..end].to_string();
            }
        }
    }
    value.split(',').next().unwrap_or_default().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_family_is_extracted() {
        assert_eq!(
            family_from_value("'Exo 2', -apple-system, sans-serif"),
            "Exo 2"
        );
        assert_eq!(family_from_value("\"VT323\", monospace"), "VT323");
    }

    #[test]
    fn unquoted_family_stops_at_comma() {
        assert_eq!(family_from_value(" Roboto , sans-serif"), "Roboto");
        assert_eq!(family_from_value("Poppins"), "Poppins");
    }

    #[test]
    fn catalog_lookup() {
        assert!(is_known_font("Press Start 2P"));
        assert!(!is_known_font("Comic Sans MS"));
    }
}
