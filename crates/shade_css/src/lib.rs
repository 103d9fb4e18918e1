//! Shade CSS Engine
//!
//! Both directions of the settings ⇄ stylesheet bridge:
//!
//! - [`generate`] turns [`ThemeSettings`](shade_theme::ThemeSettings) into a
//!   complete storefront stylesheet whose `:root` block declares every field
//! - [`parse`] reads the `:root` block of hand-edited CSS back into a
//!   [`SettingsPatch`](shade_theme::SettingsPatch), collecting diagnostics
//!   instead of failing
//!
//! # Example
//!
//! ```rust
//! use shade_css::{generate, parse};
//! use shade_theme::ThemeSettings;
//!
//! let settings = ThemeSettings { border_radius: 16, ..ThemeSettings::default() };
//! let css = generate(&settings);
//!
//! let result = parse(&css, &ThemeSettings::default());
//! assert!(!result.has_errors());
//! assert_eq!(result.updated.merged(&ThemeSettings::default()), settings);
//! ```

pub mod diagnostics;
pub mod export;
pub mod generator;
pub mod parser;
pub mod scanner;

pub use diagnostics::{calculate_position, Diagnostic, Diagnostics, Severity};
pub use export::{export_css, export_css_as, ExportFile, DEFAULT_CSS_FILENAME};
pub use generator::{
    declaration_value, font_stack, format_halves, format_hundredths, generate, generate_root_block,
};
pub use parser::{parse, ParseResult, EMPTY_ROOT_MESSAGE, MISSING_SEMICOLON_MESSAGE, NO_ROOT_MESSAGE};
