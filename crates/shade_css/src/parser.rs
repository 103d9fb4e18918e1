//! Tolerant extraction of theme settings from hand-edited CSS
//!
//! Only the first top-level `:root` rule is read. Each `--name: value`
//! declaration that maps to a [`SettingsField`] lands in the returned patch;
//! everything else in the stylesheet is left alone and never reported.
//!
//! # Error Handling
//!
//! The parser never fails and never panics. Problems are collected as
//! [`Diagnostic`]s:
//!
//! - **errors** (numeric value with no leading digits, mismatched braces) mean the patch
//!   must not be applied
//! - **warnings** (unusual colour, out-of-range number, missing `:root`,
//!   empty `:root`, missing semicolons, malformed declaration) are advisory
//!
//! Diagnostics are also logged via tracing at DEBUG level.

use nom::{
    bytes::complete::{tag, take_while1},
    character::complete::char,
    combinator::{cut, rest},
    error::{context, VerboseError, VerboseErrorKind},
    sequence::preceded,
    Finish, IResult,
};
use shade_theme::{FieldValue, SettingsField, SettingsPatch, ThemeSettings};
use tracing::debug;

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::scanner::{
    brace_balance, find_root_block, missing_semicolon_line, split_declarations, strip_comments,
    trivia_len, ws, RootBlock,
};

type NomResult<'a, O> = IResult<&'a str, O, VerboseError<&'a str>>;

pub const NO_ROOT_MESSAGE: &str = "No :root variables found. Preview may not update correctly.";
pub const EMPTY_ROOT_MESSAGE: &str = "No CSS variables found in :root block.";
pub const MISSING_SEMICOLON_MESSAGE: &str = "Some properties may be missing semicolons";

/// Settings recovered from CSS text plus everything worth reporting
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseResult {
    /// Fields found in the `:root` rule; absent fields are not present
    pub updated: SettingsPatch,
    pub diagnostics: Diagnostics,
}

impl ParseResult {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.has_errors()
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics.has_warnings()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.errors()
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.warnings()
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.diagnostics.error_messages()
    }

    pub fn warning_messages(&self) -> Vec<String> {
        self.diagnostics.warning_messages()
    }
}

/// Extract a settings patch from `css`
///
/// `current` is not consulted: the patch holds exactly what the text
/// declares, and merging is left to the caller.
pub fn parse(css: &str, _current: &ThemeSettings) -> ParseResult {
    let mut result = ParseResult::default();

    match find_root_block(css) {
        None => result
            .diagnostics
            .push(Diagnostic::warning(NO_ROOT_MESSAGE, css, 0)),
        Some(block) => {
            let declared = extract_root(css, &block, &mut result);
            if declared == 0 {
                result
                    .diagnostics
                    .push(Diagnostic::warning(EMPTY_ROOT_MESSAGE, css, block.selector));
            }
        }
    }

    let balance = brace_balance(css);
    if !balance.is_balanced() {
        let message = format!(
            "Mismatched braces: {} opening, {} closing",
            balance.opening, balance.closing
        );
        result.diagnostics.push(Diagnostic::error(
            message,
            css,
            balance.first_unmatched.unwrap_or(0),
        ));
    }

    if let Some(line) = missing_semicolon_line(css) {
        result.diagnostics.push(Diagnostic::warning(
            MISSING_SEMICOLON_MESSAGE,
            css,
            line_start(css, line),
        ));
    }

    result.diagnostics.log();
    debug!(
        fields = result.updated.len(),
        errors = result.errors().count(),
        warnings = result.warnings().count(),
        "Parsed stylesheet"
    );
    result
}

/// Walk the `:root` body; returns how many custom properties it declares
fn extract_root(css: &str, block: &RootBlock, result: &mut ParseResult) -> usize {
    let mut declared = 0;

    for segment in split_declarations(css, block.body.clone()) {
        if segment.nested {
            continue;
        }

        let start = segment.offset + trivia_len(segment.text);
        let text = &css[start..segment.offset + segment.text.len()];
        if !text.starts_with("--") {
            continue;
        }

        match custom_property(text).finish() {
            Ok((_, (name, raw))) => {
                declared += 1;
                apply_declaration(css, start, name, raw, result);
            }
            Err(err) => {
                let offset = err
                    .errors
                    .first()
                    .map(|(fragment, _)| start + text.len() - fragment.len())
                    .unwrap_or(start);
                let contexts = err
                    .errors
                    .iter()
                    .filter_map(|(_, kind)| match kind {
                        VerboseErrorKind::Context(ctx) => Some((*ctx).to_string()),
                        _ => None,
                    })
                    .collect();
                let message = format!(
                    "Malformed declaration '{}' (ignored): {}",
                    text.trim_end(),
                    format_verbose_error(&err)
                );
                result
                    .diagnostics
                    .push(Diagnostic::warning(message, css, offset).with_contexts(contexts));
            }
        }
    }

    declared
}

fn apply_declaration(css: &str, offset: usize, name: &str, raw: &str, result: &mut ParseResult) {
    let Some(field) = SettingsField::from_property(name) else {
        debug!(property = name, "Ignoring unmapped custom property");
        return;
    };

    let raw = strip_comments(raw);
    match FieldValue::decode(field, &raw) {
        Ok(value) => {
            if let Some(advisory) = value.advisory(field) {
                result.diagnostics.push(
                    Diagnostic::warning(advisory.to_string(), css, offset)
                        .with_property(field.to_string())
                        .with_value(raw.clone()),
                );
            }
            result.updated.set(field, value);
        }
        Err(err) => {
            result.diagnostics.push(
                Diagnostic::error(err.to_string(), css, offset)
                    .with_property(field.to_string())
                    .with_value(raw),
            );
            result.updated.remove(field);
        }
    }
}

/// Parse an identifier (alphanumeric, hyphen, underscore)
fn identifier(input: &str) -> NomResult<&str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '-' || c == '_')(input)
}

/// Parse `--name: value` where the value is the rest of the segment
fn custom_property(input: &str) -> NomResult<(&str, &str)> {
    let (input, name) = context(
        "custom property name",
        preceded(tag("--"), cut(identifier)),
    )(input)?;
    let (input, _) = ws::<VerboseError<&str>>(input)?;
    let (input, _) = context("colon after property name", cut(char(':')))(input)?;
    let (input, _) = ws::<VerboseError<&str>>(input)?;
    let (input, value) = context("property value", rest)(input)?;
    Ok((input, (name, value)))
}

/// Format a VerboseError into a human-readable message
fn format_verbose_error(err: &VerboseError<&str>) -> String {
    let mut parts = Vec::new();

    for (input, kind) in &err.errors {
        match kind {
            VerboseErrorKind::Context(ctx) => parts.push(format!("in {}", ctx)),
            VerboseErrorKind::Char(c) => {
                let preview: String = input.chars().take(20).collect();
                parts.push(format!("expected '{}' near \"{}\"", c, preview));
            }
            VerboseErrorKind::Nom(kind) => parts.push(format!("{:?}", kind)),
        }
    }

    if parts.is_empty() {
        "unknown parse error".to_string()
    } else {
        parts.join(", ")
    }
}

/// Byte offset where 1-based `line` begins
fn line_start(css: &str, line: usize) -> usize {
    if line <= 1 {
        return 0;
    }
    css.match_indices('\n')
        .nth(line - 2)
        .map(|(pos, _)| pos + 1)
        .unwrap_or(css.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse_str(css: &str) -> ParseResult {
        parse(css, &ThemeSettings::default())
    }

    #[test]
    fn reads_mapped_fields() {
        let result = parse_str(
            ":root {\n  --primary-color: #ff0000;\n  --border-radius: 12px;\n  --font-family: 'Teko', sans-serif;\n}\n",
        );
        assert!(!result.has_errors());
        assert_eq!(
            result.updated.get(SettingsField::PrimaryColor),
            Some(&FieldValue::Text("#ff0000".to_string()))
        );
        assert_eq!(
            result.updated.get(SettingsField::BorderRadius),
            Some(&FieldValue::Integer(12))
        );
        assert_eq!(
            result.updated.get(SettingsField::FontFamily),
            Some(&FieldValue::Text("Teko".to_string()))
        );
        assert_eq!(result.updated.len(), 3);
    }

    #[test]
    fn missing_root_is_a_warning() {
        let result = parse_str("body { color: red; }");
        assert!(!result.has_errors());
        assert!(result.updated.is_empty());
        assert_eq!(result.warning_messages(), vec![NO_ROOT_MESSAGE.to_string()]);
    }

    #[test]
    fn empty_root_is_a_warning() {
        let result = parse_str(":root { color: red; }");
        assert!(!result.has_errors());
        assert_eq!(result.warning_messages(), vec![EMPTY_ROOT_MESSAGE.to_string()]);
    }

    #[test]
    fn bad_number_is_an_error_and_field_is_dropped() {
        let result = parse_str(":root {\n  --border-radius: abc;\n  --button-padding: 10px;\n}");
        assert_eq!(
            result.error_messages(),
            vec!["Invalid --border-radius value: abc".to_string()]
        );
        let error = result.errors().next().unwrap();
        assert_eq!((error.line, error.column), (2, 3));
        assert!(!result.updated.contains(SettingsField::BorderRadius));
        assert!(result.updated.contains(SettingsField::ButtonPadding));
    }

    #[test]
    fn decimal_numbers_keep_their_integer_part() {
        let result = parse_str(":root { --border-radius: 12.5px; --button-padding: 0.5rem; --primary-color: #123456; }");
        assert!(!result.has_errors());
        assert_eq!(
            result.updated.get(SettingsField::BorderRadius),
            Some(&FieldValue::Integer(12))
        );
        assert_eq!(
            result.updated.get(SettingsField::ButtonPadding),
            Some(&FieldValue::Integer(0))
        );
        assert!(result.updated.contains(SettingsField::PrimaryColor));
    }

    #[test]
    fn later_duplicate_wins() {
        let result = parse_str(":root { --border-radius: 4px; --border-radius: 6px; }");
        assert_eq!(
            result.updated.get(SettingsField::BorderRadius),
            Some(&FieldValue::Integer(6))
        );
    }

    #[test]
    fn important_and_comments_are_stripped() {
        let result = parse_str(
            ":root { --shadow-intensity: 55% !important; --link-color: /* brand */ #123456 /* blue */; }",
        );
        assert!(!result.has_warnings());
        assert_eq!(
            result.updated.get(SettingsField::ShadowIntensity),
            Some(&FieldValue::Integer(55))
        );
        assert_eq!(
            result.updated.get(SettingsField::LinkColor),
            Some(&FieldValue::Text("#123456".to_string()))
        );
    }

    #[test]
    fn unusual_colour_warns_but_applies() {
        let result = parse_str(":root { --footer-bg: hsl(0, 0%, 0%); }");
        assert!(!result.has_errors());
        assert_eq!(
            result.warning_messages(),
            vec!["Unusual color value for footer-bg: hsl(0, 0%, 0%)".to_string()]
        );
        assert!(result.updated.contains(SettingsField::FooterBg));
    }

    #[test]
    fn out_of_range_warns_but_applies() {
        let result = parse_str(":root { --button-padding: 40px; }");
        assert!(!result.has_errors());
        assert_eq!(result.warnings().count(), 1);
        assert_eq!(
            result.updated.get(SettingsField::ButtonPadding),
            Some(&FieldValue::Integer(40))
        );
    }

    #[test]
    fn malformed_custom_property_warns() {
        let result = parse_str(":root { --primary-color #fff; --text-color: #000; }");
        assert!(!result.has_errors());
        let warning = result.warnings().next().unwrap();
        assert!(warning.message.starts_with("Malformed declaration"));
        assert_eq!(warning.contexts, vec!["colon after property name".to_string()]);
        assert!(result.updated.contains(SettingsField::TextColor));
    }

    #[test]
    fn semicolon_warning_names_first_line() {
        let result = parse_str(":root {\n  --text-color: #000;\n}\n\nbody {\n  color: red\n}\n");
        let warning = result
            .warnings()
            .find(|w| w.message == MISSING_SEMICOLON_MESSAGE)
            .unwrap();
        assert_eq!(warning.line, 6);
    }

    #[test]
    fn line_start_offsets() {
        let css = "a\nbb\nccc";
        assert_eq!(line_start(css, 1), 0);
        assert_eq!(line_start(css, 2), 2);
        assert_eq!(line_start(css, 3), 5);
        assert_eq!(line_start(css, 9), css.len());
    }
}
