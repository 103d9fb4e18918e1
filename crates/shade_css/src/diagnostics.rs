//! Parse diagnostics and their rendering

use std::fmt::{Display, Formatter};

use tracing::debug;

/// Severity level for parse diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Blocks the parsed update from being applied
    Error,
    /// Reported, but the update still applies
    Warning,
}

impl Display for Severity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A single finding with its location in the source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Human-readable message
    pub message: String,
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed, in characters)
    pub column: usize,
    /// Source text near the location
    pub fragment: String,
    /// Parser context stack, outermost first
    pub contexts: Vec<String>,
    /// Custom property involved, if any
    pub property: Option<String>,
    /// Value involved, if any
    pub value: Option<String>,
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "CSS {}: line {}, column {}: {}",
            self.severity, self.line, self.column, self.message
        )?;
        if !self.contexts.is_empty() {
            write!(f, "\n  Context: {}", self.contexts.join(" > "))?;
        }
        Ok(())
    }
}

impl Diagnostic {
    /// Create a diagnostic at a byte offset of `source`
    pub fn at(severity: Severity, message: impl Into<String>, source: &str, offset: usize) -> Self {
        let (line, column, fragment) = calculate_position(source, offset);
        Self {
            severity,
            message: message.into(),
            line,
            column,
            fragment,
            contexts: Vec::new(),
            property: None,
            value: None,
        }
    }

    pub fn error(message: impl Into<String>, source: &str, offset: usize) -> Self {
        Self::at(Severity::Error, message, source, offset)
    }

    pub fn warning(message: impl Into<String>, source: &str, offset: usize) -> Self {
        Self::at(Severity::Warning, message, source, offset)
    }

    pub fn with_property(mut self, property: impl Into<String>) -> Self {
        self.property = Some(property.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_contexts(mut self, contexts: Vec<String>) -> Self {
        self.contexts = contexts;
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Format for plain console output
    pub fn to_plain_string(&self) -> String {
        let mut s = String::new();
        s.push_str(&format!(
            "{}[{}:{}]: {}",
            self.severity, self.line, self.column, self.message
        ));
        if let Some(ref prop) = self.property {
            if let Some(ref val) = self.value {
                s.push_str(&format!("\n  Property: {} = {}", prop, val));
            } else {
                s.push_str(&format!("\n  Property: {}", prop));
            }
        }
        if !self.fragment.is_empty() {
            s.push_str(&format!("\n  Near: \"{}\"", self.fragment));
        }
        s
    }

    /// Format with ANSI color codes for terminal output
    ///
    /// Colors:
    /// - Error: Red
    /// - Warning: Yellow
    /// - Property names: Blue
    /// - Values: Magenta
    /// - Line numbers: Dim
    pub fn to_colored_string(&self) -> String {
        const RESET: &str = "\x1b[0m";
        const RED: &str = "\x1b[31m";
        const YELLOW: &str = "\x1b[33m";
        const BLUE: &str = "\x1b[34m";
        const MAGENTA: &str = "\x1b[35m";
        const DIM: &str = "\x1b[2m";
        const BOLD: &str = "\x1b[1m";

        let (severity_color, icon) = match self.severity {
            Severity::Error => (RED, "✖"),
            Severity::Warning => (YELLOW, "⚠"),
        };

        let mut s = String::new();
        s.push_str(&format!(
            "{BOLD}{severity_color}{icon} {}{RESET} ",
            self.severity
        ));
        s.push_str(&format!("{DIM}[{}:{}]{RESET} ", self.line, self.column));
        s.push_str(&self.message);

        if let Some(ref prop) = self.property {
            s.push_str(&format!("\n  {BLUE}Property:{RESET} {}", prop));
            if let Some(ref val) = self.value {
                s.push_str(&format!(" = {MAGENTA}{}{RESET}", val));
            }
        }
        if !self.contexts.is_empty() {
            s.push_str(&format!(
                "\n  {DIM}Context: {}{RESET}",
                self.contexts.join(" > ")
            ));
        }
        if !self.fragment.is_empty() {
            s.push_str(&format!("\n  {DIM}Near:{RESET} \"{}\"", self.fragment));
        }
        s
    }
}

/// Ordered list of findings from one parse
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.0.push(diagnostic);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.0.iter()
    }

    pub fn has_errors(&self) -> bool {
        self.0.iter().any(Diagnostic::is_error)
    }

    pub fn has_warnings(&self) -> bool {
        self.0.iter().any(|d| d.severity == Severity::Warning)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.0.iter().filter(|d| d.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.0.iter().filter(|d| d.severity == Severity::Warning)
    }

    /// Messages of the errors, in source order
    pub fn error_messages(&self) -> Vec<String> {
        self.errors().map(|d| d.message.clone()).collect()
    }

    /// Messages of the warnings, in source order
    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings().map(|d| d.message.clone()).collect()
    }

    /// Render every diagnostic, colored or plain, one block per entry
    pub fn render(&self, colored: bool) -> String {
        self.0
            .iter()
            .map(|d| if colored { d.to_colored_string() } else { d.to_plain_string() })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Summary line with counts
    pub fn summary(&self, colored: bool) -> String {
        let (reset, red, yellow, green, bold) = if colored {
            ("\x1b[0m", "\x1b[31m", "\x1b[33m", "\x1b[32m", "\x1b[1m")
        } else {
            ("", "", "", "", "")
        };

        let error_count = self.errors().count();
        let warning_count = self.warnings().count();

        if error_count == 0 && warning_count == 0 {
            return format!("{bold}{green}✓ CSS parsed successfully{reset}");
        }

        let mut parts = Vec::new();
        if error_count > 0 {
            parts.push(format!("{red}{} error(s){reset}", error_count));
        }
        if warning_count > 0 {
            parts.push(format!("{yellow}{} warning(s){reset}", warning_count));
        }
        format!("{bold}CSS parsing completed with {}{reset}", parts.join(", "))
    }

    /// Log all diagnostics via tracing
    pub fn log(&self) {
        for d in &self.0 {
            match d.severity {
                Severity::Error => debug!(
                    severity = "error",
                    line = d.line,
                    column = d.column,
                    message = %d.message,
                    property = ?d.property,
                    value = ?d.value,
                    "CSS parse error"
                ),
                Severity::Warning => debug!(
                    severity = "warning",
                    line = d.line,
                    column = d.column,
                    message = %d.message,
                    property = ?d.property,
                    value = ?d.value,
                    "CSS parse warning"
                ),
            }
        }
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Line, column and a short preview for a byte offset of `source`
pub fn calculate_position(source: &str, offset: usize) -> (usize, usize, String) {
    let mut offset = offset.min(source.len());
    while !source.is_char_boundary(offset) {
        offset -= 1;
    }
    let consumed = &source[..offset];

    let line = consumed.matches('\n').count() + 1;
    let line_start = consumed.rfind('\n').map(|pos| pos + 1).unwrap_or(0);
    let column = consumed[line_start..].chars().count() + 1;

    let preview: String = source[offset..]
        .lines()
        .next()
        .unwrap_or_default()
        .trim_end()
        .chars()
        .take(30)
        .collect();
    (line, column, preview)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_is_one_based() {
        let source = "a {\n  b: c;\n}";
        assert_eq!(calculate_position(source, 0), (1, 1, "a {".to_string()));
        assert_eq!(calculate_position(source, 6), (2, 3, "b: c;".to_string()));
    }

    #[test]
    fn position_clamps_past_end() {
        let (line, column, fragment) = calculate_position("ab\ncd", 99);
        assert_eq!((line, column), (2, 3));
        assert!(fragment.is_empty());
    }

    #[test]
    fn summary_counts_by_severity() {
        let mut diagnostics = Diagnostics::new();
        assert_eq!(diagnostics.summary(false), "✓ CSS parsed successfully");

        diagnostics.push(Diagnostic::error("broken", "x", 0));
        diagnostics.push(Diagnostic::warning("odd", "x", 0));
        diagnostics.push(Diagnostic::warning("odder", "x", 0));
        assert_eq!(
            diagnostics.summary(false),
            "CSS parsing completed with 1 error(s), 2 warning(s)"
        );
        assert_eq!(diagnostics.error_messages(), vec!["broken".to_string()]);
        assert_eq!(diagnostics.warning_messages().len(), 2);
    }

    #[test]
    fn plain_rendering_includes_property() {
        let d = Diagnostic::error("Invalid --border-radius value: abc", "--border-radius: abc", 0)
            .with_property("--border-radius")
            .with_value("abc");
        let text = d.to_plain_string();
        assert!(text.starts_with("error[1:1]: Invalid --border-radius value: abc"));
        assert!(text.contains("Property: --border-radius = abc"));
    }
}
