//! Standalone component templates
//!
//! Each template is a self-contained HTML fragment with a default
//! stylesheet. Both can be edited by the user and exported as a pair of
//! files named after the template key.

use std::fmt;
use std::str::FromStr;

use shade_css::ExportFile;

use crate::error::PreviewError;

/// A built-in HTML + CSS component
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ComponentTemplate {
    ProductCard,
    Header,
    Hero,
    Footer,
}

impl ComponentTemplate {
    pub const ALL: [ComponentTemplate; 4] = [
        ComponentTemplate::ProductCard,
        ComponentTemplate::Header,
        ComponentTemplate::Hero,
        ComponentTemplate::Footer,
    ];

    /// Key used in exported file names
    pub fn key(self) -> &'static str {
        match self {
            ComponentTemplate::ProductCard => "productCard",
            ComponentTemplate::Header => "header",
            ComponentTemplate::Hero => "hero",
            ComponentTemplate::Footer => "footer",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ComponentTemplate::ProductCard => "Product Card",
            ComponentTemplate::Header => "Header",
            ComponentTemplate::Hero => "Hero Section",
            ComponentTemplate::Footer => "Footer",
        }
    }

    pub fn html(self) -> &'static str {
        match self {
            ComponentTemplate::ProductCard => include_str!("../templates/product_card.html"),
            ComponentTemplate::Header => include_str!("../templates/header.html"),
            ComponentTemplate::Hero => include_str!("../templates/hero.html"),
            ComponentTemplate::Footer => include_str!("../templates/footer.html"),
        }
    }

    pub fn default_css(self) -> &'static str {
        match self {
            ComponentTemplate::ProductCard => include_str!("../templates/product_card.css"),
            ComponentTemplate::Header => include_str!("../templates/header.css"),
            ComponentTemplate::Hero => include_str!("../templates/hero.css"),
            ComponentTemplate::Footer => include_str!("../templates/footer.css"),
        }
    }

    /// Look up a template by key (`productCard`, `header`, ...)
    pub fn from_key(key: &str) -> Result<Self, PreviewError> {
        Self::ALL
            .into_iter()
            .find(|t| t.key() == key)
            .ok_or_else(|| PreviewError::UnknownTemplate(key.to_string()))
    }

    /// `<key>.html` and `<key>.css` with the built-in content
    pub fn export(self) -> [ExportFile; 2] {
        self.export_with(self.html(), self.default_css())
    }

    /// `<key>.html` and `<key>.css` with edited content
    pub fn export_with(self, html: &str, css: &str) -> [ExportFile; 2] {
        [
            ExportFile::html(format!("{}.html", self.key()), html),
            ExportFile::css(format!("{}.css", self.key()), css),
        ]
    }

    /// Standalone page previewing the built-in content
    pub fn document(self) -> String {
        self.document_with(self.html(), self.default_css())
    }

    /// Standalone page previewing edited content
    ///
    /// The markup is inserted as is; it is the user's own HTML.
    pub fn document_with(self, html: &str, css: &str) -> String {
        format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n\
             <style>\n{}</style>\n</head>\n<body style=\"margin: 0; background: white\">\n\
             <div style=\"padding: 24px\">\n{}</div>\n</body>\n</html>\n",
            self.display_name(),
            css,
            html
        )
    }
}

impl fmt::Display for ComponentTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ComponentTemplate {
    type Err = PreviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s)
    }
}
