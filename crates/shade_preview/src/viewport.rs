//! Simulated device widths and storefront pages

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PreviewError;

/// Device width the preview frame is constrained to
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Viewport {
    #[default]
    Desktop,
    Tablet,
    Mobile,
}

impl Viewport {
    pub const ALL: [Viewport; 3] = [Viewport::Desktop, Viewport::Tablet, Viewport::Mobile];

    pub fn key(self) -> &'static str {
        match self {
            Viewport::Desktop => "desktop",
            Viewport::Tablet => "tablet",
            Viewport::Mobile => "mobile",
        }
    }

    /// CSS `max-width` of the preview frame
    pub fn max_width(self) -> &'static str {
        match self {
            Viewport::Desktop => "100%",
            Viewport::Tablet => "768px",
            Viewport::Mobile => "375px",
        }
    }

    /// Narrow viewports collapse the navigation links into a menu icon
    pub fn is_compact(self) -> bool {
        self != Viewport::Desktop
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Viewport {
    type Err = PreviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| PreviewError::UnknownViewport(s.to_string()))
    }
}

/// Storefront page shown in the preview
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewPage {
    #[default]
    Home,
    Product,
    Collection,
    Blog,
}

impl PreviewPage {
    pub const ALL: [PreviewPage; 4] = [
        PreviewPage::Home,
        PreviewPage::Product,
        PreviewPage::Collection,
        PreviewPage::Blog,
    ];

    pub fn key(self) -> &'static str {
        match self {
            PreviewPage::Home => "home",
            PreviewPage::Product => "product",
            PreviewPage::Collection => "collection",
            PreviewPage::Blog => "blog",
        }
    }

    /// Tab label
    pub fn label(self) -> &'static str {
        match self {
            PreviewPage::Home => "Home",
            PreviewPage::Product => "Product",
            PreviewPage::Collection => "Collection",
            PreviewPage::Blog => "Blog",
        }
    }
}

impl fmt::Display for PreviewPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for PreviewPage {
    type Err = PreviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| PreviewError::UnknownPage(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_widths() {
        assert_eq!(Viewport::Desktop.max_width(), "100%");
        assert_eq!(Viewport::Tablet.max_width(), "768px");
        assert_eq!(Viewport::Mobile.max_width(), "375px");
    }

    #[test]
    fn keys_parse_case_insensitively() {
        assert_eq!("Mobile".parse::<Viewport>(), Ok(Viewport::Mobile));
        assert_eq!("blog".parse::<PreviewPage>(), Ok(PreviewPage::Blog));
        assert_eq!(
            "watch".parse::<Viewport>(),
            Err(PreviewError::UnknownViewport("watch".to_string()))
        );
    }
}
