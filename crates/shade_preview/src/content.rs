//! Placeholder content shown in the preview
//!
//! Every override is optional. A missing or empty override shows the
//! built-in placeholder.

use serde::{Deserialize, Serialize};

pub const DEFAULT_STORE_NAME: &str = "MyStore";
pub const DEFAULT_HERO_TITLE: &str = "New Arrivals";
pub const DEFAULT_PRODUCT_IMAGE: &str =
    "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?w=200&h=200&fit=crop";
pub const DEFAULT_HERO_BACKGROUND: &str =
    "https://images.unsplash.com/photo-1441986300917-64674bd600d8?w=400&h=200&fit=crop";

/// User-supplied text and images for the simulated storefront
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_title: Option<String>,
    /// Image URL (or data URL) for the first featured product
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_image: Option<String>,
    /// Image URL for the blog article header
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_background: Option<String>,
}

impl ContentOverrides {
    pub fn store_name(&self) -> &str {
        non_empty(&self.store_name).unwrap_or(DEFAULT_STORE_NAME)
    }

    pub fn hero_title(&self) -> &str {
        non_empty(&self.hero_title).unwrap_or(DEFAULT_HERO_TITLE)
    }

    pub fn product_image(&self) -> &str {
        non_empty(&self.product_image).unwrap_or(DEFAULT_PRODUCT_IMAGE)
    }

    pub fn hero_background(&self) -> &str {
        non_empty(&self.hero_background).unwrap_or(DEFAULT_HERO_BACKGROUND)
    }

    /// Whether no override is set
    pub fn is_default(&self) -> bool {
        self == &Self::default()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_overrides_fall_back() {
        let content = ContentOverrides {
            store_name: Some(String::new()),
            hero_title: Some("Fall Drop".into()),
            ..ContentOverrides::default()
        };
        assert_eq!(content.store_name(), "MyStore");
        assert_eq!(content.hero_title(), "Fall Drop");
        assert_eq!(content.product_image(), DEFAULT_PRODUCT_IMAGE);
    }
}
