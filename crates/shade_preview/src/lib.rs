//! Shade Preview
//!
//! A simulated storefront and a small library of component templates, both
//! rendered to HTML.
//!
//! - [`render_page`] builds a [`PreviewNode`] tree for one storefront page
//!   with every colour and size taken from the theme settings
//! - [`ComponentTemplate`] holds standalone HTML + CSS snippets that can be
//!   exported as files
//!
//! # Example
//!
//! ```rust
//! use shade_preview::{render_page, ContentOverrides, PreviewPage, Viewport};
//! use shade_theme::ThemeSettings;
//!
//! let content = ContentOverrides {
//!     store_name: Some("Driftwood".into()),
//!     ..ContentOverrides::default()
//! };
//! let page = render_page(&ThemeSettings::default(), Viewport::Mobile, PreviewPage::Home, &content);
//!
//! assert_eq!(page.style_value("max-width"), Some("375px"));
//! assert!(page.to_html().contains("Driftwood"));
//! ```

pub mod content;
pub mod error;
pub mod node;
pub mod renderer;
pub mod templates;
pub mod viewport;

pub use content::ContentOverrides;
pub use error::PreviewError;
pub use node::PreviewNode;
pub use renderer::{render_page, render_preview};
pub use templates::ComponentTemplate;
pub use viewport::{PreviewPage, Viewport};
