//! Preview error types

use thiserror::Error;

/// Lookup failures for the named preview options
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PreviewError {
    #[error("Unknown viewport '{0}' (expected desktop, tablet or mobile)")]
    UnknownViewport(String),

    #[error("Unknown preview page '{0}' (expected home, product, collection or blog)")]
    UnknownPage(String),

    #[error("Unknown component template '{0}'")]
    UnknownTemplate(String),
}
