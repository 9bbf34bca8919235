//! Errors raised while rendering documentation.

use std::path::PathBuf;

use xmldb_theme::StyleError;
use xmldb_xsl::TransformError;

/// Error rendering schema documentation.
#[derive(Debug, thiserror::Error)]
pub enum DocError {
    /// No readable schema file at the resolved location.
    #[error("no readable schema file at {}", .0.display())]
    SchemaNotFound(PathBuf),
    /// The XSLT transform failed or is unavailable.
    #[error(transparent)]
    Transform(#[from] TransformError),
    /// Theme CSS could not be obtained for a standalone document.
    #[error("theme style extraction failed: {0}")]
    Style(#[from] StyleError),
}
