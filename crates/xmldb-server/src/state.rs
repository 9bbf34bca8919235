//! Application state.
//!
//! Shared state for all request handlers.

use xmldb_doc::DocRenderer;
use xmldb_theme::ThemeConfig;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Documentation renderer.
    pub(crate) renderer: DocRenderer,
    /// Theme referenced from page headers.
    pub(crate) theme: ThemeConfig,
    /// Enable verbose output (log every served request).
    pub(crate) verbose: bool,
    /// Application version.
    pub(crate) version: String,
}
