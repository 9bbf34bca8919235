//! Bundled theme stylesheet.

use axum::extract::Path;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use xmldb_theme::builtin_theme_css;

/// Handle GET /theme/styles.php/{*rest}.
///
/// The path mirrors the stylesheet URL that [`xmldb_theme::page_header`]
/// emits, so standalone exports built against this server's own pages can
/// fetch and inline the CSS. The theme name and revision segments are
/// accepted but not interpreted; every revision serves the bundled sheet.
pub(crate) async fn get_styles(Path(rest): Path<String>) -> Response {
    tracing::debug!(rest = %rest, "Serving bundled theme CSS");
    (
        [
            (header::CONTENT_TYPE, "text/css; charset=utf-8"),
            (header::CACHE_CONTROL, "public, max-age=3600"),
        ],
        builtin_theme_css(),
    )
        .into_response()
}
