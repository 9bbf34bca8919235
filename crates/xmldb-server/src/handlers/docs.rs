//! Schema documentation endpoint.
//!
//! Serves documentation inline in a themed page, or as a standalone HTML
//! attachment when `download` is set.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;
use xmldb_theme::{page_footer, page_header};

use crate::error::ServerError;
use crate::state::AppState;

/// Title of the inline documentation page.
const PAGE_TITLE: &str = "XMLDB documentation";

/// Query parameters for GET /doc.
#[derive(Debug, Deserialize)]
pub(crate) struct DocQuery {
    /// Site-relative schema directory, e.g. `/mod/forum/db`.
    dir: Option<String>,
    /// Any value other than empty or "0" switches to attachment download.
    download: Option<String>,
}

/// Handle GET /doc.
pub(crate) async fn get_doc(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DocQuery>,
) -> Result<Response, ServerError> {
    let dir = query.dir.ok_or(ServerError::MissingDir)?;
    validate_dir(&dir)?;

    let download = wants_download(query.download.as_deref());
    if state.verbose {
        tracing::info!(dir = %dir, download, "Serving schema documentation");
    }

    // Rendering shells out to the XSLT processor and, on the download path,
    // fetches theme CSS over HTTP. Both are blocking, and the CSS fetch may
    // target this server's own styles route, so the render must leave the
    // runtime workers free to answer it.
    tokio::task::spawn_blocking(move || {
        if download {
            download_response(&state, &dir)
        } else {
            inline_response(&state, &dir)
        }
    })
    .await?
}

/// Inline documentation wrapped in themed page chrome.
fn inline_response(state: &AppState, dir: &str) -> Result<Response, ServerError> {
    let fragment = state.renderer.render_inline(dir)?;

    let mut page = page_header(PAGE_TITLE, &state.theme);
    page.push_str(&fragment);
    page.push_str(&page_footer());

    Ok(Html(page).into_response())
}

/// Standalone document served as an attachment.
///
/// The page header markup is rendered only to be scanned for the theme
/// stylesheet URL; the resulting CSS is inlined into the download.
fn download_response(state: &AppState, dir: &str) -> Result<Response, ServerError> {
    let header_markup = page_header(PAGE_TITLE, &state.theme);
    let download = state.renderer.render_download(dir, &header_markup)?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain".to_owned()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={}", download.filename),
            ),
        ],
        download.content,
    )
        .into_response())
}

/// Whether the download flag is set.
fn wants_download(value: Option<&str>) -> bool {
    matches!(value, Some(v) if !v.is_empty() && v != "0")
}

/// Reject directories that could escape the documentation root.
fn validate_dir(dir: &str) -> Result<(), ServerError> {
    if dir.contains('\\') || dir.split('/').any(|segment| segment == "..") {
        return Err(ServerError::InvalidDir(dir.to_owned()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wants_download() {
        assert!(wants_download(Some("1")));
        assert!(wants_download(Some("yes")));
        assert!(!wants_download(Some("0")));
        assert!(!wants_download(Some("")));
        assert!(!wants_download(None));
    }

    #[test]
    fn test_validate_dir_accepts_plain_paths() {
        assert!(validate_dir("/mod/forum/db").is_ok());
        assert!(validate_dir("mod/forum/db").is_ok());
        assert!(validate_dir("/local/thing.name/db").is_ok());
    }

    #[test]
    fn test_validate_dir_rejects_parent_segments() {
        assert!(validate_dir("/../etc").is_err());
        assert!(validate_dir("/mod/../../etc/db").is_err());
        assert!(validate_dir("..").is_err());
    }

    #[test]
    fn test_validate_dir_rejects_backslashes() {
        assert!(validate_dir("\\mod\\forum\\db").is_err());
        assert!(validate_dir("/mod/forum\\db").is_err());
    }

    #[test]
    fn test_validate_dir_accepts_dotted_names() {
        // Only the exact ".." segment is a traversal.
        assert!(validate_dir("/mod/..forum../db").is_ok());
    }
}
