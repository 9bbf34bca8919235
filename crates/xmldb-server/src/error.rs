//! Server error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use xmldb_doc::DocError;

/// Error returned by request handlers.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ServerError {
    /// Request is missing the dir query parameter.
    #[error("missing required parameter: dir")]
    MissingDir,
    /// The dir parameter contains rejected path segments.
    #[error("invalid dir parameter: {0}")]
    InvalidDir(String),
    /// Rendering failed.
    #[error(transparent)]
    Doc(#[from] DocError),
    /// The render task panicked or was cancelled.
    #[error("render task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::MissingDir | Self::InvalidDir(_) => StatusCode::BAD_REQUEST,
            Self::Doc(DocError::SchemaNotFound(_)) => StatusCode::NOT_FOUND,
            Self::Doc(DocError::Style(_)) => StatusCode::BAD_GATEWAY,
            Self::Doc(_) | Self::Join(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        tracing::warn!(error = %self, status = %status.as_u16(), "Request failed");
        // The not-found variant carries the resolved server path; clients
        // only get a message in terms of what they asked for.
        let body = match &self {
            Self::Doc(DocError::SchemaNotFound(_)) => {
                "no install.xml found in the requested directory".to_owned()
            }
            _ => self.to_string(),
        };
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn status_of(err: ServerError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_parameter_errors_are_bad_request() {
        assert_eq!(status_of(ServerError::MissingDir), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_of(ServerError::InvalidDir("/../etc".to_owned())),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_missing_schema_is_not_found() {
        let err = ServerError::Doc(DocError::SchemaNotFound(PathBuf::from(
            "/site/mod/forum/db/install.xml",
        )));
        assert_eq!(status_of(err), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_missing_schema_body_omits_server_path() {
        let err = ServerError::Doc(DocError::SchemaNotFound(PathBuf::from(
            "/srv/site/mod/forum/db/install.xml",
        )));

        let resp = err.into_response();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(!body.contains("/srv/site"));
        assert!(body.contains("install.xml"));
    }

    #[test]
    fn test_style_failure_is_bad_gateway() {
        let err = ServerError::Doc(DocError::Style(xmldb_theme::StyleError::UrlNotFound));
        assert_eq!(status_of(err), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_transform_failure_is_internal() {
        let err = ServerError::Doc(DocError::Transform(
            xmldb_xsl::TransformError::Failed("boom".to_owned()),
        ));
        assert_eq!(status_of(err), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
