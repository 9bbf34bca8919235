//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower::ServiceBuilder;

use crate::handlers;
use crate::middleware::security;
use crate::state::AppState;

/// Create the application router.
///
/// # Arguments
///
/// * `state` - Shared application state
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::home::get_home))
        .route("/doc", get(handlers::docs::get_doc))
        .route(
            "/theme/styles.php/{*rest}",
            get(handlers::theme::get_styles),
        )
        .layer(
            ServiceBuilder::new()
                .layer(security::content_type_options_layer())
                .layer(security::frame_options_layer()),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use axum::response::Response;
    use std::path::Path;
    use std::time::Duration;
    use tempfile::TempDir;
    use tower::util::ServiceExt;
    use xmldb_doc::{DocRenderer, LinkTargets};
    use xmldb_theme::{FixedStyle, MarkerScan, StyleExtractor, ThemeConfig, create_agent};
    use xmldb_xsl::MockEngine;

    const SCHEMA_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<XMLDB PATH="mod/forum/db" COMMENT="Forum tables">
  <TABLES>
    <TABLE NAME="forum" COMMENT="Forums contain and structure discussion">
      <FIELDS>
        <FIELD NAME="id" TYPE="int" LENGTH="10" NOTNULL="true" SEQUENCE="true"/>
      </FIELDS>
    </TABLE>
  </TABLES>
</XMLDB>
"#;

    fn site_with_schema() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        let schema_dir = dir.path().join("mod/forum/db");
        std::fs::create_dir_all(&schema_dir).unwrap();
        std::fs::write(schema_dir.join("install.xml"), SCHEMA_XML).unwrap();
        dir
    }

    fn test_state(root: &Path, engine: MockEngine) -> Arc<AppState> {
        let renderer = DocRenderer::new(
            root,
            Box::new(engine),
            Box::new(FixedStyle("h1{color:red}".to_owned())),
        )
        .with_links(LinkTargets {
            action: "/doc".to_owned(),
            main_view: "/".to_owned(),
        });
        Arc::new(AppState {
            renderer,
            theme: ThemeConfig::new("classic", 1, "http://127.0.0.1:7700"),
            verbose: false,
            version: "0.1.0".to_owned(),
        })
    }

    fn request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_text(resp: Response) -> String {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_home_page_links_to_doc_route() {
        let site = site_with_schema();
        let app = create_router(test_state(site.path(), MockEngine::new("<div/>")));

        let resp = app.oneshot(request("/")).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_text(resp).await;
        assert!(body.contains("<form action=\"/doc\" method=\"get\""));
        assert!(body.contains("xmldb 0.1.0"));
    }

    #[tokio::test]
    async fn test_inline_doc_page() {
        let site = site_with_schema();
        let app = create_router(test_state(site.path(), MockEngine::new("<div>TABLES</div>")));

        let resp = app.oneshot(request("/doc?dir=/mod/forum/db")).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get("x-content-type-options").unwrap(),
            "nosniff"
        );
        let body = body_text(resp).await;
        assert!(body.starts_with("<!DOCTYPE html>"));
        assert!(body.contains("<div>TABLES</div>"));
        assert_eq!(body.matches("[Back to main view]").count(), 2);
    }

    #[tokio::test]
    async fn test_missing_dir_is_bad_request() {
        let site = site_with_schema();
        let app = create_router(test_state(site.path(), MockEngine::new("<div/>")));

        let resp = app.oneshot(request("/doc")).await.unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_traversal_dir_is_bad_request() {
        let site = site_with_schema();
        let app = create_router(test_state(site.path(), MockEngine::new("<div/>")));

        let resp = app
            .oneshot(request("/doc?dir=/mod/../../../etc/db"))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_dir_is_not_found() {
        let site = site_with_schema();
        let app = create_router(test_state(site.path(), MockEngine::new("<div/>")));

        let resp = app.oneshot(request("/doc?dir=/mod/none/db")).await.unwrap();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_download_serves_attachment() {
        let site = site_with_schema();
        let app = create_router(test_state(site.path(), MockEngine::new("<div>TABLES</div>")));

        let resp = app
            .oneshot(request("/doc?dir=%2Fmod%2Fforum%2Fdb&download=1"))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/plain"
        );
        assert_eq!(
            resp.headers().get(header::CONTENT_DISPOSITION).unwrap(),
            "attachment; filename=mod_forum_xmldb_doc.html"
        );
        let body = body_text(resp).await;
        assert!(body.starts_with("<!DOCTYPE html>"));
        assert!(body.contains("h1{color:red}"));
    }

    #[tokio::test]
    async fn test_download_fetches_styles_from_own_server() {
        // With no external site configured the style fetch loops back to
        // this server's own styles route. On the single-threaded test
        // runtime the nested request is only answered because rendering
        // runs on the blocking pool, not on the runtime worker.
        let site = site_with_schema();
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let www_root = format!("http://{}", listener.local_addr().unwrap());

        let styles = StyleExtractor::new(
            Box::new(MarkerScan::new(&www_root)),
            create_agent(Duration::from_secs(5)),
        );
        let renderer = DocRenderer::new(
            site.path(),
            Box::new(MockEngine::new("<div>TABLES</div>")),
            Box::new(styles),
        )
        .with_links(LinkTargets {
            action: "/doc".to_owned(),
            main_view: "/".to_owned(),
        });
        let state = Arc::new(AppState {
            renderer,
            theme: ThemeConfig::new("classic", 1, &www_root),
            verbose: false,
            version: "0.1.0".to_owned(),
        });
        let app = create_router(state);

        let serve_app = app.clone();
        tokio::spawn(async move {
            axum::serve(listener, serve_app).await.unwrap();
        });

        let resp = app
            .oneshot(request("/doc?dir=/mod/forum/db&download=1"))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_text(resp).await;
        assert!(body.contains(".xmldb-doc"));
    }

    #[tokio::test]
    async fn test_download_zero_serves_inline() {
        let site = site_with_schema();
        let app = create_router(test_state(site.path(), MockEngine::new("<div/>")));

        let resp = app
            .oneshot(request("/doc?dir=/mod/forum/db&download=0"))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let content_type = resp.headers().get(header::CONTENT_TYPE).unwrap();
        assert_eq!(content_type, "text/html; charset=utf-8");
    }

    #[tokio::test]
    async fn test_missing_processor_still_renders_inline() {
        let site = site_with_schema();
        let app = create_router(test_state(site.path(), MockEngine::unavailable()));

        let resp = app.oneshot(request("/doc?dir=/mod/forum/db")).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_text(resp).await;
        assert!(body.contains("xsltproc XSLT processor is required"));
    }

    #[tokio::test]
    async fn test_missing_processor_fails_download() {
        let site = site_with_schema();
        let app = create_router(test_state(site.path(), MockEngine::unavailable()));

        let resp = app
            .oneshot(request("/doc?dir=/mod/forum/db&download=1"))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_styles_route_serves_bundled_css() {
        let site = site_with_schema();
        let app = create_router(test_state(site.path(), MockEngine::new("<div/>")));

        let resp = app
            .oneshot(request("/theme/styles.php/classic/1/all"))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/css; charset=utf-8"
        );
        let body = body_text(resp).await;
        assert!(body.contains(".xmldb-doc"));
    }
}
