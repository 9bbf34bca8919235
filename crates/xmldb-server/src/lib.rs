//! HTTP server for the XMLDB documentation tools.
//!
//! This crate provides a native Rust HTTP server using axum, serving:
//! - A landing page with a schema directory form
//! - Schema documentation rendered inline in a themed page
//! - The same documentation as a downloadable standalone HTML file
//! - The bundled theme CSS
//!
//! # Quick Start
//!
//! ```ignore
//! use std::path::PathBuf;
//! use xmldb_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         host: "127.0.0.1".to_string(),
//!         port: 7700,
//!         root_dir: PathBuf::from("/srv/site"),
//!         ..ServerConfig::default()
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```
//!
//! # Routes
//!
//! ```text
//! GET /                                    landing page
//! GET /doc?dir=/mod/forum/db               inline documentation
//! GET /doc?dir=/mod/forum/db&download=1    standalone HTML attachment
//! GET /theme/styles.php/{name}/{rev}/all   bundled theme CSS
//! ```
//!
//! The styles route mirrors the URL shape that download rendering scans
//! page headers for, so a server with no external site configured extracts
//! its own CSS.

mod app;
mod error;
mod handlers;
mod middleware;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use state::AppState;
use xmldb_doc::{DocRenderer, LinkTargets};
use xmldb_theme::{MarkerScan, StyleExtractor, ThemeConfig, create_agent};
use xmldb_xsl::detect_engine;

/// Timeout for fetching theme CSS while assembling downloads.
const STYLE_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Root of the plugin tree holding `db/install.xml` files.
    pub root_dir: PathBuf,
    /// Replacement documentation stylesheet (`None` uses the compiled-in one).
    pub stylesheet: Option<PathBuf>,
    /// Theme name used in stylesheet URLs.
    pub theme_name: String,
    /// Theme revision used in stylesheet URLs.
    pub theme_revision: u32,
    /// External site root whose theme CSS should be used. When `None` the
    /// server references its own styles route.
    pub www_root: Option<String>,
    /// Enable verbose output.
    pub verbose: bool,
    /// Application version.
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 7700,
            root_dir: PathBuf::from("."),
            stylesheet: None,
            theme_name: "classic".to_string(),
            theme_revision: 1,
            www_root: None,
            verbose: false,
            version: String::new(),
        }
    }
}

/// Run the server.
///
/// Probes the host for an XSLT processor once at startup; when none is
/// found the server still runs and inline pages show an install notice.
///
/// # Errors
///
/// Returns an error if the server fails to start or a configured
/// stylesheet cannot be read.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let engine = detect_engine();

    let www_root = config
        .www_root
        .clone()
        .unwrap_or_else(|| format!("http://{}:{}", config.host, config.port));

    let styles = StyleExtractor::new(
        Box::new(MarkerScan::new(&www_root)),
        create_agent(STYLE_FETCH_TIMEOUT),
    );

    let mut renderer = DocRenderer::new(config.root_dir.clone(), engine, Box::new(styles))
        .with_links(LinkTargets {
            action: "/doc".to_owned(),
            main_view: "/".to_owned(),
        });
    if let Some(path) = &config.stylesheet {
        let sheet = std::fs::read_to_string(path)?;
        tracing::info!(path = %path.display(), "Using replacement documentation stylesheet");
        renderer = renderer.with_stylesheet(sheet);
    }

    let theme = ThemeConfig::new(&config.theme_name, config.theme_revision, &www_root);

    // Create app state
    let state = Arc::new(AppState {
        renderer,
        theme,
        verbose: config.verbose,
        version: config.version.clone(),
    });

    // Create router
    let app = app::create_router(state);

    // Bind and run server
    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, root = %config.root_dir.display(), "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from an XMLDB config.
///
/// # Arguments
///
/// * `config` - XMLDB configuration
/// * `version` - Application version
/// * `verbose` - Enable verbose output
#[must_use]
pub fn server_config_from_config(
    config: &xmldb_config::Config,
    version: String,
    verbose: bool,
) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        root_dir: config.docs_resolved.root_dir.clone(),
        stylesheet: config.docs_resolved.stylesheet.clone(),
        theme_name: config.theme_resolved.name.clone(),
        theme_revision: config.theme_resolved.revision,
        www_root: config.theme_resolved.www_root.clone(),
        verbose,
        version,
    }
}
