//! Schema documentation rendering.
//!
//! Every plugin keeps its database schema in an `install.xml` file under a
//! `db` directory. This crate turns those files into HTML documentation:
//!
//! - [`DocRenderer::render_inline`] produces a page fragment for embedding
//!   in the admin interface, with download and navigation links around the
//!   transformed schema.
//! - [`DocRenderer::render_download`] produces a complete standalone HTML
//!   document with the site theme's CSS inlined, served as an attachment.
//!
//! The XSLT transform itself is delegated to an engine from `xmldb-xsl`;
//! theme CSS comes from a `xmldb-theme` style source. Both are trait
//! objects, so hosts without an XSLT processor degrade gracefully and tests
//! run without subprocesses or HTTP.

mod document;
mod error;
mod messages;
mod plugin;
mod renderer;
mod schema;

pub use document::{Download, download_filename, escape_html, standalone_document};
pub use error::DocError;
pub use messages::Messages;
pub use plugin::plugin_name;
pub use renderer::{DocRenderer, LinkTargets};
pub use schema::{SCHEMA_FILENAME, SchemaLocation};
