//! Documentation renderer combining schema lookup, transform and theming.

use std::path::PathBuf;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_encode};
use xmldb_theme::StyleSource;
use xmldb_xsl::{TransformEngine, TransformError};

use crate::document::{Download, download_filename, standalone_document};
use crate::error::DocError;
use crate::messages::Messages;
use crate::plugin::plugin_name;
use crate::schema::SchemaLocation;

/// Documentation stylesheet compiled into the crate.
const STYLESHEET: &str = include_str!("../resources/xmldb.xsl");

/// Characters passed through unencoded in query string values.
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_');

/// Percent-encode a query string value.
fn query_encode(input: &str) -> String {
    percent_encode(input.as_bytes(), QUERY_ENCODE_SET).to_string()
}

/// Link targets woven into inline fragments.
#[derive(Debug, Clone)]
pub struct LinkTargets {
    /// URL of the documentation page itself, base of the download link.
    pub action: String,
    /// URL of the main admin view, target of the back links.
    pub main_view: String,
}

impl Default for LinkTargets {
    fn default() -> Self {
        Self {
            action: String::new(),
            main_view: "/".to_owned(),
        }
    }
}

/// Renders schema documentation for plugins under a site root.
///
/// The transform engine and style source are injected so hosts without an
/// XSLT processor degrade gracefully and tests run without subprocesses or
/// HTTP.
pub struct DocRenderer {
    root: PathBuf,
    engine: Box<dyn TransformEngine>,
    styles: Box<dyn StyleSource>,
    stylesheet: String,
    links: LinkTargets,
    messages: Messages,
}

impl DocRenderer {
    /// Renderer for schemas under `root` using the compiled-in stylesheet.
    #[must_use]
    pub fn new(
        root: impl Into<PathBuf>,
        engine: Box<dyn TransformEngine>,
        styles: Box<dyn StyleSource>,
    ) -> Self {
        Self {
            root: root.into(),
            engine,
            styles,
            stylesheet: STYLESHEET.to_owned(),
            links: LinkTargets::default(),
            messages: Messages::default(),
        }
    }

    /// Replace the documentation stylesheet.
    #[must_use]
    pub fn with_stylesheet(mut self, stylesheet: impl Into<String>) -> Self {
        self.stylesheet = stylesheet.into();
        self
    }

    /// Replace the link targets.
    #[must_use]
    pub fn with_links(mut self, links: LinkTargets) -> Self {
        self.links = links;
        self
    }

    /// Replace the user-facing strings.
    #[must_use]
    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }

    /// Render the documentation fragment embedded in the admin page.
    ///
    /// The fragment carries a download link, a back link, an introductory
    /// paragraph, the transformed schema and a closing back link. When no
    /// XSLT processor is available the transform and closing link are
    /// replaced by an install notice; the fragment still renders.
    ///
    /// # Errors
    ///
    /// Returns [`DocError::SchemaNotFound`] when `dir` holds no readable
    /// schema file, [`DocError::Transform`] when the processor fails on the
    /// schema itself.
    pub fn render_inline(&self, dir: &str) -> Result<String, DocError> {
        let schema = self.locate(dir)?;
        tracing::debug!(dir = %dir, "Rendering inline documentation");

        let back = self.back_link();
        let mut fragment = format!(
            "<a href=\"{href}\">{label}</a>",
            href = self.download_href(dir),
            label = self.messages.download_html
        );
        fragment.push_str(&back);
        fragment.push_str(&format!(
            " <p class=\"centerpara\">{}</p>",
            self.messages.documentation_intro
        ));

        match self.engine.transform(&self.stylesheet, schema.path()) {
            Ok(html) => {
                fragment.push_str(&html);
                fragment.push_str(&back);
            }
            Err(TransformError::Unavailable(binary)) => {
                tracing::warn!(binary = %binary, "XSLT processor missing, rendering install notice");
                fragment.push_str(&self.messages.extension_required);
            }
            Err(err) => return Err(err.into()),
        }

        Ok(fragment)
    }

    /// Render the complete standalone document served as an attachment.
    ///
    /// `header` is the site's rendered page header markup; the theme CSS it
    /// references is extracted and inlined so the file renders offline.
    ///
    /// # Errors
    ///
    /// Returns [`DocError::SchemaNotFound`] when `dir` holds no readable
    /// schema file, [`DocError::Transform`] when the transform fails or no
    /// processor is available, [`DocError::Style`] when the theme CSS
    /// cannot be obtained.
    pub fn render_download(&self, dir: &str, header: &str) -> Result<Download, DocError> {
        let schema = self.locate(dir)?;
        let plugin = plugin_name(dir);
        tracing::debug!(dir = %dir, plugin = %plugin, "Rendering downloadable documentation");

        let content = self.engine.transform(&self.stylesheet, schema.path())?;
        let style = self.styles.extract(header)?;

        Ok(Download {
            filename: download_filename(&plugin),
            content: standalone_document(&plugin, &style, &content),
        })
    }

    fn locate(&self, dir: &str) -> Result<SchemaLocation, DocError> {
        let location = SchemaLocation::resolve(&self.root, dir);
        if location.is_readable() {
            Ok(location)
        } else {
            Err(DocError::SchemaNotFound(location.path().to_path_buf()))
        }
    }

    fn download_href(&self, dir: &str) -> String {
        format!(
            "{action}?dir={dir}&download=1",
            action = self.links.action,
            dir = query_encode(dir)
        )
    }

    fn back_link(&self) -> String {
        format!(
            " <p class=\"centerpara buttons\">&nbsp;<a href=\"{href}\">[{label}]</a></p>",
            href = self.links.main_view,
            label = self.messages.back_to_main_view
        )
    }
}
