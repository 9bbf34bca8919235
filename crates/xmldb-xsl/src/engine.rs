//! Transform engine trait and the `xsltproc` implementation.

use std::io::Write;
use std::path::Path;
use std::process::Command;

/// Default processor binary name.
const XSLTPROC: &str = "xsltproc";

/// Error returned when a transform cannot be performed.
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    /// No XSLT processor is available on this host.
    #[error("XSLT processor '{0}' is not available")]
    Unavailable(String),
    /// The processor ran and reported a failure.
    #[error("XSLT transform failed: {0}")]
    Failed(String),
    /// I/O error handing work to the processor.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// An engine that applies an XSLT stylesheet to an XML document.
///
/// `stylesheet` is XSLT source text (the documentation stylesheet is compiled
/// into the caller); `schema` is the path of the XML document to transform.
pub trait TransformEngine: Send + Sync {
    /// Apply `stylesheet` to the document at `schema`, returning the output.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::Unavailable`] when the engine has no
    /// processor to run, [`TransformError::Failed`] when the processor
    /// rejects the stylesheet or document.
    fn transform(&self, stylesheet: &str, schema: &Path) -> Result<String, TransformError>;
}

/// Engine backed by the `xsltproc` command-line processor.
pub struct XsltprocEngine {
    binary: String,
}

impl XsltprocEngine {
    /// Engine using the `xsltproc` found on `PATH`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_binary(XSLTPROC)
    }

    /// Engine using a specific processor binary.
    #[must_use]
    pub fn with_binary(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Probe the processor by asking it for its version.
    #[must_use]
    pub fn probe(&self) -> bool {
        match Command::new(&self.binary).arg("--version").output() {
            Ok(output) => output.status.success(),
            Err(_) => false,
        }
    }

    /// Detect the default processor, returning `None` when it is missing.
    #[must_use]
    pub fn detect() -> Option<Self> {
        let engine = Self::new();
        engine.probe().then_some(engine)
    }
}

impl Default for XsltprocEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TransformEngine for XsltprocEngine {
    fn transform(&self, stylesheet: &str, schema: &Path) -> Result<String, TransformError> {
        // xsltproc wants the stylesheet as a file, not on stdin.
        let mut sheet = tempfile::Builder::new()
            .prefix("xmldb-")
            .suffix(".xsl")
            .tempfile()?;
        sheet.write_all(stylesheet.as_bytes())?;
        sheet.flush()?;

        tracing::debug!(schema = %schema.display(), binary = %self.binary, "Running XSLT processor");

        // --nonet keeps the processor from fetching DTDs or includes remotely.
        let output = Command::new(&self.binary)
            .arg("--nonet")
            .arg(sheet.path())
            .arg(schema)
            .output()
            .map_err(|err| match err.kind() {
                std::io::ErrorKind::NotFound => TransformError::Unavailable(self.binary.clone()),
                _ => TransformError::Io(err),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(TransformError::Failed(stderr.trim().to_owned()));
        }

        String::from_utf8(output.stdout)
            .map_err(|err| TransformError::Failed(format!("output is not valid UTF-8: {err}")))
    }
}

/// Null engine used when no processor is installed.
///
/// Every call reports the capability as missing; callers decide whether to
/// degrade (inline rendering shows a notice) or fail (downloads).
pub struct NullEngine;

impl TransformEngine for NullEngine {
    fn transform(&self, _stylesheet: &str, _schema: &Path) -> Result<String, TransformError> {
        Err(TransformError::Unavailable(XSLTPROC.to_owned()))
    }
}

/// Probe the host once and return the best available engine.
#[must_use]
pub fn detect_engine() -> Box<dyn TransformEngine> {
    match XsltprocEngine::detect() {
        Some(engine) => {
            tracing::debug!("xsltproc detected");
            Box::new(engine)
        }
        None => {
            tracing::warn!("xsltproc not found; documentation pages will show an install notice");
            Box::new(NullEngine)
        }
    }
}
