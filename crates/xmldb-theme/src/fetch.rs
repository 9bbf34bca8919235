//! Fetching theme CSS referenced from page headers.

use std::time::Duration;

use ureq::Agent;

use crate::locator::StyleUrlLocator;

/// Error extracting theme CSS.
#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    /// No stylesheet URL could be found in the header markup.
    #[error("no theme stylesheet URL found in page header")]
    UrlNotFound,
    /// HTTP failure fetching the stylesheet.
    #[error("HTTP error: {0}")]
    Http(String),
    /// I/O failure reading the response body.
    #[error("I/O error: {0}")]
    Io(String),
}

/// Create HTTP agent with the specified timeout.
///
/// Use this to create a reusable agent for connection pooling when a server
/// extracts styles for many documents.
#[must_use]
pub fn create_agent(timeout: Duration) -> Agent {
    Agent::config_builder()
        .timeout_global(Some(timeout))
        .http_status_as_error(false)
        .build()
        .into()
}

/// Fetch the stylesheet at `url` and return its text.
///
/// # Errors
///
/// Returns [`StyleError::Http`] for transport failures and non-2xx
/// responses, reading the response body for error details.
pub fn fetch_style(agent: &Agent, url: &str) -> Result<String, StyleError> {
    let response = agent
        .get(url)
        .call()
        .map_err(|e| StyleError::Http(e.to_string()))?;

    let status = response.status().as_u16();
    let mut body = response.into_body();

    if status >= 400 {
        let error_body = body
            .read_to_string()
            .unwrap_or_else(|_| String::from("(unable to read error body)"));
        return Err(StyleError::Http(format!("HTTP {status}: {error_body}")));
    }

    body.read_to_string().map_err(|e| StyleError::Io(e.to_string()))
}

/// Source of the CSS inlined into a standalone document.
pub trait StyleSource: Send + Sync {
    /// Produce the CSS for a document whose site header markup is `header`.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError`] when the CSS cannot be obtained.
    fn extract(&self, header: &str) -> Result<String, StyleError>;
}

/// Locates the stylesheet URL in header markup and fetches it over HTTP.
pub struct StyleExtractor {
    locator: Box<dyn StyleUrlLocator>,
    agent: Agent,
}

impl StyleExtractor {
    /// Extractor using `locator` to find URLs and `agent` to fetch them.
    #[must_use]
    pub fn new(locator: Box<dyn StyleUrlLocator>, agent: Agent) -> Self {
        Self { locator, agent }
    }
}

impl StyleSource for StyleExtractor {
    fn extract(&self, header: &str) -> Result<String, StyleError> {
        let url = self.locator.locate(header).ok_or(StyleError::UrlNotFound)?;
        tracing::debug!(url = %url, "Fetching theme stylesheet");
        fetch_style(&self.agent, url)
    }
}

/// Fixed CSS handed over verbatim, for offline export and tests.
pub struct FixedStyle(pub String);

impl StyleSource for FixedStyle {
    fn extract(&self, _header: &str) -> Result<String, StyleError> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locator::MarkerScan;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fixed_style_ignores_header() {
        let source = FixedStyle("body { margin: 0; }".to_owned());

        let css = source.extract("<head></head>").unwrap();
        assert_eq!(css, "body { margin: 0; }");
    }

    #[test]
    fn test_extractor_without_url_reports_not_found() {
        let extractor = StyleExtractor::new(
            Box::new(MarkerScan::new("https://example.org")),
            create_agent(Duration::from_secs(1)),
        );

        let result = extractor.extract("<head><title>no stylesheet here</title></head>");
        assert!(matches!(result, Err(StyleError::UrlNotFound)));
    }
}
