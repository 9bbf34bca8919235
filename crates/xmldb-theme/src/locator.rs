//! Finding the theme stylesheet URL inside page header markup.

/// Terminator that closes every theme stylesheet URL.
const TERMINATOR: &str = "/all";

/// Locates the theme stylesheet URL inside rendered header markup.
pub trait StyleUrlLocator: Send + Sync {
    /// Return the stylesheet URL found in `header`, or `None` when the
    /// markup carries no recognizable reference.
    fn locate<'a>(&self, header: &'a str) -> Option<&'a str>;
}

/// Two-marker scan over raw markup.
///
/// The URL is assumed to start with a fixed prefix (the styles endpoint
/// under the site root) and run through the first terminator after it. No
/// HTML parsing is involved, so the scan works on any header the site
/// produces as long as the stylesheet `<link>` keeps its conventional URL
/// shape.
pub struct MarkerScan {
    prefix: String,
    terminator: String,
}

impl MarkerScan {
    /// Scanner for the styles endpoint under `www_root`.
    #[must_use]
    pub fn new(www_root: &str) -> Self {
        let root = www_root.trim_end_matches('/');
        Self {
            prefix: format!("{root}/theme/styles.php"),
            terminator: TERMINATOR.to_owned(),
        }
    }

    /// Scanner with explicit markers, for sites with a non-standard styles
    /// endpoint.
    #[must_use]
    pub fn with_markers(prefix: impl Into<String>, terminator: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            terminator: terminator.into(),
        }
    }
}

impl StyleUrlLocator for MarkerScan {
    fn locate<'a>(&self, header: &'a str) -> Option<&'a str> {
        let start = header.find(&self.prefix)?;
        let tail = &header[start..];
        let end = tail.find(&self.terminator)? + self.terminator.len();
        Some(&tail[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const HEADER: &str = concat!(
        "<head><title>Site</title>\n",
        "<link rel=\"stylesheet\" type=\"text/css\" ",
        "href=\"https://example.org/theme/styles.php/classic/1700000000/all\" />\n",
        "</head>"
    );

    #[test]
    fn test_locates_url_between_markers() {
        let scan = MarkerScan::new("https://example.org");

        assert_eq!(
            scan.locate(HEADER),
            Some("https://example.org/theme/styles.php/classic/1700000000/all")
        );
    }

    #[test]
    fn test_trailing_slash_on_root_is_tolerated() {
        let scan = MarkerScan::new("https://example.org/");

        assert!(scan.locate(HEADER).is_some());
    }

    #[test]
    fn test_missing_prefix_yields_none() {
        let scan = MarkerScan::new("https://other.example");

        assert_eq!(scan.locate(HEADER), None);
    }

    #[test]
    fn test_missing_terminator_yields_none() {
        let scan = MarkerScan::new("https://example.org");
        let header = "<link href=\"https://example.org/theme/styles.php/classic\" />";

        assert_eq!(scan.locate(header), None);
    }

    #[test]
    fn test_terminator_before_prefix_is_ignored() {
        let scan = MarkerScan::new("https://example.org");
        let header = concat!(
            "<!-- /all -->\n",
            "<link href=\"https://example.org/theme/styles.php/boost/42/all\" />"
        );

        assert_eq!(
            scan.locate(header),
            Some("https://example.org/theme/styles.php/boost/42/all")
        );
    }

    #[test]
    fn test_custom_markers() {
        let scan = MarkerScan::with_markers("/assets/css/", ".css");
        let header = "<link href=\"/assets/css/site.css\" />";

        assert_eq!(scan.locate(header), Some("/assets/css/site.css"));
    }
}
