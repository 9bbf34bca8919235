//! Page chrome carrying the theme stylesheet reference.

use std::fmt::Write as _;

/// Stylesheet bundled with the tools, served when no external site theme is
/// configured.
const THEME_CSS: &str = include_str!("../resources/theme.css");

/// Theme selection for rendered pages.
///
/// `www_root` is the base URL whose styles endpoint serves the theme CSS;
/// `revision` busts browser caches when the theme changes.
#[derive(Debug, Clone)]
pub struct ThemeConfig {
    pub name: String,
    pub revision: u32,
    pub www_root: String,
}

impl ThemeConfig {
    /// Theme served from the styles endpoint under `www_root`.
    #[must_use]
    pub fn new(name: impl Into<String>, revision: u32, www_root: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            revision,
            www_root: www_root.into(),
        }
    }

    /// URL of this theme's stylesheet.
    #[must_use]
    pub fn style_url(&self) -> String {
        let root = self.www_root.trim_end_matches('/');
        format!(
            "{root}/theme/styles.php/{name}/{revision}/all",
            name = self.name,
            revision = self.revision
        )
    }
}

/// The CSS bundled with the tools.
#[must_use]
pub fn builtin_theme_css() -> &'static str {
    THEME_CSS
}

/// Opening markup for a themed page, through the `<body>` tag.
///
/// The head references the theme stylesheet by URL, which is also what the
/// style extraction scan looks for when a standalone export inlines the CSS.
#[must_use]
pub fn page_header(title: &str, theme: &ThemeConfig) -> String {
    let mut html = String::new();
    writeln!(html, "<!DOCTYPE html>").unwrap();
    writeln!(html, "<html>").unwrap();
    writeln!(html, "<head>").unwrap();
    writeln!(html, "<meta charset=\"utf-8\" />").unwrap();
    writeln!(html, "<title>{}</title>", escape(title)).unwrap();
    writeln!(
        html,
        "<link rel=\"stylesheet\" type=\"text/css\" href=\"{}\" />",
        theme.style_url()
    )
    .unwrap();
    writeln!(html, "</head>").unwrap();
    writeln!(html, "<body>").unwrap();
    html
}

/// Closing markup matching [`page_header`].
#[must_use]
pub fn page_footer() -> String {
    "</body>\n</html>\n".to_owned()
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locator::{MarkerScan, StyleUrlLocator};
    use pretty_assertions::assert_eq;

    fn theme() -> ThemeConfig {
        ThemeConfig::new("classic", 1700000000, "https://example.org")
    }

    #[test]
    fn test_style_url_shape() {
        assert_eq!(
            theme().style_url(),
            "https://example.org/theme/styles.php/classic/1700000000/all"
        );
    }

    #[test]
    fn test_style_url_trims_trailing_slash() {
        let theme = ThemeConfig::new("classic", 1, "https://example.org/");

        assert_eq!(
            theme.style_url(),
            "https://example.org/theme/styles.php/classic/1/all"
        );
    }

    #[test]
    fn test_page_header_is_scannable() {
        let header = page_header("Administration", &theme());
        let scan = MarkerScan::new("https://example.org");

        assert_eq!(
            scan.locate(&header),
            Some("https://example.org/theme/styles.php/classic/1700000000/all")
        );
    }

    #[test]
    fn test_page_header_escapes_title() {
        let header = page_header("Tools & <more>", &theme());

        assert!(header.contains("<title>Tools &amp; &lt;more&gt;</title>"));
        assert!(header.starts_with("<!DOCTYPE html>"));
        assert!(header.trim_end().ends_with("<body>"));
    }

    #[test]
    fn test_page_footer_closes_document() {
        assert_eq!(page_footer(), "</body>\n</html>\n");
    }

    #[test]
    fn test_builtin_css_has_shared_classes() {
        let css = builtin_theme_css();

        assert!(css.contains(".centerpara"));
        assert!(css.contains(".xmldb-doc"));
    }
}
