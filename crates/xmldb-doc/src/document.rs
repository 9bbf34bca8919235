//! Standalone HTML document assembly for downloads.

use std::fmt::Write as _;

/// Extra rule appended after the theme CSS so the standalone page does not
/// sit flush against the viewport.
const BODY_PADDING: &str = "body{padding:1.5em !important;}";

/// A fully assembled document ready to serve as an attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    /// Suggested file name for the attachment.
    pub filename: String,
    /// Complete HTML document.
    pub content: String,
}

/// File name for a plugin's downloaded documentation.
#[must_use]
pub fn download_filename(plugin: &str) -> String {
    format!("{plugin}_xmldb_doc.html")
}

/// Assemble a complete HTML document around transformed schema `content`.
///
/// `style` is raw theme CSS, inlined into a `<style>` element so the file
/// renders the same offline as it did on the site. The plugin name `title`
/// appears both as the document title and in a heading above the content.
#[must_use]
pub fn standalone_document(title: &str, style: &str, content: &str) -> String {
    let title = escape_html(title);
    let mut html = String::with_capacity(style.len() + content.len() + 256);
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    writeln!(html, "<title>{title}</title>").unwrap();
    writeln!(html, "<style type='text/css'>{style} {BODY_PADDING}</style>").unwrap();
    html.push_str("</head>\n<body>\n");
    writeln!(html, "<h1>'{title}' XMLDB documentation</h1>").unwrap();
    html.push_str(content);
    html.push_str("\n</body>\n</html>\n");
    html
}

/// Escape HTML special characters.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}
