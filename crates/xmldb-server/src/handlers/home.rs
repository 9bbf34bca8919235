//! Landing page.

use std::fmt::Write as _;
use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use xmldb_theme::{page_footer, page_header};

use crate::state::AppState;

/// Handle GET /.
pub(crate) async fn get_home(State(state): State<Arc<AppState>>) -> Html<String> {
    let mut page = page_header("XMLDB documentation", &state.theme);
    page.push_str("<div class=\"xmldb-doc\">\n");
    page.push_str("<h1>XMLDB documentation</h1>\n");
    page.push_str(
        "<p class=\"centerpara\">Enter the site-relative directory holding a schema, \
         e.g. <code>/mod/forum/db</code>.</p>\n",
    );
    page.push_str("<form action=\"/doc\" method=\"get\" class=\"centerpara\">\n");
    page.push_str("<input type=\"text\" name=\"dir\" size=\"40\" placeholder=\"/mod/forum/db\" />\n");
    page.push_str("<button type=\"submit\">View documentation</button>\n");
    page.push_str("</form>\n");
    writeln!(
        page,
        "<p class=\"centerpara\">xmldb {version}</p>",
        version = state.version
    )
    .unwrap();
    page.push_str("</div>\n");
    page.push_str(&page_footer());
    Html(page)
}
