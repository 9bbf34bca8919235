//! Theme stylesheet handling for the XMLDB documentation tools.
//!
//! Standalone documentation exports inline the site theme's CSS so the file
//! renders correctly offline. The theme serves its stylesheet through a
//! single URL that every page header references; this crate locates that URL
//! inside rendered header markup ([`MarkerScan`]), fetches the stylesheet
//! over HTTP ([`StyleExtractor`]), and renders page chrome that carries the
//! reference ([`page_header`] / [`page_footer`]).
//!
//! [`FixedStyle`] supplies CSS without any HTTP round trip, for offline
//! export and for tests.

mod fetch;
mod header;
mod locator;

pub use fetch::{FixedStyle, StyleError, StyleExtractor, StyleSource, create_agent, fetch_style};
pub use header::{ThemeConfig, builtin_theme_css, page_footer, page_header};
pub use locator::{MarkerScan, StyleUrlLocator};
