//! XSLT transform capability for the XMLDB documentation tools.
//!
//! The XML-to-HTML work of documentation generation is delegated to an
//! external XSLT processor. This crate models that capability as the
//! [`TransformEngine`] trait with two runtime variants:
//!
//! - [`XsltprocEngine`]: shells out to the `xsltproc` binary
//! - [`NullEngine`]: stands in when no processor is installed; every call
//!   reports the capability as missing so callers can degrade
//!
//! [`detect_engine`] probes the host once and returns the right variant, so
//! the rest of the pipeline never checks for the processor itself.

mod engine;
#[cfg(feature = "mock")]
mod mock;

pub use engine::{NullEngine, TransformEngine, TransformError, XsltprocEngine, detect_engine};
#[cfg(feature = "mock")]
pub use mock::MockEngine;
