//! Mock transform engine for tests.

use std::path::Path;

use crate::engine::{TransformEngine, TransformError};

enum Behavior {
    Output(String),
    Unavailable,
    Fail(String),
}

/// Scripted engine that returns a canned response without running a
/// processor. Enable with the `mock` feature.
pub struct MockEngine {
    behavior: Behavior,
}

impl MockEngine {
    /// Engine that succeeds with `output` for every transform.
    #[must_use]
    pub fn new(output: impl Into<String>) -> Self {
        Self {
            behavior: Behavior::Output(output.into()),
        }
    }

    /// Engine that reports the processor as missing.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            behavior: Behavior::Unavailable,
        }
    }

    /// Engine that fails every transform with `detail`.
    #[must_use]
    pub fn failing(detail: impl Into<String>) -> Self {
        Self {
            behavior: Behavior::Fail(detail.into()),
        }
    }
}

impl TransformEngine for MockEngine {
    fn transform(&self, _stylesheet: &str, _schema: &Path) -> Result<String, TransformError> {
        match &self.behavior {
            Behavior::Output(output) => Ok(output.clone()),
            Behavior::Unavailable => Err(TransformError::Unavailable("mock".to_owned())),
            Behavior::Fail(detail) => Err(TransformError::Failed(detail.clone())),
        }
    }
}
