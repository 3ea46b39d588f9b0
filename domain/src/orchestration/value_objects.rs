//! Orchestration value objects

use serde::Serialize;

/// Final rewritten prompt produced by the refine stage
///
/// Holds the model's text verbatim; nothing is trimmed or post-processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnhancedPrompt(String);

impl EnhancedPrompt {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EnhancedPrompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
