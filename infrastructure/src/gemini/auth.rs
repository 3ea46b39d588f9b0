//! API key handling

use super::error::{GeminiError, Result};

/// Gemini API key
///
/// `Debug` output never shows the key itself.
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Option<Self> {
        let key = key.into().trim().to_string();
        if key.is_empty() { None } else { Some(Self(key)) }
    }

    /// Read the key from the environment variable `var`.
    pub fn from_env(var: &str) -> Result<Self> {
        std::env::var(var)
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| GeminiError::MissingApiKey(var.to_string()))
    }

    pub(crate) fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(****)")
    }
}
