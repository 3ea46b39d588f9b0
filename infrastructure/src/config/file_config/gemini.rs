//! Gemini API configuration from TOML (`[gemini]` section)

use serde::{Deserialize, Serialize};

/// Default model used for both stages
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";

/// Public Generative Language API endpoint
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Environment variable holding the API key
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Gemini API provider configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    /// Model name (default: "gemini-2.0-flash").
    pub model: String,
    /// Base URL for the Generative Language API.
    pub base_url: String,
    /// Environment variable name for the API key (default: "GEMINI_API_KEY").
    pub api_key_env: String,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
        }
    }
}
