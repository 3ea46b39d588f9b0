//! Gemini HTTP client.
//!
//! [`GeminiClient`] is the authenticated session with the API. It is built
//! once at startup and shared by `Arc`; dropping the last handle releases the
//! underlying connection pool.

use super::auth::ApiKey;
use super::error::{GeminiError, Result};
use super::protocol::{GenerateContentRequest, GenerateContentResponse, GenerationConfig, classify_error};
use tokinfo_domain::preview;
use tracing::{debug, trace};

const USER_AGENT: &str = concat!("tokinfo/", env!("CARGO_PKG_VERSION"));

/// Authenticated client for one Gemini model
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: ApiKey,
    base_url: String,
    model: String,
}

impl GeminiClient {
    /// Build the client.
    ///
    /// No request is sent here; a bad key surfaces on the first call.
    pub fn new(
        api_key: ApiKey,
        base_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| GeminiError::ClientInit(e.to_string()))?;

        Ok(Self::with_http_client(http, api_key, base_url, model))
    }

    /// Build the client around an existing `reqwest::Client`.
    pub fn with_http_client(
        http: reqwest::Client,
        api_key: ApiKey,
        base_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        let client = Self {
            http,
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
        };
        debug!(model = %client.model, base_url = %client.base_url, "Gemini client initialized");
        client
    }

    /// Full URL of the `generateContent` method for this model
    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    /// Send one prompt and return the text of the first candidate.
    pub async fn generate(&self, prompt: &str, config: Option<GenerationConfig>) -> Result<String> {
        let body = GenerateContentRequest::user_text(prompt, config);
        debug!(
            model = %self.model,
            structured = body.generation_config.is_some(),
            prompt_bytes = prompt.len(),
            "Calling Gemini generateContent"
        );

        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", self.api_key.expose())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        trace!(status = status.as_u16(), "Gemini response: {}", preview(&text, 500));

        if !status.is_success() {
            return Err(classify_error(status.as_u16(), &text));
        }

        let parsed: GenerateContentResponse =
            serde_json::from_str(&text).map_err(|e| GeminiError::ParseError {
                error: e.to_string(),
                raw: preview(&text, 500),
            })?;
        parsed.into_text()
    }
}

impl Drop for GeminiClient {
    fn drop(&mut self) {
        debug!(model = %self.model, "Gemini client released");
    }
}
