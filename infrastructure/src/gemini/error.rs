//! Error types for the Gemini adapter

use tokinfo_application::GatewayError;
use thiserror::Error;

/// Result type alias for Gemini operations
pub type Result<T> = std::result::Result<T, GeminiError>;

/// Errors that can occur when talking to the Gemini API
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("{0} environment variable not set")]
    MissingApiKey(String),

    #[error("Failed to initialize HTTP client: {0}")]
    ClientInit(String),

    #[error("HTTP transport error")]
    Http(#[from] reqwest::Error),

    #[error("API key rejected (HTTP {status}): {message}")]
    Unauthorized { status: u16, message: String },

    #[error("Gemini API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse response: {error}\nRaw response: {raw}")]
    ParseError { error: String, raw: String },

    #[error("Response contained no candidate text")]
    EmptyResponse,

    #[error("Prompt blocked: {0}")]
    Blocked(String),
}

impl From<GeminiError> for GatewayError {
    fn from(err: GeminiError) -> Self {
        match err {
            GeminiError::MissingApiKey(_)
            | GeminiError::ClientInit(_)
            | GeminiError::Unauthorized { .. } => GatewayError::Authentication(err.to_string()),
            GeminiError::Http(e) => GatewayError::Connection(e.to_string()),
            GeminiError::Api { status, message } => GatewayError::RequestFailed { status, message },
            GeminiError::ParseError { error, raw } => GatewayError::MalformedResponse { error, raw },
            GeminiError::EmptyResponse => GatewayError::EmptyResponse,
            GeminiError::Blocked(reason) => GatewayError::Blocked(reason),
        }
    }
}
