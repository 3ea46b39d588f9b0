//! LLM Gateway port
//!
//! Defines the interface for the two remote stages. Each stage has its own
//! request type and result type so the structured-output contract of the
//! analyze stage never leaks into the free-text refine stage.

use async_trait::async_trait;
use thiserror::Error;
use tokinfo_domain::{AnalysisOutcome, AnswerSet};

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Request failed (HTTP {status}): {message}")]
    RequestFailed { status: u16, message: String },

    #[error("Model returned no text")]
    EmptyResponse,

    #[error("Prompt blocked by the model: {0}")]
    Blocked(String),

    #[error("Malformed structured response: {error}\nRaw response: {raw}")]
    MalformedResponse { error: String, raw: String },
}

impl GatewayError {
    /// Check if this error means the credential was missing or rejected
    pub fn is_auth(&self) -> bool {
        matches!(self, GatewayError::Authentication(_))
    }
}

/// Input of the analyze stage
#[derive(Debug, Clone)]
pub struct AnalyzeRequest {
    pub introduction: String,
    /// One `- name: summary` line per technique
    pub technique_catalog: String,
    pub user_prompt: String,
}

/// Input of the refine stage
#[derive(Debug, Clone)]
pub struct RefineRequest {
    pub introduction: String,
    /// Full description of the chosen technique
    pub technique_description: String,
    pub user_prompt: String,
    pub answers: AnswerSet,
}

/// Gateway for the remote inference service
///
/// This port defines how the application layer talks to the model.
/// Implementations (adapters) live in the infrastructure layer. Neither
/// call is retried; any error ends the run.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Stage 1: choose a technique and propose clarifying questions
    async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalysisOutcome, GatewayError>;

    /// Stage 2: rewrite the prompt; the model text is returned as-is
    async fn refine(&self, request: &RefineRequest) -> Result<String, GatewayError>;
}
