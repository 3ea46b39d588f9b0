//! Gemini LLM Gateway implementation

use super::client::GeminiClient;
use super::protocol::{GenerationConfig, analysis_response_schema};
use async_trait::async_trait;
use std::sync::Arc;
use tokinfo_application::{AnalyzeRequest, GatewayError, LlmGateway, RefineRequest};
use tokinfo_domain::{AnalysisOutcome, PromptTemplate, preview};
use tracing::{debug, warn};

/// LLM Gateway implementation for the Gemini API
///
/// The analyze stage runs with a JSON response schema; the refine stage runs
/// unconstrained and its text is passed through untouched.
pub struct GeminiLlmGateway {
    client: Arc<GeminiClient>,
}

impl GeminiLlmGateway {
    pub fn new(client: Arc<GeminiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl LlmGateway for GeminiLlmGateway {
    async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalysisOutcome, GatewayError> {
        let prompt = PromptTemplate::analyze(
            &request.introduction,
            &request.technique_catalog,
            &request.user_prompt,
        );
        let config = GenerationConfig::structured(analysis_response_schema());

        let text = self.client.generate(&prompt, Some(config)).await?;
        debug!("Analysis response: {}", preview(&text, 300));

        AnalysisOutcome::parse(&text).map_err(|e| {
            warn!("Analysis response does not match the schema: {}", e);
            GatewayError::MalformedResponse {
                error: e.to_string(),
                raw: text,
            }
        })
    }

    async fn refine(&self, request: &RefineRequest) -> Result<String, GatewayError> {
        let prompt = PromptTemplate::refine(
            &request.introduction,
            &request.technique_description,
            &request.user_prompt,
            &request.answers,
        );

        let text = self.client.generate(&prompt, None).await?;
        debug!("Refined prompt: {}", preview(&text, 300));
        Ok(text)
    }
}
