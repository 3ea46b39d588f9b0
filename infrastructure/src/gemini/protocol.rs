//! Wire types for the Gemini `generateContent` endpoint.
//!
//! Only the subset of the API this tool needs is modelled:
//!
//! - **Request**: one user turn with a text part, plus optional generation config
//! - **Response**: candidates with text parts, and prompt feedback when blocked
//! - **Error**: the `{"error": {...}}` envelope returned with non-2xx statuses

use super::error::{GeminiError, Result};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Request body for `models/{model}:generateContent`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    /// A single user turn carrying `prompt`.
    pub fn user_text(prompt: impl Into<String>, config: Option<GenerationConfig>) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(prompt.into()),
                }],
            }],
            generation_config: config,
        }
    }
}

/// A conversation turn
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// A content part; non-text parts deserialize with `text: None`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Generation parameters
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<serde_json::Value>,
}

impl GenerationConfig {
    /// Constrain the response to JSON matching `schema`.
    pub fn structured(schema: serde_json::Value) -> Self {
        Self {
            response_mime_type: Some("application/json".to_string()),
            response_schema: Some(schema),
        }
    }
}

/// Response schema for the analyze stage.
pub fn analysis_response_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "ChoseTechnique": {
                "type": "STRING",
                "description": "The name of the chosen technique from the guide."
            },
            "ClarifyingQuestions": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "question": {
                            "type": "STRING",
                            "description": "The clarifying question to ask the user."
                        },
                        "exampleAnswer": {
                            "type": "STRING",
                            "description": "A sample answer the user might give."
                        }
                    },
                    "required": ["question", "exampleAnswer"],
                    "propertyOrdering": ["question", "exampleAnswer"]
                }
            }
        },
        "required": ["ChoseTechnique", "ClarifyingQuestions"],
        "propertyOrdering": ["ChoseTechnique", "ClarifyingQuestions"]
    })
}

/// Response body of `generateContent`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate.
    ///
    /// A blocked prompt yields [`GeminiError::Blocked`]; a candidate with no
    /// text yields [`GeminiError::EmptyResponse`].
    pub fn into_text(self) -> Result<String> {
        if self.candidates.is_empty()
            && let Some(reason) = self.prompt_feedback.and_then(|f| f.block_reason)
        {
            return Err(GeminiError::Blocked(reason));
        }

        let text: String = self
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect()
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(GeminiError::EmptyResponse);
        }
        Ok(text)
    }
}

/// Error envelope returned alongside non-2xx statuses
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorEnvelope {
    pub error: ApiErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: Option<u16>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
}

impl ApiErrorEnvelope {
    pub fn parse(body: &str) -> Option<ApiErrorBody> {
        serde_json::from_str::<ApiErrorEnvelope>(body)
            .ok()
            .map(|e| e.error)
    }
}

/// Map a non-2xx response to a [`GeminiError`].
///
/// Gemini reports an invalid key as `400 INVALID_ARGUMENT` with a message
/// naming the key, so that case counts as unauthorized as well.
pub fn classify_error(status: u16, body: &str) -> GeminiError {
    let parsed = ApiErrorEnvelope::parse(body);
    let message = match &parsed {
        Some(err) if !err.message.is_empty() => err.message.clone(),
        _ => tokinfo_domain::preview(body, 300),
    };

    let key_rejected = status == 400 && message.contains("API key");
    if status == 401 || status == 403 || key_rejected {
        GeminiError::Unauthorized { status, message }
    } else {
        GeminiError::Api { status, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let request = GenerateContentRequest::user_text(
            "Explain gravity",
            Some(GenerationConfig::structured(analysis_response_schema())),
        );
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "Explain gravity");
        assert_eq!(
            body["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(
            body["generationConfig"]["responseSchema"]["required"],
            json!(["ChoseTechnique", "ClarifyingQuestions"])
        );
    }

    #[test]
    fn test_request_without_config_omits_field() {
        let request = GenerateContentRequest::user_text("Rewrite this", None);
        let body = serde_json::to_value(&request).unwrap();
        assert!(body.get("generationConfig").is_none());
    }

    #[test]
    fn test_schema_requires_both_question_fields() {
        let schema = analysis_response_schema();
        assert_eq!(
            schema["properties"]["ClarifyingQuestions"]["items"]["required"],
            json!(["question", "exampleAnswer"])
        );
    }

    #[test]
    fn test_into_text_concatenates_parts() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"Hello, "},{"text":"world"}]},"finishReason":"STOP"}]}"#,
        )
        .unwrap();
        assert_eq!(response.into_text().unwrap(), "Hello, world");
    }

    #[test]
    fn test_into_text_blocked_prompt() {
        let response: GenerateContentResponse =
            serde_json::from_str(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#).unwrap();
        assert!(matches!(
            response.into_text(),
            Err(GeminiError::Blocked(reason)) if reason == "SAFETY"
        ));
    }

    #[test]
    fn test_into_text_empty_candidate() {
        let response: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates":[{"finishReason":"MAX_TOKENS"}]}"#).unwrap();
        assert!(matches!(response.into_text(), Err(GeminiError::EmptyResponse)));
    }

    #[test]
    fn test_classify_error_uses_envelope_message() {
        let body = r#"{"error":{"code":429,"message":"Resource has been exhausted","status":"RESOURCE_EXHAUSTED"}}"#;
        match classify_error(429, body) {
            GeminiError::Api { status, message } => {
                assert_eq!(status, 429);
                assert_eq!(message, "Resource has been exhausted");
            }
            other => panic!("Expected Api, got {:?}", other),
        }
    }

    #[test]
    fn test_classify_error_invalid_key() {
        let body = r#"{"error":{"code":400,"message":"API key not valid. Please pass a valid API key.","status":"INVALID_ARGUMENT"}}"#;
        assert!(matches!(
            classify_error(400, body),
            GeminiError::Unauthorized { status: 400, .. }
        ));
        assert!(matches!(
            classify_error(403, "forbidden"),
            GeminiError::Unauthorized { .. }
        ));
    }

    #[test]
    fn test_classify_error_non_json_body() {
        match classify_error(502, "<html>Bad Gateway</html>") {
            GeminiError::Api { message, .. } => assert_eq!(message, "<html>Bad Gateway</html>"),
            other => panic!("Expected Api, got {:?}", other),
        }
    }
}
