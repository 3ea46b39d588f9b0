//! Analysis entities

use serde::{Deserialize, Serialize};

/// A question proposed by the model before rewriting (Value Object)
///
/// `example_answer` is only ever displayed to the operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClarifyingQuestion {
    pub question: String,
    #[serde(rename = "exampleAnswer")]
    pub example_answer: String,
}

impl ClarifyingQuestion {
    pub fn new(question: impl Into<String>, example_answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            example_answer: example_answer.into(),
        }
    }
}

/// Result of the analyze stage
///
/// Field names on the wire follow the structured-output schema sent to the
/// model: `ChoseTechnique` and `ClarifyingQuestions`, both required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisOutcome {
    #[serde(rename = "ChoseTechnique")]
    pub chosen_technique: String,
    #[serde(rename = "ClarifyingQuestions")]
    pub clarifying_questions: Vec<ClarifyingQuestion>,
}

impl AnalysisOutcome {
    pub fn new(
        chosen_technique: impl Into<String>,
        clarifying_questions: Vec<ClarifyingQuestion>,
    ) -> Self {
        Self {
            chosen_technique: chosen_technique.into(),
            clarifying_questions,
        }
    }

    /// Parse the model's structured response text.
    ///
    /// Both top-level fields and both fields of every question must be
    /// present. Unknown extra keys are ignored.
    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text.trim())
    }

    pub fn has_questions(&self) -> bool {
        !self.clarifying_questions.is_empty()
    }
}
