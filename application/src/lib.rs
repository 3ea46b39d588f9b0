//! Application layer for tokinfo
//!
//! This crate contains the enhancement use case and the port definitions
//! its adapters implement. It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    answer_source::{AnswerError, AnswerSource, NoAnswers, ScriptedAnswers},
    guideline_repository::{GuidelineError, GuidelineRepository, InMemoryGuidelines},
    llm_gateway::{AnalyzeRequest, GatewayError, LlmGateway, RefineRequest},
    progress::{NoProgress, ProgressNotifier},
};
pub use use_cases::enhance_prompt::{
    EnhancePromptError, EnhancePromptInput, EnhancePromptOutput, EnhancePromptUseCase, ErrorKind,
};
