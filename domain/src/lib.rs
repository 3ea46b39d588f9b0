//! Domain layer for tokinfo
//!
//! This crate contains the core entities and value objects of the prompt
//! enhancement flow. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! - **Guideline set**: the introduction text plus every known technique
//! - **Analysis**: the technique the model picked and the questions it wants answered
//! - **Answers**: operator replies, keyed by question position
//! - **Enhanced prompt**: the rewritten prompt returned by the refine stage

pub mod analysis;
pub mod core;
pub mod guideline;
pub mod input;
pub mod orchestration;
pub mod prompt;

// Re-export commonly used types
pub use analysis::{
    answers::{Answer, AnswerSet},
    entities::{AnalysisOutcome, ClarifyingQuestion},
};
pub use core::{error::DomainError, string::preview};
pub use guideline::entities::{GuidelineSet, Technique};
pub use input::source::{DOCUMENT_EXTENSIONS, PromptSource};
pub use orchestration::{
    phase::{RunPhase, Stage},
    value_objects::EnhancedPrompt,
};
pub use prompt::PromptTemplate;
