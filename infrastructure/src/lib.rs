//! Infrastructure layer for tokinfo
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration and file I/O.

pub mod config;
pub mod gemini;
pub mod guidelines;
pub mod io;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileGeminiConfig, FileGuidelinesConfig,
};
pub use gemini::{
    auth::ApiKey,
    client::GeminiClient,
    error::{GeminiError, Result},
    gateway::GeminiLlmGateway,
};
pub use guidelines::JsonGuidelineStore;
pub use io::{PromptIoError, emit_output, resolve_input, write_output};
