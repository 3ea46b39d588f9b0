//! Prompt templates for both remote stages

pub mod template;

pub use template::PromptTemplate;
