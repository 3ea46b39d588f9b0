//! Prompt input and result output
//!
//! - [`resolve_input`] turns the raw `--prompt` argument into prompt text
//! - [`emit_output`] writes the enhanced prompt to stdout or a file

mod input;
mod output;

pub use input::resolve_input;
pub use output::{emit_output, write_output};

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading the prompt or writing the result
#[derive(Error, Debug)]
pub enum PromptIoError {
    #[error("Prompt input cannot be empty")]
    EmptyPrompt,

    #[error("Failed to read prompt file '{}': {reason}", path.display())]
    Unreadable { path: PathBuf, reason: String },

    #[error("Failed to write output file '{}': {reason}", path.display())]
    WriteFailed { path: PathBuf, reason: String },

    #[error("Failed to write to standard output")]
    Stdout(#[source] std::io::Error),
}

impl PromptIoError {
    pub fn kind(&self) -> tokinfo_application::ErrorKind {
        tokinfo_application::ErrorKind::Io
    }
}
