//! Prompt input resolution

use super::PromptIoError;
use std::fs;
use tokinfo_domain::PromptSource;
use tracing::debug;

/// Resolve the raw prompt argument to prompt text.
///
/// Arguments ending in `.txt` or `.md` are read as files, in full.
/// Anything else is the prompt itself and must not be empty.
pub fn resolve_input(raw: &str) -> Result<String, PromptIoError> {
    match PromptSource::classify(raw) {
        PromptSource::File(path) => {
            debug!("Reading prompt from file: {}", path.display());
            fs::read_to_string(&path).map_err(|e| PromptIoError::Unreadable {
                path,
                reason: e.to_string(),
            })
        }
        PromptSource::Inline(text) => {
            if text.is_empty() {
                return Err(PromptIoError::EmptyPrompt);
            }
            Ok(text)
        }
    }
}
