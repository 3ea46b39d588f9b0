//! Prompt source value object

use std::path::{Path, PathBuf};

/// File extensions that mark the prompt argument as a document path
pub const DOCUMENT_EXTENSIONS: &[&str] = &["txt", "md"];

/// Where the user prompt comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptSource {
    /// The argument itself is the prompt
    Inline(String),
    /// The argument names a `.txt` or `.md` file holding the prompt
    File(PathBuf),
}

impl PromptSource {
    /// Classify a raw argument by its extension (case-insensitive).
    ///
    /// No filesystem access happens here; a missing file is only detected
    /// when the source is read.
    pub fn classify(raw: &str) -> Self {
        if has_document_extension(Path::new(raw)) {
            PromptSource::File(PathBuf::from(raw))
        } else {
            PromptSource::Inline(raw.to_string())
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, PromptSource::File(_))
    }
}

fn has_document_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            DOCUMENT_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}
