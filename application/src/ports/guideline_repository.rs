//! Guideline repository port
//!
//! Loads the technique catalog the run works from.

use std::path::PathBuf;
use thiserror::Error;
use tokinfo_domain::{DomainError, GuidelineSet};

/// Errors raised while loading the guideline set
#[derive(Error, Debug)]
pub enum GuidelineError {
    #[error("Failed to read guidelines file '{}': {reason}", path.display())]
    Unreadable { path: PathBuf, reason: String },

    #[error("Failed to parse guidelines file '{}': {reason}", path.display())]
    Malformed { path: PathBuf, reason: String },

    #[error("Guidelines file '{}' is incomplete", path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: DomainError,
    },
}

/// Source of the guideline set
pub trait GuidelineRepository: Send + Sync {
    fn load(&self) -> Result<GuidelineSet, GuidelineError>;
}

/// Repository over an already-built guideline set
pub struct InMemoryGuidelines {
    guidelines: GuidelineSet,
}

impl InMemoryGuidelines {
    pub fn new(guidelines: GuidelineSet) -> Self {
        Self { guidelines }
    }
}

impl GuidelineRepository for InMemoryGuidelines {
    fn load(&self) -> Result<GuidelineSet, GuidelineError> {
        Ok(self.guidelines.clone())
    }
}
