//! Guideline file loader

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tokinfo_application::{GuidelineError, GuidelineRepository};
use tokinfo_domain::{GuidelineSet, Technique};
use tracing::debug;

/// Exact shape of the guideline file
#[derive(Debug, Deserialize)]
struct RawGuidelines {
    introduction: String,
    techniques: Vec<Technique>,
}

/// Loads a [`GuidelineSet`] from a JSON file.
#[derive(Debug, Clone)]
pub struct JsonGuidelineStore {
    path: PathBuf,
}

impl JsonGuidelineStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parse guideline JSON that has already been read from `path`.
    fn parse(path: &Path, content: &str) -> Result<GuidelineSet, GuidelineError> {
        let raw: RawGuidelines =
            serde_json::from_str(content).map_err(|e| GuidelineError::Malformed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        GuidelineSet::new(raw.introduction, raw.techniques).map_err(|source| {
            GuidelineError::Invalid {
                path: path.to_path_buf(),
                source,
            }
        })
    }
}

impl GuidelineRepository for JsonGuidelineStore {
    fn load(&self) -> Result<GuidelineSet, GuidelineError> {
        let content = fs::read_to_string(&self.path).map_err(|e| GuidelineError::Unreadable {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;

        let guidelines = Self::parse(&self.path, &content)?;
        debug!(
            "Loaded guidelines from {:?} ({} techniques)",
            self.path,
            guidelines.len()
        );
        Ok(guidelines)
    }
}
