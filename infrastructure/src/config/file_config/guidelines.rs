//! Guideline catalog configuration from TOML (`[guidelines]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw guidelines configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGuidelinesConfig {
    /// Path to the JSON guideline file, relative to the working directory
    pub path: PathBuf,
}

impl Default for FileGuidelinesConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("guidelines.json"),
        }
    }
}
