//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly; every section falls back to defaults.

mod gemini;
mod guidelines;

pub use gemini::FileGeminiConfig;
pub use guidelines::FileGuidelinesConfig;

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("gemini.model cannot be empty")]
    EmptyModelName,

    #[error("gemini.base_url must start with http:// or https:// (got '{0}')")]
    InvalidBaseUrl(String),

    #[error("gemini.api_key_env cannot be empty")]
    EmptyApiKeyEnv,

    #[error("guidelines.path cannot be empty")]
    EmptyGuidelinesPath,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Gemini API settings
    pub gemini: FileGeminiConfig,
    /// Guideline catalog location
    pub guidelines: FileGuidelinesConfig,
}

impl FileConfig {
    /// Apply command-line flags, which win over every loaded source
    pub fn apply_overrides(&mut self, model: Option<&str>, guidelines: Option<&Path>) {
        if let Some(model) = model {
            self.gemini.model = model.to_string();
        }
        if let Some(path) = guidelines {
            self.guidelines.path = path.to_path_buf();
        }
    }

    /// Validate the configuration, returning the first problem found.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.gemini.model.trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName);
        }
        let url = self.gemini.base_url.as_str();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigValidationError::InvalidBaseUrl(url.to_string()));
        }
        if self.gemini.api_key_env.trim().is_empty() {
            return Err(ConfigValidationError::EmptyApiKeyEnv);
        }
        if self.guidelines.path.as_os_str().is_empty() {
            return Err(ConfigValidationError::EmptyGuidelinesPath);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[gemini]
model = "gemini-2.5-pro"
base_url = "http://localhost:8080"
api_key_env = "MY_GEMINI_KEY"

[guidelines]
path = "config/techniques.json"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.gemini.model, "gemini-2.5-pro");
        assert_eq!(config.gemini.base_url, "http://localhost:8080");
        assert_eq!(config.gemini.api_key_env, "MY_GEMINI_KEY");
        assert_eq!(config.guidelines.path, PathBuf::from("config/techniques.json"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: FileConfig = toml::from_str("[gemini]\nmodel = \"gemini-2.5-flash\"\n").unwrap();
        assert_eq!(config.gemini.model, "gemini-2.5-flash");
        assert_eq!(config.gemini.api_key_env, "GEMINI_API_KEY");
        assert_eq!(config.guidelines.path, PathBuf::from("guidelines.json"));
    }

    #[test]
    fn test_overrides_replace_only_given_fields() {
        let mut config: FileConfig =
            toml::from_str("[gemini]\nmodel = \"gemini-2.5-flash\"\nbase_url = \"http://localhost:8080\"\n")
                .unwrap();
        config.apply_overrides(Some("gemini-1.5-pro"), Some(Path::new("mine.json")));

        assert_eq!(config.gemini.model, "gemini-1.5-pro");
        assert_eq!(config.guidelines.path, PathBuf::from("mine.json"));
        assert_eq!(config.gemini.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_no_overrides_keeps_config() {
        let mut config = FileConfig::default();
        config.apply_overrides(None, None);
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(FileConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_model() {
        let mut config = FileConfig::default();
        config.gemini.model = " ".to_string();
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptyModelName));
    }

    #[test]
    fn test_validate_rejects_bad_base_url() {
        let mut config = FileConfig::default();
        config.gemini.base_url = "generativelanguage.googleapis.com".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn test_validate_rejects_empty_guidelines_path() {
        let mut config = FileConfig::default();
        config.guidelines.path = PathBuf::new();
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::EmptyGuidelinesPath)
        );
    }
}
