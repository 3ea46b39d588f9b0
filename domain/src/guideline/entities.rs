//! Guideline entities

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A named prompt-engineering technique (Value Object)
///
/// `summarized` is the one-line description shown to the model during
/// analysis; `complete` is the full methodology handed over for refinement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Technique {
    pub name: String,
    pub summarized: String,
    pub complete: String,
}

impl Technique {
    pub fn new(
        name: impl Into<String>,
        summarized: impl Into<String>,
        complete: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            summarized: summarized.into(),
            complete: complete.into(),
        }
    }

    pub fn short_description(&self) -> &str {
        &self.summarized
    }

    pub fn long_description(&self) -> &str {
        &self.complete
    }
}

/// The loaded technique catalog (Entity)
///
/// Only constructible through [`GuidelineSet::new`], so every instance has a
/// non-empty introduction and at least one technique. Name uniqueness is
/// expected of the source file but not enforced here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuidelineSet {
    introduction: String,
    techniques: Vec<Technique>,
}

impl GuidelineSet {
    pub fn new(
        introduction: impl Into<String>,
        techniques: Vec<Technique>,
    ) -> Result<Self, DomainError> {
        let introduction = introduction.into();
        if introduction.trim().is_empty() {
            return Err(DomainError::EmptyIntroduction);
        }
        if techniques.is_empty() {
            return Err(DomainError::NoTechniques);
        }
        Ok(Self {
            introduction,
            techniques,
        })
    }

    pub fn introduction(&self) -> &str {
        &self.introduction
    }

    pub fn len(&self) -> usize {
        self.techniques.len()
    }

    pub fn is_empty(&self) -> bool {
        self.techniques.is_empty()
    }

    /// Find a technique by exact, case-sensitive name. First match wins.
    pub fn lookup(&self, name: &str) -> Option<&Technique> {
        self.techniques.iter().find(|t| t.name == name)
    }

    pub fn technique_names(&self) -> Vec<&str> {
        self.techniques.iter().map(|t| t.name.as_str()).collect()
    }

    /// Catalog of `- name: summary` lines, one per technique, in file order.
    pub fn summarized_catalog(&self) -> String {
        self.techniques
            .iter()
            .map(|t| format!("- {}: {}\n", t.name, t.summarized))
            .collect()
    }
}
