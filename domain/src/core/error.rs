//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Guideline set has an empty introduction")]
    EmptyIntroduction,

    #[error("Guideline set contains no techniques")]
    NoTechniques,
}
