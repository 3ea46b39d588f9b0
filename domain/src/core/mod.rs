//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`]: domain-level validation errors
//! - [`string::preview`]: single-line previews for diagnostics

pub mod error;
pub mod string;
