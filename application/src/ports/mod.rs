//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters
//! must implement.

pub mod answer_source;
pub mod guideline_repository;
pub mod llm_gateway;
pub mod progress;
