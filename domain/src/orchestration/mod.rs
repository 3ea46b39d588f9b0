//! Run orchestration domain
//!
//! A run is a single linear pass through the phases in [`phase::RunPhase`].

pub mod phase;
pub mod value_objects;
