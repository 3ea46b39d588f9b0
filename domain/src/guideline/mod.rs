//! Prompt-engineering guideline catalog.
//!
//! A [`GuidelineSet`](entities::GuidelineSet) is the introduction text plus
//! every known [`Technique`](entities::Technique). It is loaded once per run
//! and never mutated afterwards.

pub mod entities;
