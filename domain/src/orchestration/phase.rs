//! Phases of a single enhancement run

use serde::{Deserialize, Serialize};

/// Phase of an enhancement run
///
/// The run moves strictly forward: `Idle → Loaded → Analyzed → Answered →
/// Refined → Done`. No phase is ever re-entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RunPhase {
    /// Nothing loaded yet
    Idle,
    /// Guideline set loaded
    Loaded,
    /// Stage 1 returned a technique and questions
    Analyzed,
    /// Answers collected (possibly none)
    Answered,
    /// Stage 2 returned the enhanced prompt
    Refined,
    /// Result handed to the caller
    Done,
}

impl RunPhase {
    /// The phase that follows this one, or `None` after `Done`.
    pub fn next(self) -> Option<RunPhase> {
        match self {
            RunPhase::Idle => Some(RunPhase::Loaded),
            RunPhase::Loaded => Some(RunPhase::Analyzed),
            RunPhase::Analyzed => Some(RunPhase::Answered),
            RunPhase::Answered => Some(RunPhase::Refined),
            RunPhase::Refined => Some(RunPhase::Done),
            RunPhase::Done => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RunPhase::Idle => "idle",
            RunPhase::Loaded => "loaded",
            RunPhase::Analyzed => "analyzed",
            RunPhase::Answered => "answered",
            RunPhase::Refined => "refined",
            RunPhase::Done => "done",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RunPhase::Idle => "Starting",
            RunPhase::Loaded => "Guidelines loaded",
            RunPhase::Analyzed => "Prompt analyzed",
            RunPhase::Answered => "Answers collected",
            RunPhase::Refined => "Prompt refined",
            RunPhase::Done => "Done",
        }
    }
}

impl std::fmt::Display for RunPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Which remote call is in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    Analyze,
    Refine,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Analyze => "analyze",
            Stage::Refine => "refine",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Stage::Analyze => "Stage 1: Analysis",
            Stage::Refine => "Stage 2: Refinement",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
