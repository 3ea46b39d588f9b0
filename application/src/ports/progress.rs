//! Progress notification port
//!
//! Defines the interface for narrating a run. Narration is optional and
//! never carries the result itself.

use tokinfo_domain::{RunPhase, Stage};

/// Callback for progress updates during a run
///
/// Implementations live in the presentation layer.
pub trait ProgressNotifier: Send + Sync {
    /// Called each time the run enters a new phase
    fn on_phase(&self, phase: RunPhase);

    /// Called right before a remote call is issued
    fn on_stage_start(&self, stage: Stage);

    /// Called when a remote call returns, successfully or not
    fn on_stage_complete(&self, stage: Stage, success: bool);

    /// Called before clarifying questions are asked
    fn on_questions(&self, _count: usize) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_phase(&self, _phase: RunPhase) {}
    fn on_stage_start(&self, _stage: Stage) {}
    fn on_stage_complete(&self, _stage: Stage, _success: bool) {}
}
