//! Progress reporting for a prompt enhancement run

use colored::Colorize;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;
use tokinfo_application::ProgressNotifier;
use tokinfo_domain::{RunPhase, Stage};

/// Draws a spinner on stderr while a remote call is in flight
pub struct ProgressReporter {
    target: fn() -> ProgressDrawTarget,
    stage_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self::with_draw_target(ProgressDrawTarget::stderr)
    }

    pub fn with_draw_target(target: fn() -> ProgressDrawTarget) -> Self {
        Self {
            target,
            stage_bar: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    #[cfg(test)]
    fn is_active(&self) -> bool {
        self.stage_bar
            .lock()
            .map(|bar| bar.is_some())
            .unwrap_or(false)
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_phase(&self, phase: RunPhase) {
        if phase == RunPhase::Done
            && let Ok(mut bar) = self.stage_bar.lock()
            && let Some(pb) = bar.take()
        {
            pb.finish_and_clear();
        }
    }

    fn on_stage_start(&self, stage: Stage) {
        let pb = ProgressBar::with_draw_target(None, (self.target)());
        pb.set_style(Self::spinner_style());
        pb.set_prefix(stage.display_name());
        pb.set_message("Waiting for Gemini...");
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut bar) = self.stage_bar.lock()
            && let Some(previous) = bar.replace(pb)
        {
            previous.finish_and_clear();
        }
    }

    fn on_stage_complete(&self, stage: Stage, success: bool) {
        let Ok(mut bar) = self.stage_bar.lock() else {
            return;
        };
        if let Some(pb) = bar.take() {
            let status = if success {
                format!("{} {} complete", "v".green(), stage.display_name())
            } else {
                format!("{} {} failed", "x".red(), stage.display_name())
            };
            pb.set_prefix("");
            pb.finish_with_message(status);
        }
    }
}
