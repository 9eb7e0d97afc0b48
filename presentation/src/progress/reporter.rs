//! Progress reporting for debate runs
//!
//! Both reporters write to stderr so `--output json` keeps stdout clean.

use autonomy_application::ports::progress::DebateProgressNotifier;
use autonomy_domain::{DebatePhase, PhaseResult, Step, StepDebate};
use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::Mutex;

/// Reports progress with one bar per step
pub struct ProgressReporter {
    multi: MultiProgress,
    step_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::with_draw_target(ProgressDrawTarget::stderr()),
            step_bar: Mutex::new(None),
        }
    }

    fn step_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn phase_status(result: &PhaseResult) -> String {
        if result.is_success() {
            format!("{} {}", "v".green(), result.phase)
        } else {
            format!("{} {}", "x".red(), result.phase)
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl DebateProgressNotifier for ProgressReporter {
    fn on_step_start(&self, step: &Step, index: usize, total_steps: usize) {
        let pb = self
            .multi
            .add(ProgressBar::new(DebatePhase::ALL.len() as u64));
        pb.set_style(Self::step_style());
        pb.set_prefix(format!("Step {}/{} {}", index + 1, total_steps, step.id));
        pb.set_message("Debating...");
        pb.enable_steady_tick(std::time::Duration::from_millis(120));

        if let Ok(mut slot) = self.step_bar.lock() {
            *slot = Some(pb);
        }
    }

    fn on_phase_complete(&self, _step_id: &str, result: &PhaseResult) {
        if let Ok(slot) = self.step_bar.lock()
            && let Some(pb) = slot.as_ref()
        {
            pb.set_message(Self::phase_status(result));
            pb.inc(1);
        }
    }

    fn on_step_complete(&self, debate: &StepDebate) {
        let taken = self.step_bar.lock().ok().and_then(|mut slot| slot.take());
        if let Some(pb) = taken {
            pb.finish_with_message(format!(
                "risk={} agreement={:.2}",
                debate.summary.risk_level, debate.summary.agreement
            ));
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl DebateProgressNotifier for SimpleProgress {
    fn on_step_start(&self, step: &Step, index: usize, total_steps: usize) {
        eprintln!(
            "{} {} ({}/{}) {}",
            "->".cyan(),
            step.id.bold(),
            index + 1,
            total_steps,
            step.command.dimmed()
        );
    }

    fn on_phase_complete(&self, _step_id: &str, result: &PhaseResult) {
        if result.is_success() {
            eprintln!(
                "  {} {} ({}, {:.2}s)",
                "v".green(),
                result.phase,
                result.model,
                result.duration_s
            );
        } else {
            eprintln!(
                "  {} {} ({}) failed: {}",
                "x".red(),
                result.phase,
                result.model,
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    fn on_step_complete(&self, debate: &StepDebate) {
        eprintln!(
            "  = risk={} agreement={:.2}",
            debate.summary.risk_level, debate.summary.agreement
        );
    }

    fn on_debate_complete(&self, debate: &autonomy_domain::Debate) {
        eprintln!("{} {} step(s) debated", "done:".green().bold(), debate.steps.len());
    }
}
