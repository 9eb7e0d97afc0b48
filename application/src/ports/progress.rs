//! Progress notification port
//!
//! Defines the interface for reporting progress during a debate run.

use autonomy_domain::{Debate, PhaseResult, Step, StepDebate};

/// Callback for progress updates during a debate
///
/// Implementations live in the presentation layer.
pub trait DebateProgressNotifier: Send + Sync {
    /// Called before the first phase of a step
    fn on_step_start(&self, step: &Step, index: usize, total_steps: usize);

    /// Called as each phase resolves (completion order in parallel mode)
    fn on_phase_complete(&self, step_id: &str, result: &PhaseResult);

    /// Called once the step is aggregated
    fn on_step_complete(&self, debate: &StepDebate);

    fn on_debate_start(&self, _task: &str, _total_steps: usize) {}

    fn on_debate_complete(&self, _debate: &Debate) {}
}

/// No-op progress notifier
pub struct NoProgress;

impl DebateProgressNotifier for NoProgress {
    fn on_step_start(&self, _step: &Step, _index: usize, _total_steps: usize) {}
    fn on_phase_complete(&self, _step_id: &str, _result: &PhaseResult) {}
    fn on_step_complete(&self, _debate: &StepDebate) {}
}
