//! Debate entities
//!
//! These are the persisted artifacts of a debate run:
//! - [`PhaseResult`] - one engine call for one phase of one step
//! - [`StepDebate`] - all phases for a step plus the derived summary
//! - [`Debate`] - every step of a proposal, stamped with completion time

use super::phase::DebatePhase;
use super::risk::{DebateSummary, classify_risk};
use crate::proposal::Step;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Outcome of a single phase invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseResult {
    pub phase: DebatePhase,
    /// Engine bound to this phase
    pub model: String,
    /// Exact text sent to the engine
    pub prompt: String,
    /// Engine output, or the error text when the call failed
    pub output: String,
    /// Wall time of the call in seconds, two decimals
    pub duration_s: f64,
    /// Set iff the call failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PhaseResult {
    pub fn success(
        phase: DebatePhase,
        model: impl Into<String>,
        prompt: impl Into<String>,
        output: impl Into<String>,
        duration: Duration,
    ) -> Self {
        Self {
            phase,
            model: model.into(),
            prompt: prompt.into(),
            output: output.into(),
            duration_s: round_secs(duration),
            error: None,
        }
    }

    /// A failed call: `output` mirrors the error text
    pub fn failure(
        phase: DebatePhase,
        model: impl Into<String>,
        prompt: impl Into<String>,
        error: impl Into<String>,
        duration: Duration,
    ) -> Self {
        let error = error.into();
        Self {
            phase,
            model: model.into(),
            prompt: prompt.into(),
            output: error.clone(),
            duration_s: round_secs(duration),
            error: Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Seconds rounded to two decimals
pub fn round_secs(duration: Duration) -> f64 {
    (duration.as_secs_f64() * 100.0).round() / 100.0
}

/// The debate record for one step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepDebate {
    pub step_id: String,
    pub command: String,
    pub summary: DebateSummary,
    /// One result per phase, canonical order
    pub phases: Vec<PhaseResult>,
}

impl StepDebate {
    /// Aggregate phase results for `step`
    ///
    /// Results may arrive in any order; they are sorted into canonical phase
    /// order before the summary is derived. The summary depends only on the
    /// safety phase: a failed or missing safety phase yields the neutral
    /// summary.
    pub fn aggregate(step: &Step, mut phases: Vec<PhaseResult>) -> Self {
        phases.sort_by_key(|p| p.phase.ordinal());

        let summary = phases
            .iter()
            .find(|p| p.phase == DebatePhase::Safety)
            .filter(|p| p.is_success())
            .map(|p| classify_risk(&p.output))
            .unwrap_or_else(DebateSummary::neutral);

        Self {
            step_id: step.id.clone(),
            command: step.command.clone(),
            summary,
            phases,
        }
    }

    pub fn phase(&self, phase: DebatePhase) -> Option<&PhaseResult> {
        self.phases.iter().find(|p| p.phase == phase)
    }

    pub fn failed_phases(&self) -> impl Iterator<Item = &PhaseResult> {
        self.phases.iter().filter(|p| !p.is_success())
    }
}

/// A complete debate over one proposal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Debate {
    /// Task of the source proposal
    pub task: String,
    /// Completion time, seconds since the epoch
    pub timestamp: i64,
    /// ISO-8601 rendering of `timestamp`
    pub time: String,
    pub steps: Vec<StepDebate>,
}

impl Debate {
    pub fn new(
        task: impl Into<String>,
        timestamp: i64,
        time: impl Into<String>,
        steps: Vec<StepDebate>,
    ) -> Self {
        Self {
            task: task.into(),
            timestamp,
            time: time.into(),
            steps,
        }
    }

    /// Highest risk level across all steps
    pub fn overall_risk(&self) -> Option<super::risk::RiskLevel> {
        self.steps.iter().map(|s| s.summary.risk_level).max()
    }

    pub fn failed_phase_count(&self) -> usize {
        self.steps.iter().map(|s| s.failed_phases().count()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debate::risk::RiskLevel;

    fn step() -> Step {
        Step::new("step-1", "disk cleanup", "echo \"disk cleanup\"", "low")
    }

    fn ok(phase: DebatePhase, output: &str) -> PhaseResult {
        PhaseResult::success(phase, "m", "p", output, Duration::from_millis(1234))
    }

    fn failed(phase: DebatePhase) -> PhaseResult {
        PhaseResult::failure(phase, "m", "p", "m unavailable (boom)", Duration::from_millis(5))
    }

    #[test]
    fn test_duration_rounding() {
        assert_eq!(round_secs(Duration::from_millis(1234)), 1.23);
        assert_eq!(round_secs(Duration::from_millis(1239)), 1.24);
        assert_eq!(round_secs(Duration::ZERO), 0.0);
    }

    #[test]
    fn test_failure_mirrors_error_in_output() {
        let result = failed(DebatePhase::Explanation);
        assert!(!result.is_success());
        assert_eq!(result.output, "m unavailable (boom)");
        assert_eq!(result.error.as_deref(), Some("m unavailable (boom)"));
    }

    #[test]
    fn test_error_omitted_on_success() {
        let json = serde_json::to_value(ok(DebatePhase::Safety, "fine")).unwrap();
        assert!(json.get("error").is_none());
        assert_eq!(json["phase"], "safety");
        assert_eq!(json["duration_s"], 1.23);
    }

    #[test]
    fn test_aggregate_sorts_phases() {
        let phases = vec![
            ok(DebatePhase::UncensoredReview, "x"),
            ok(DebatePhase::Safety, "safe"),
            ok(DebatePhase::Interpretation, "x"),
            ok(DebatePhase::AlternateView, "x"),
            ok(DebatePhase::Explanation, "x"),
        ];
        let debate = StepDebate::aggregate(&step(), phases);
        let order: Vec<_> = debate.phases.iter().map(|p| p.phase).collect();
        assert_eq!(order, DebatePhase::ALL.to_vec());
        assert_eq!(debate.summary.risk_level, RiskLevel::Low);
        assert_eq!(debate.step_id, "step-1");
        assert_eq!(debate.command, "echo \"disk cleanup\"");
    }

    #[test]
    fn test_aggregate_failed_safety_is_neutral() {
        let phases = DebatePhase::ALL.iter().map(|p| failed(*p)).collect();
        let debate = StepDebate::aggregate(&step(), phases);
        assert_eq!(debate.summary, DebateSummary::neutral());
        assert_eq!(debate.failed_phases().count(), 5);
    }

    #[test]
    fn test_aggregate_uses_only_safety() {
        let phases = vec![
            ok(DebatePhase::Interpretation, "irreversible data loss"),
            ok(DebatePhase::Safety, "nothing notable"),
        ];
        let debate = StepDebate::aggregate(&step(), phases);
        assert_eq!(debate.summary.risk_level, RiskLevel::Medium);
    }

    #[test]
    fn test_overall_risk() {
        let low = StepDebate::aggregate(&step(), vec![ok(DebatePhase::Safety, "safe")]);
        let high = StepDebate::aggregate(&step(), vec![ok(DebatePhase::Safety, "danger")]);
        let debate = Debate::new("t", 0, "1970-01-01T00:00:00", vec![low, high]);
        assert_eq!(debate.overall_risk(), Some(RiskLevel::High));
        assert_eq!(Debate::new("t", 0, "", vec![]).overall_risk(), None);
    }
}
