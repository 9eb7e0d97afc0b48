//! Planning: turning a free-text task into a [`Proposal`]
//!
//! [`Planner`] is the seam for smarter planning logic. The only
//! implementation today is [`EchoPlanner`], which wraps the whole task in a
//! single quoted `echo` step.

use super::entities::{Proposal, Step};

/// Confidence assigned to every auto-generated proposal
pub const DEFAULT_CONFIDENCE: f64 = 0.4;

/// Sentinel printed when a planning run has nothing to do
pub const NO_ACTION: &str = "NO_ACTION";

/// Result of a planning attempt
#[derive(Debug, Clone, PartialEq)]
pub enum PlanOutcome {
    /// A proposal was produced
    Proposal(Proposal),
    /// The task was empty; nothing to plan
    NoAction,
}

impl PlanOutcome {
    pub fn is_no_action(&self) -> bool {
        matches!(self, PlanOutcome::NoAction)
    }

    pub fn proposal(&self) -> Option<&Proposal> {
        match self {
            PlanOutcome::Proposal(p) => Some(p),
            PlanOutcome::NoAction => None,
        }
    }
}

/// Turns a task description into a proposal
pub trait Planner: Send + Sync {
    fn plan(&self, task: &str) -> PlanOutcome;
}

/// Minimal planner: one low-risk step that echoes the task
///
/// # Example
///
/// ```
/// use autonomy_domain::proposal::{EchoPlanner, PlanOutcome, Planner};
///
/// let outcome = EchoPlanner.plan("disk cleanup");
/// let proposal = outcome.proposal().unwrap();
/// assert_eq!(proposal.steps[0].command, r#"echo "disk cleanup""#);
///
/// assert_eq!(EchoPlanner.plan("   "), PlanOutcome::NoAction);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct EchoPlanner;

impl EchoPlanner {
    /// Quote the task as a JSON string literal so the command is a literal echo
    pub fn echo_command(task: &str) -> String {
        format!("echo {}", serde_json::Value::String(task.to_string()))
    }
}

impl Planner for EchoPlanner {
    fn plan(&self, task: &str) -> PlanOutcome {
        let task = task.trim();
        if task.is_empty() {
            return PlanOutcome::NoAction;
        }

        let step = Step::new("step-1", task, Self::echo_command(task), "low");
        PlanOutcome::Proposal(Proposal::new(task, DEFAULT_CONFIDENCE, vec![step]))
    }
}
