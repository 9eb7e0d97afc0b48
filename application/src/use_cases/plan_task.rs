//! Plan Task use case
//!
//! Turns a free-text task into a proposal and overwrites the proposal store.

use crate::ports::store::{ProposalRepository, StoreError};
use crate::ports::trace_log::TraceLog;
use autonomy_domain::{EchoPlanner, NO_ACTION, PlanOutcome, Planner};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors that can occur while planning
#[derive(Error, Debug)]
pub enum PlanTaskError {
    #[error("Persistence failure: {0}")]
    Persistence(#[from] StoreError),
}

/// Use case for planning a task
pub struct PlanTaskUseCase<R: ProposalRepository> {
    planner: Arc<dyn Planner>,
    store: Arc<R>,
    trace: Arc<dyn TraceLog>,
}

impl<R: ProposalRepository> PlanTaskUseCase<R> {
    pub fn new(store: Arc<R>, trace: Arc<dyn TraceLog>) -> Self {
        Self {
            planner: Arc::new(EchoPlanner),
            store,
            trace,
        }
    }

    pub fn with_planner(mut self, planner: Arc<dyn Planner>) -> Self {
        self.planner = planner;
        self
    }

    /// Plan `task`; on [`PlanOutcome::NoAction`] the store is left untouched
    pub fn execute(&self, task: &str) -> Result<PlanOutcome, PlanTaskError> {
        let outcome = self.planner.plan(task);

        match &outcome {
            PlanOutcome::NoAction => {
                info!("No task provided");
                self.trace
                    .append(&format!("No task provided; {}", NO_ACTION))?;
            }
            PlanOutcome::Proposal(proposal) => {
                self.store.save(proposal)?;
                info!("Wrote proposal with {} step(s)", proposal.step_count());
                self.trace.append(&format!(
                    "Wrote proposal.json with {} step(s)",
                    proposal.step_count()
                ))?;
            }
        }

        Ok(outcome)
    }
}
