//! Run Debate use case
//!
//! Debates every step of the stored proposal and persists the result.
//!
//! For each step the five phases run in canonical order (or concurrently
//! with `parallel_phases`), each against its bound engine. Every phase
//! yields a [`PhaseResult`] whether or not its engine answered, so one
//! unavailable engine never aborts a step or the run.

use crate::config::DebateParams;
use crate::ports::progress::{DebateProgressNotifier, NoProgress};
use crate::ports::reasoning_engine::ReasoningEngine;
use crate::ports::store::{DebateRepository, ProposalRepository, StoreError, StoreLoad};
use crate::ports::trace_log::TraceLog;
use autonomy_domain::{
    Debate, DebatePhase, DebatePromptTemplate, DomainError, PhaseResult, Proposal, Step,
    StepDebate,
};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Errors that can occur during a debate run
///
/// Engine failures are never errors; they are recorded in the debate.
#[derive(Error, Debug)]
pub enum RunDebateError {
    #[error("Persistence failure: {0}")]
    Persistence(#[from] StoreError),
}

/// Why a debate run did nothing
#[derive(Debug, Clone, PartialEq)]
pub enum NoActionReason {
    MissingProposal,
    MalformedProposal(String),
    EmptyProposal,
    InvalidProposal(DomainError),
}

impl std::fmt::Display for NoActionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NoActionReason::MissingProposal => write!(f, "No proposal found; skipping debate."),
            NoActionReason::MalformedProposal(e) => {
                write!(f, "Failed to parse proposal.json: {}", e)
            }
            NoActionReason::EmptyProposal => write!(f, "Proposal has no steps; skipping debate."),
            NoActionReason::InvalidProposal(e) => {
                write!(f, "Proposal rejected ({}); skipping debate.", e)
            }
        }
    }
}

/// Result of a debate run
#[derive(Debug, Clone, PartialEq)]
pub enum DebateOutcome {
    Completed(Debate),
    NoAction(NoActionReason),
}

impl DebateOutcome {
    pub fn debate(&self) -> Option<&Debate> {
        match self {
            DebateOutcome::Completed(d) => Some(d),
            DebateOutcome::NoAction(_) => None,
        }
    }

    pub fn is_no_action(&self) -> bool {
        matches!(self, DebateOutcome::NoAction(_))
    }
}

/// Use case for debating the current proposal
pub struct RunDebateUseCase<E, P, D>
where
    E: ReasoningEngine + 'static,
    P: ProposalRepository,
    D: DebateRepository,
{
    engine: Arc<E>,
    proposals: Arc<P>,
    debates: Arc<D>,
    trace: Arc<dyn TraceLog>,
}

impl<E, P, D> RunDebateUseCase<E, P, D>
where
    E: ReasoningEngine + 'static,
    P: ProposalRepository,
    D: DebateRepository,
{
    pub fn new(engine: Arc<E>, proposals: Arc<P>, debates: Arc<D>, trace: Arc<dyn TraceLog>) -> Self {
        Self {
            engine,
            proposals,
            debates,
            trace,
        }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, params: &DebateParams) -> Result<DebateOutcome, RunDebateError> {
        self.execute_with_progress(params, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        params: &DebateParams,
        progress: &dyn DebateProgressNotifier,
    ) -> Result<DebateOutcome, RunDebateError> {
        let proposal = match self.load_proposal()? {
            Ok(proposal) => proposal,
            Err(reason) => {
                info!("{}", reason);
                self.trace.append(&reason.to_string())?;
                return Ok(DebateOutcome::NoAction(reason));
            }
        };

        info!(
            "Starting debate over {} step(s) ({})",
            proposal.step_count(),
            if params.parallel_phases {
                "parallel phases"
            } else {
                "sequential"
            }
        );
        progress.on_debate_start(&proposal.task, proposal.step_count());

        let mut step_debates = Vec::with_capacity(proposal.step_count());
        for (index, step) in proposal.steps.iter().enumerate() {
            step_debates.push(
                self.debate_step(step, index, proposal.step_count(), params, progress)
                    .await?,
            );
        }

        let completed_at = chrono::Local::now();
        let debate = Debate::new(
            proposal.task.clone(),
            completed_at.timestamp(),
            completed_at.format("%Y-%m-%dT%H:%M:%S").to_string(),
            step_debates,
        );

        self.debates.record(&debate)?;
        self.trace.append("Per-step debate completed.")?;
        info!(
            "Debate completed: {} step(s), {} failed phase(s)",
            debate.steps.len(),
            debate.failed_phase_count()
        );
        progress.on_debate_complete(&debate);

        Ok(DebateOutcome::Completed(debate))
    }

    /// Load and check the proposal; the inner `Err` is a no-action reason
    fn load_proposal(&self) -> Result<Result<Proposal, NoActionReason>, StoreError> {
        let proposal = match self.proposals.load()? {
            StoreLoad::Found(p) => p,
            StoreLoad::Missing => return Ok(Err(NoActionReason::MissingProposal)),
            StoreLoad::Malformed(e) => return Ok(Err(NoActionReason::MalformedProposal(e))),
        };

        if !proposal.has_steps() {
            return Ok(Err(NoActionReason::EmptyProposal));
        }
        if let Err(e) = proposal.validate() {
            return Ok(Err(NoActionReason::InvalidProposal(e)));
        }
        Ok(Ok(proposal))
    }

    /// Run all phases for one step and aggregate them
    async fn debate_step(
        &self,
        step: &Step,
        index: usize,
        total: usize,
        params: &DebateParams,
        progress: &dyn DebateProgressNotifier,
    ) -> Result<StepDebate, RunDebateError> {
        info!("Debating step {} ({}/{})", step.id, index + 1, total);
        self.trace
            .append(&format!("=== DEBATING STEP: {} ===", step.id))?;
        progress.on_step_start(step, index, total);

        let phases = if params.parallel_phases {
            self.phases_parallel(step, params, progress).await
        } else {
            self.phases_sequential(step, params, progress).await
        };

        let step_debate = StepDebate::aggregate(step, phases);

        for result in &step_debate.phases {
            self.trace.append(&trace_line(result))?;
        }
        self.trace.append(&format!(
            "Step {} summary: risk={} agreement={}",
            step_debate.step_id, step_debate.summary.risk_level, step_debate.summary.agreement
        ))?;

        progress.on_step_complete(&step_debate);
        Ok(step_debate)
    }

    async fn phases_sequential(
        &self,
        step: &Step,
        params: &DebateParams,
        progress: &dyn DebateProgressNotifier,
    ) -> Vec<PhaseResult> {
        let mut results = Vec::with_capacity(DebatePhase::ALL.len());

        for phase in DebatePhase::ALL {
            let model = params.bindings.engine_for(phase).to_string();
            let prompt = DebatePromptTemplate::render(phase, step);
            let result = run_phase(self.engine.as_ref(), phase, model, prompt, params.timeout).await;
            progress.on_phase_complete(&step.id, &result);
            results.push(result);
        }

        results
    }

    /// All phases at once; results come back in completion order and are
    /// re-sorted by [`StepDebate::aggregate`].
    async fn phases_parallel(
        &self,
        step: &Step,
        params: &DebateParams,
        progress: &dyn DebateProgressNotifier,
    ) -> Vec<PhaseResult> {
        let mut join_set = JoinSet::new();

        for phase in DebatePhase::ALL {
            let engine = Arc::clone(&self.engine);
            let model = params.bindings.engine_for(phase).to_string();
            let prompt = DebatePromptTemplate::render(phase, step);
            let timeout = params.timeout;

            join_set.spawn(async move {
                run_phase(engine.as_ref(), phase, model, prompt, timeout).await
            });
        }

        let mut results = Vec::with_capacity(DebatePhase::ALL.len());

        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok(result) => {
                    progress.on_phase_complete(&step.id, &result);
                    results.push(result);
                }
                Err(e) => {
                    warn!("Phase task join error: {}", e);
                }
            }
        }

        // A panicked task still owes the step its phase result
        for phase in DebatePhase::ALL {
            if results.iter().any(|r| r.phase == phase) {
                continue;
            }
            let model = params.bindings.engine_for(phase).to_string();
            let result = PhaseResult::failure(
                phase,
                &model,
                DebatePromptTemplate::render(phase, step),
                format!("{} unavailable (phase task aborted)", model),
                Duration::ZERO,
            );
            progress.on_phase_complete(&step.id, &result);
            results.push(result);
        }

        results
    }
}

/// Invoke one engine for one phase
async fn run_phase<E: ReasoningEngine + ?Sized>(
    engine: &E,
    phase: DebatePhase,
    model: String,
    prompt: String,
    timeout: Duration,
) -> PhaseResult {
    debug!("Phase {} -> {}", phase, model);
    let invocation = engine.invoke(&model, &prompt, timeout).await;

    match &invocation.error {
        None => info!(
            "Phase {} ({}) answered in {:.2}s",
            phase,
            model,
            invocation.duration.as_secs_f64()
        ),
        Some(e) => warn!("Phase {} failed: {}", phase, e),
    }

    invocation.into_phase_result(phase, model, prompt)
}

/// One trace line per phase; text is escaped so each entry stays on one line
fn trace_line(result: &PhaseResult) -> String {
    match &result.error {
        None => format!(
            "[{}] {} ({:.2}s) prompt={:?} output={:?}",
            result.phase, result.model, result.duration_s, result.prompt, result.output
        ),
        Some(e) => format!(
            "[{}] {} ({:.2}s) prompt={:?} error={:?}",
            result.phase, result.model, result.duration_s, result.prompt, e
        ),
    }
}
