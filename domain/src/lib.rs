//! Domain layer for autonomy
//!
//! This crate contains the core entities and pure logic of the
//! proposal/debate pipeline. It has no I/O and no dependencies on
//! infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Proposal
//!
//! A free-text task decomposed into ordered [`Step`]s by a [`Planner`].
//! An empty task yields [`PlanOutcome::NoAction`] instead of a proposal.
//!
//! ## Debate
//!
//! Each step is examined by five fixed [`DebatePhase`]s, each bound to a
//! reasoning engine. The safety phase's text is classified into a
//! [`DebateSummary`] by an ordered keyword rule list ([`classify_risk`]).

pub mod core;
pub mod debate;
pub mod prompt;
pub mod proposal;

// Re-export commonly used types
pub use core::error::DomainError;
pub use debate::{
    Debate, DebatePhase, DebateSummary, HistorySummary, PhaseBindings, PhaseResult, RiskLevel,
    StepDebate, classify_risk,
};
pub use prompt::DebatePromptTemplate;
pub use proposal::{
    DEFAULT_CONFIDENCE, EchoPlanner, NO_ACTION, PlanOutcome, Planner, Proposal, Step,
};
