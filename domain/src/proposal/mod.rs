//! Proposal domain
//!
//! A proposal is the first stage of the pipeline: a task decomposed into
//! ordered steps. It is consumed read-only by the debate stage.

pub mod entities;
pub mod planner;

pub use entities::{Proposal, Step};
pub use planner::{DEFAULT_CONFIDENCE, EchoPlanner, NO_ACTION, PlanOutcome, Planner};
