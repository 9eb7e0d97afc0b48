//! Use cases (application services)
//!
//! - [`plan_task`] - free-text task → proposal store
//! - [`run_debate`] - proposal store → debate store

pub mod plan_task;
pub mod run_debate;
