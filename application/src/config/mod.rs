//! Application-level configuration.
//!
//! - [`DebateParams`] - engine bindings, per-call timeout, phase concurrency

pub mod debate_params;

pub use debate_params::{DEFAULT_ENGINE_TIMEOUT, DebateParams};
