//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod progress;
pub mod reasoning_engine;
pub mod store;
pub mod trace_log;
