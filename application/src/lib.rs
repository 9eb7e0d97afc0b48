//! Application layer for autonomy
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DEFAULT_ENGINE_TIMEOUT, DebateParams};
pub use ports::{
    progress::{DebateProgressNotifier, NoProgress},
    reasoning_engine::{EngineError, EngineInvocation, ReasoningEngine, unavailable_message},
    store::{DebateRepository, HistoryLoad, ProposalRepository, StoreError, StoreLoad},
    trace_log::{MemoryTraceLog, TraceLog},
};
pub use use_cases::plan_task::{PlanTaskError, PlanTaskUseCase};
pub use use_cases::run_debate::{
    DebateOutcome, NoActionReason, RunDebateError, RunDebateUseCase,
};
