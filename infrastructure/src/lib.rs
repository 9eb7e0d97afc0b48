//! Infrastructure layer for autonomy
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod engine;
pub mod logging;
pub mod store;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigIssueCode, ConfigLoader, FileConfig, FileDebateConfig, FileEngineConfig,
    FilePhasesConfig, FileStateConfig, Severity,
};
pub use engine::CommandEngine;
pub use logging::TextTraceLog;
pub use store::{JsonDebateStore, JsonProposalStore, StateDir};
