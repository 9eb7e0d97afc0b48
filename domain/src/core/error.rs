//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Unknown debate phase: {0}")]
    UnknownPhase(String),

    #[error("Duplicate step id in proposal: {0}")]
    DuplicateStepId(String),

    #[error("Step has an empty id")]
    EmptyStepId,
}
