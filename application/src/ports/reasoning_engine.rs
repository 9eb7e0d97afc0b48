//! Reasoning engine port
//!
//! Defines how the application layer reaches an external text-completion
//! engine. Adapters live in the infrastructure layer.

use async_trait::async_trait;
use autonomy_domain::{DebatePhase, PhaseResult};
use std::time::{Duration, Instant};
use thiserror::Error;

/// Errors that can occur during a single engine call
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("timed out after {}s", .0.as_secs_f64())]
    Timeout(Duration),

    #[error("failed to start: {0}")]
    Spawn(String),

    #[error("exit status {code}{}", stderr_suffix(.stderr))]
    NonZeroExit { code: i32, stderr: String },

    #[error("{0}")]
    Io(String),
}

fn stderr_suffix(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {}", stderr)
    }
}

/// Result of one engine call, failures included
#[derive(Debug, Clone, PartialEq)]
pub struct EngineInvocation {
    /// Engine text, empty on failure
    pub output: String,
    /// Elapsed time up to completion or failure
    pub duration: Duration,
    /// `"<engine> unavailable (<reason>)"` when the call failed
    pub error: Option<String>,
}

impl EngineInvocation {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Record this invocation as the result of `phase`
    pub fn into_phase_result(
        self,
        phase: DebatePhase,
        model: impl Into<String>,
        prompt: impl Into<String>,
    ) -> PhaseResult {
        match self.error {
            None => PhaseResult::success(phase, model, prompt, self.output, self.duration),
            Some(error) => PhaseResult::failure(phase, model, prompt, error, self.duration),
        }
    }
}

/// Message stored when an engine call fails
pub fn unavailable_message(engine: &str, error: &EngineError) -> String {
    format!("{} unavailable ({})", engine, error)
}

/// Gateway to reasoning engines
///
/// One call is one attempt: implementations must not retry and must stop
/// the underlying work once `timeout` elapses.
#[async_trait]
pub trait ReasoningEngine: Send + Sync {
    /// Send `prompt` to `engine` and return its text with surrounding
    /// whitespace trimmed; inner whitespace is kept as is
    async fn complete(
        &self,
        engine: &str,
        prompt: &str,
        timeout: Duration,
    ) -> Result<String, EngineError>;

    /// Timed call that converts failures into data
    async fn invoke(&self, engine: &str, prompt: &str, timeout: Duration) -> EngineInvocation {
        let start = Instant::now();
        let result = self.complete(engine, prompt, timeout).await;
        let duration = start.elapsed();

        match result {
            Ok(output) => EngineInvocation {
                output,
                duration,
                error: None,
            },
            Err(e) => EngineInvocation {
                output: String::new(),
                duration,
                error: Some(unavailable_message(engine, &e)),
            },
        }
    }
}
