//! Debate parameters: orchestrator loop control.
//!
//! [`DebateParams`] groups the parameters that control
//! [`RunDebateUseCase`](crate::use_cases::run_debate::RunDebateUseCase):
//! which engine serves each phase, how long one engine call may take, and
//! whether the phases of a step run concurrently.

use autonomy_domain::{DebatePhase, PhaseBindings};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default per-call engine timeout
pub const DEFAULT_ENGINE_TIMEOUT: Duration = Duration::from_secs(90);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebateParams {
    /// Engine identity per phase
    pub bindings: PhaseBindings,
    /// Timeout applied to every engine call independently
    pub timeout: Duration,
    /// Run the five phases of a step concurrently
    pub parallel_phases: bool,
}

impl Default for DebateParams {
    fn default() -> Self {
        Self {
            bindings: PhaseBindings::default(),
            timeout: DEFAULT_ENGINE_TIMEOUT,
            parallel_phases: false,
        }
    }
}

impl DebateParams {
    // ==================== Builder Methods ====================

    pub fn with_bindings(mut self, bindings: PhaseBindings) -> Self {
        self.bindings = bindings;
        self
    }

    pub fn with_engine(mut self, phase: DebatePhase, engine: impl Into<String>) -> Self {
        self.bindings = self.bindings.with_engine(phase, engine);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_parallel_phases(mut self, parallel: bool) -> Self {
        self.parallel_phases = parallel;
        self
    }
}
