//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Every section defaults, so a partial (or empty) file is valid.

mod debate;
mod engine;
mod phases;
mod state;

pub use debate::FileDebateConfig;
pub use engine::FileEngineConfig;
pub use phases::FilePhasesConfig;
pub use state::FileStateConfig;

use autonomy_application::DebateParams;
use autonomy_domain::DebatePhase;
use serde::{Deserialize, Serialize};

/// Severity level of a configuration issue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The configuration cannot work
    Error,
    /// Works, but probably not as intended
    Warning,
}

/// Identifies a specific configuration issue
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    ZeroTimeout,
    EmptyProgram,
    EmptyEngineName { phase: DebatePhase },
}

/// A detected issue in the loaded configuration
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub state: FileStateConfig,
    pub engine: FileEngineConfig,
    pub debate: FileDebateConfig,
    pub phases: FilePhasesConfig,
}

impl FileConfig {
    /// Orchestrator parameters derived from `[debate]` and `[phases]`
    pub fn debate_params(&self) -> DebateParams {
        DebateParams::default()
            .with_bindings(self.phases.to_bindings())
            .with_timeout(self.debate.timeout())
            .with_parallel_phases(self.debate.parallel_phases)
    }

    /// Validate the configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.debate.timeout_secs == 0 {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::ZeroTimeout,
                message: "debate.timeout_secs cannot be 0: every engine call would time out"
                    .to_string(),
            });
        }

        if self.engine.program.trim().is_empty() {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::EmptyProgram,
                message: "engine.program cannot be empty".to_string(),
            });
        }

        for phase in DebatePhase::ALL {
            if let Some(engine) = self.phases.get(phase)
                && engine.trim().is_empty()
            {
                issues.push(ConfigIssue {
                    severity: Severity::Warning,
                    code: ConfigIssueCode::EmptyEngineName { phase },
                    message: format!(
                        "phases.{}: empty engine name, using the built-in default",
                        phase.as_str()
                    ),
                });
            }
        }

        issues
    }

    pub fn has_errors(&self) -> bool {
        self.validate()
            .iter()
            .any(|issue| issue.severity == Severity::Error)
    }
}
