//! Debate run configuration from TOML (`[debate]` section)

use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDebateConfig {
    /// Per-call engine timeout
    pub timeout_secs: u64,
    /// Run the five phases of a step concurrently
    pub parallel_phases: bool,
}

impl Default for FileDebateConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 90,
            parallel_phases: false,
        }
    }
}

impl FileDebateConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
