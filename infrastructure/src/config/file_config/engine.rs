//! Reasoning engine configuration from TOML (`[engine]` section)
//!
//! ```toml
//! [engine]
//! program = "ollama"
//! args = ["run"]
//! ```
//!
//! Each phase call runs `<program> <args...> <engine name> <prompt>`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEngineConfig {
    pub program: String,
    pub args: Vec<String>,
}

impl Default for FileEngineConfig {
    fn default() -> Self {
        Self {
            program: "ollama".to_string(),
            args: vec!["run".to_string()],
        }
    }
}
