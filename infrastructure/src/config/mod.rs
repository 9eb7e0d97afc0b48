//! Configuration file loading for autonomy
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `AUTONOMY_*` environment variables (`__` separates nesting)
//! 2. `--config <path>` specified file
//! 3. Project root: `./autonomy.toml` or `./.autonomy.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/autonomy/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, ConfigIssueCode, FileConfig, FileDebateConfig, FileEngineConfig,
    FilePhasesConfig, FileStateConfig, Severity,
};
pub use loader::ConfigLoader;
