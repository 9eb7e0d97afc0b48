//! State directory configuration from TOML (`[state]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStateConfig {
    /// Base directory for stores and trace logs; `~` is expanded.
    /// Unset means `~/.autonomy`.
    pub dir: Option<String>,
}

impl FileStateConfig {
    /// Resolve the configured directory, falling back to `default`
    pub fn resolve_dir(&self, default: Option<PathBuf>) -> Option<PathBuf> {
        match self.dir.as_deref().map(str::trim) {
            Some(dir) if !dir.is_empty() => Some(expand_home(dir)),
            _ => default,
        }
    }
}

fn expand_home(path: &str) -> PathBuf {
    if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}
