//! State directory layout and shared file helpers
//!
//! Every store and trace file lives under one base directory, injected at
//! construction so tests can point it at a temporary directory.

use autonomy_application::ports::store::{StoreError, StoreLoad};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

pub const PROPOSAL_FILE: &str = "proposal.json";
pub const DEBATE_FILE: &str = "debate.json";
pub const HISTORY_FILE: &str = "debate-history.jsonl";
pub const PLANNER_LOG_FILE: &str = "planner.log";
pub const DEBATE_LOG_FILE: &str = "debate.log";

/// Base directory holding all pipeline state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateDir {
    root: PathBuf,
}

impl StateDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `~/.autonomy`
    pub fn default_location() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".autonomy"))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn proposal_path(&self) -> PathBuf {
        self.root.join(PROPOSAL_FILE)
    }

    pub fn debate_path(&self) -> PathBuf {
        self.root.join(DEBATE_FILE)
    }

    pub fn history_path(&self) -> PathBuf {
        self.root.join(HISTORY_FILE)
    }

    pub fn planner_log_path(&self) -> PathBuf {
        self.root.join(PLANNER_LOG_FILE)
    }

    pub fn debate_log_path(&self) -> PathBuf {
        self.root.join(DEBATE_LOG_FILE)
    }

    /// Create the directory if needed
    pub fn ensure(&self) -> Result<(), StoreError> {
        ensure_dir(&self.root)
    }
}

pub(crate) fn ensure_dir(dir: &Path) -> Result<(), StoreError> {
    std::fs::create_dir_all(dir).map_err(|source| StoreError::Write {
        path: dir.to_path_buf(),
        source,
    })
}

pub(crate) fn ensure_parent(path: &Path) -> Result<(), StoreError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_dir(parent),
        _ => Ok(()),
    }
}

/// Replace `path` with `contents` via a temp file and rename
pub(crate) fn write_atomic(path: &Path, contents: &str) -> Result<(), StoreError> {
    ensure_parent(path)?;

    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = PathBuf::from(temp_name);

    let to_write_error = |source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    };
    std::fs::write(&temp_path, contents).map_err(to_write_error)?;
    std::fs::rename(&temp_path, path).map_err(to_write_error)
}

/// Read a whole single-slot file
///
/// A missing file is [`StoreLoad::Missing`]; unparsable content is
/// [`StoreLoad::Malformed`]. Only real read faults are errors.
pub(crate) fn read_slot<T: DeserializeOwned>(path: &Path) -> Result<StoreLoad<T>, StoreError> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(StoreLoad::Missing),
        Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
            return Ok(StoreLoad::Malformed(e.to_string()));
        }
        Err(source) => {
            return Err(StoreError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    Ok(match serde_json::from_str(&content) {
        Ok(value) => StoreLoad::Found(value),
        Err(e) => StoreLoad::Malformed(e.to_string()),
    })
}
