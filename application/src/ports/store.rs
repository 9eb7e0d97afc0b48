//! Persistence ports for proposals and debates
//!
//! Loads distinguish three cases: a value was found, nothing is stored yet,
//! or the stored content could not be parsed. The last two are not errors:
//! the pipeline treats them as "nothing to do". [`StoreError`] is reserved
//! for genuine I/O faults, which must reach the caller.

use autonomy_domain::{Debate, Proposal};
use std::path::PathBuf;
use thiserror::Error;

/// Result of reading a single-slot store
#[derive(Debug, Clone, PartialEq)]
pub enum StoreLoad<T> {
    Found(T),
    Missing,
    /// Present but unparsable; carries the parse error
    Malformed(String),
}

impl<T> StoreLoad<T> {
    pub fn found(self) -> Option<T> {
        match self {
            StoreLoad::Found(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, StoreLoad::Found(_))
    }
}

/// Persistence failures
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize {what}: {message}")]
    Serialize { what: &'static str, message: String },
}

/// Debate history read back from the append-only log
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryLoad {
    /// Parsed debates, oldest first
    pub debates: Vec<Debate>,
    /// Lines that failed to parse
    pub skipped: usize,
}

/// Single-slot store for the current proposal
pub trait ProposalRepository: Send + Sync {
    fn load(&self) -> Result<StoreLoad<Proposal>, StoreError>;

    /// Overwrite the slot
    fn save(&self, proposal: &Proposal) -> Result<(), StoreError>;
}

/// Current-debate slot plus append-only history
pub trait DebateRepository: Send + Sync {
    /// Overwrite the current-debate slot
    fn save_current(&self, debate: &Debate) -> Result<(), StoreError>;

    /// Append one line to the history; existing lines are never touched
    fn append_history(&self, debate: &Debate) -> Result<(), StoreError>;

    fn load_current(&self) -> Result<StoreLoad<Debate>, StoreError>;

    fn load_history(&self) -> Result<HistoryLoad, StoreError>;

    /// Persist a completed debate: overwrite current, then append history
    fn record(&self, debate: &Debate) -> Result<(), StoreError> {
        self.save_current(debate)?;
        self.append_history(debate)
    }
}
