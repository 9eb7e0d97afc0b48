//! Port for the human-readable audit trace.
//!
//! The trace is a line-oriented, timestamped record of planning runs and of
//! every phase invocation. It is written for people reviewing a run and is
//! never parsed back. This is separate from `tracing`-based diagnostics:
//! the trace is durable audit data, so a failed write is reported.

use super::store::StoreError;
use std::sync::Mutex;

pub trait TraceLog: Send + Sync {
    /// Append one message; the implementation adds the timestamp
    fn append(&self, message: &str) -> Result<(), StoreError>;
}

/// Keeps messages in memory
#[derive(Default)]
pub struct MemoryTraceLog {
    lines: Mutex<Vec<String>>,
}

impl MemoryTraceLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }
}

impl TraceLog for MemoryTraceLog {
    fn append(&self, message: &str) -> Result<(), StoreError> {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(message.to_string());
        }
        Ok(())
    }
}
