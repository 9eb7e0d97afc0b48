//! Timestamped text trace writer.
//!
//! Each message becomes one `[<local ISO time>] <message>` line. The file is
//! opened in append mode for every message, so concurrent runs never
//! truncate each other and nothing is buffered across calls.

use autonomy_application::ports::store::StoreError;
use autonomy_application::ports::trace_log::TraceLog;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

pub struct TextTraceLog {
    path: PathBuf,
    // Serializes writers within this process
    lock: Mutex<()>,
}

impl TextTraceLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn format_line(message: &str) -> String {
        let timestamp = chrono::Local::now().format(TIMESTAMP_FORMAT);
        format!("[{}] {}\n", timestamp, message)
    }
}

impl TraceLog for TextTraceLog {
    fn append(&self, message: &str) -> Result<(), StoreError> {
        let to_write_error = |source| StoreError::Write {
            path: self.path.clone(),
            source,
        };

        let _guard = self.lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(to_write_error)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(to_write_error)?;
        file.write_all(Self::format_line(message).as_bytes())
            .map_err(to_write_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_are_timestamped_and_appended() {
        let dir = tempfile::tempdir().unwrap();
        let log = TextTraceLog::new(dir.path().join("logs/debate.log"));

        log.append("=== DEBATING STEP: step-1 ===").unwrap();
        log.append("Per-step debate completed.").unwrap();

        let content = std::fs::read_to_string(log.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with('['));
        assert!(lines[0].ends_with("] === DEBATING STEP: step-1 ==="));
        assert!(lines[1].ends_with("] Per-step debate completed."));
    }

    #[test]
    fn test_timestamp_shape() {
        let line = TextTraceLog::format_line("hello");
        // [YYYY-MM-DDTHH:MM:SS.ffffff] hello
        let close = line.find(']').unwrap();
        let stamp = &line[1..close];
        assert_eq!(stamp.len(), 26);
        assert_eq!(&stamp[10..11], "T");
        assert_eq!(&stamp[19..20], ".");
        assert_eq!(&line[close..], "] hello\n");
    }

    #[test]
    fn test_existing_content_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("planner.log");
        std::fs::write(&path, "[old] line\n").unwrap();

        TextTraceLog::new(&path).append("new").unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("[old] line\n"));
        assert!(content.trim_end().ends_with("] new"));
    }

    #[test]
    fn test_unwritable_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened for append
        let log = TextTraceLog::new(dir.path());
        assert!(matches!(log.append("x"), Err(StoreError::Write { .. })));
    }
}
