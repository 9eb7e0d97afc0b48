//! JSON file stores for debates
//!
//! `debate.json` holds the latest debate, pretty-printed and replaced
//! atomically. `debate-history.jsonl` receives one compact JSON object per
//! completed debate; lines are only ever appended.

use super::state_dir::{ensure_parent, read_slot, write_atomic};
use autonomy_application::ports::store::{DebateRepository, HistoryLoad, StoreError, StoreLoad};
use autonomy_domain::Debate;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct JsonDebateStore {
    current_path: PathBuf,
    history_path: PathBuf,
}

impl JsonDebateStore {
    pub fn new(current_path: impl Into<PathBuf>, history_path: impl Into<PathBuf>) -> Self {
        Self {
            current_path: current_path.into(),
            history_path: history_path.into(),
        }
    }

    pub fn current_path(&self) -> &Path {
        &self.current_path
    }

    pub fn history_path(&self) -> &Path {
        &self.history_path
    }
}

fn serialize_error(e: serde_json::Error) -> StoreError {
    StoreError::Serialize {
        what: "debate",
        message: e.to_string(),
    }
}

impl DebateRepository for JsonDebateStore {
    fn save_current(&self, debate: &Debate) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(debate).map_err(serialize_error)?;
        write_atomic(&self.current_path, &json)?;
        debug!("Saved debate to {}", self.current_path.display());
        Ok(())
    }

    fn append_history(&self, debate: &Debate) -> Result<(), StoreError> {
        let mut line = serde_json::to_string(debate).map_err(serialize_error)?;
        line.push('\n');

        ensure_parent(&self.history_path)?;
        let to_write_error = |source| StoreError::Write {
            path: self.history_path.clone(),
            source,
        };
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.history_path)
            .map_err(to_write_error)?;
        // Single write so a line is never interleaved with another record
        file.write_all(line.as_bytes()).map_err(to_write_error)?;

        debug!("Appended debate to {}", self.history_path.display());
        Ok(())
    }

    fn load_current(&self) -> Result<StoreLoad<Debate>, StoreError> {
        read_slot(&self.current_path)
    }

    fn load_history(&self) -> Result<HistoryLoad, StoreError> {
        let content = match std::fs::read_to_string(&self.history_path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(HistoryLoad::default());
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.history_path.clone(),
                    source,
                });
            }
        };

        let mut history = HistoryLoad::default();
        for (index, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<Debate>(line) {
                Ok(debate) => history.debates.push(debate),
                Err(e) => {
                    warn!(
                        "Skipping malformed history line {} in {}: {}",
                        index + 1,
                        self.history_path.display(),
                        e
                    );
                    history.skipped += 1;
                }
            }
        }

        Ok(history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use autonomy_domain::{DebatePhase, PhaseResult, Step, StepDebate};
    use std::time::Duration;

    fn store_in(dir: &Path) -> JsonDebateStore {
        JsonDebateStore::new(dir.join("debate.json"), dir.join("debate-history.jsonl"))
    }

    fn sample_debate(task: &str, timestamp: i64) -> Debate {
        let step = Step::new("step-1", "Echo", "echo hi", "low");
        let phases = DebatePhase::ALL
            .iter()
            .map(|&phase| {
                if phase == DebatePhase::Safety {
                    PhaseResult::success(
                        phase,
                        "qwen2.5:3b",
                        "prompt",
                        "This is safe.",
                        Duration::from_millis(250),
                    )
                } else {
                    PhaseResult::failure(
                        phase,
                        "gemma3:4b",
                        "prompt",
                        "gemma3:4b unavailable (timed out after 90s)",
                        Duration::from_secs(90),
                    )
                }
            })
            .collect();
        Debate::new(
            task,
            timestamp,
            "2026-10-19T12:00:00",
            vec![StepDebate::aggregate(&step, phases)],
        )
    }

    #[test]
    fn test_empty_state() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        assert_eq!(store.load_current().unwrap(), StoreLoad::Missing);
        assert_eq!(store.load_history().unwrap(), HistoryLoad::default());
    }

    #[test]
    fn test_record_writes_current_and_history() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        let debate = sample_debate("first", 1);

        store.record(&debate).unwrap();

        assert_eq!(store.load_current().unwrap(), StoreLoad::Found(debate.clone()));
        let history = store.load_history().unwrap();
        assert_eq!(history.debates, vec![debate]);
        assert_eq!(history.skipped, 0);
    }

    #[test]
    fn test_history_is_append_only() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        store.record(&sample_debate("first", 1)).unwrap();
        let first_line = std::fs::read_to_string(store.history_path())
            .unwrap()
            .lines()
            .next()
            .unwrap()
            .to_string();

        store.record(&sample_debate("second", 2)).unwrap();
        let content = std::fs::read_to_string(store.history_path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], first_line);
        assert!(content.ends_with('\n'));

        let current = store.load_current().unwrap().found().unwrap();
        assert_eq!(current.task, "second");
    }

    #[test]
    fn test_history_lines_are_compact() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        store.append_history(&sample_debate("t", 1)).unwrap();

        let content = std::fs::read_to_string(store.history_path()).unwrap();
        assert_eq!(content.lines().count(), 1);
        assert!(content.starts_with("{\"task\":\"t\""));
    }

    #[test]
    fn test_failed_phase_round_trip_keeps_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        store.save_current(&sample_debate("t", 1)).unwrap();

        let raw = std::fs::read_to_string(store.current_path()).unwrap();
        assert!(raw.contains("\"error\": \"gemma3:4b unavailable (timed out after 90s)\""));

        let loaded = store.load_current().unwrap().found().unwrap();
        let safety = loaded.steps[0].phase(DebatePhase::Safety).unwrap();
        assert!(safety.error.is_none());
        assert_eq!(loaded.failed_phase_count(), 4);
    }

    #[test]
    fn test_malformed_history_lines_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        store.append_history(&sample_debate("good", 1)).unwrap();

        let mut file = OpenOptions::new()
            .append(true)
            .open(store.history_path())
            .unwrap();
        file.write_all(b"{not json\n\n").unwrap();
        drop(file);
        store.append_history(&sample_debate("also good", 2)).unwrap();

        let history = store.load_history().unwrap();
        assert_eq!(history.debates.len(), 2);
        assert_eq!(history.skipped, 1);
        assert_eq!(history.debates[1].task, "also good");
    }
}
