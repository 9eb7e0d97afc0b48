//! JSON file store for the current proposal

use super::state_dir::{read_slot, write_atomic};
use autonomy_application::ports::store::{ProposalRepository, StoreError, StoreLoad};
use autonomy_domain::Proposal;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Single-slot `proposal.json`, pretty-printed with two-space indent
#[derive(Debug, Clone)]
pub struct JsonProposalStore {
    path: PathBuf,
}

impl JsonProposalStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProposalRepository for JsonProposalStore {
    fn load(&self) -> Result<StoreLoad<Proposal>, StoreError> {
        debug!("Loading proposal from {}", self.path.display());
        read_slot(&self.path)
    }

    fn save(&self, proposal: &Proposal) -> Result<(), StoreError> {
        let json =
            serde_json::to_string_pretty(proposal).map_err(|e| StoreError::Serialize {
                what: "proposal",
                message: e.to_string(),
            })?;
        write_atomic(&self.path, &json)?;
        debug!("Saved proposal to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use autonomy_domain::{EchoPlanner, Planner, Step};

    #[test]
    fn test_missing_file_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonProposalStore::new(dir.path().join("proposal.json"));
        assert_eq!(store.load().unwrap(), StoreLoad::Missing);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonProposalStore::new(dir.path().join("proposal.json"));
        let proposal = EchoPlanner.plan("rotate logs").proposal().cloned().unwrap();

        store.save(&proposal).unwrap();
        assert_eq!(store.load().unwrap(), StoreLoad::Found(proposal));

        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(raw.starts_with("{\n  \"task\": \"rotate logs\""));
    }

    #[test]
    fn test_save_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonProposalStore::new(dir.path().join("proposal.json"));

        store
            .save(&Proposal::new("a", 0.4, vec![Step::new("s1", "", "true", "low")]))
            .unwrap();
        store.save(&Proposal::new("b", 0.5, vec![])).unwrap();

        let loaded = store.load().unwrap().found().unwrap();
        assert_eq!(loaded.task, "b");
        assert!(!loaded.has_steps());
    }

    #[test]
    fn test_hand_written_proposal_without_task() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("proposal.json");
        std::fs::write(
            &path,
            r#"{"confidence": 0.7, "steps": [{"id": "x", "command": "ls"}]}"#,
        )
        .unwrap();

        let loaded = JsonProposalStore::new(&path).load().unwrap().found().unwrap();
        assert_eq!(loaded.task, "");
        assert_eq!(loaded.steps[0].id, "x");
        assert_eq!(loaded.steps[0].description, "");
    }

    #[test]
    fn test_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("proposal.json");
        std::fs::write(&path, "{\"steps\": [").unwrap();

        let loaded = JsonProposalStore::new(&path).load().unwrap();
        assert!(matches!(loaded, StoreLoad::Malformed(_)));
    }
}
