//! File-backed stores
//!
//! Implements the persistence ports against plain files under a state
//! directory:
//!
//! ```text
//! <state dir>/
//!   proposal.json          current proposal (overwritten)
//!   debate.json            latest debate (overwritten)
//!   debate-history.jsonl   one debate per line (append-only)
//!   planner.log            planner trace
//!   debate.log             debate trace
//! ```

mod debate_store;
mod proposal_store;
mod state_dir;

pub use debate_store::JsonDebateStore;
pub use proposal_store::JsonProposalStore;
pub use state_dir::{
    DEBATE_FILE, DEBATE_LOG_FILE, HISTORY_FILE, PLANNER_LOG_FILE, PROPOSAL_FILE, StateDir,
};

impl StateDir {
    pub fn proposal_store(&self) -> JsonProposalStore {
        JsonProposalStore::new(self.proposal_path())
    }

    pub fn debate_store(&self) -> JsonDebateStore {
        JsonDebateStore::new(self.debate_path(), self.history_path())
    }
}
