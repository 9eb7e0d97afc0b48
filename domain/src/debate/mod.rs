//! Debate domain
//!
//! Every step of a proposal is examined by five phases, each bound to its
//! own reasoning engine:
//!
//! ```text
//!  Step ──► interpretation ──► safety ──► explanation ──► alternate_view ──► uncensored_review
//!                                │
//!                                └──► classify_risk ──► DebateSummary { risk_level, agreement }
//! ```
//!
//! All five phases always run. A failed engine call is recorded in its
//! [`PhaseResult`] and never stops the step. Only the safety phase feeds
//! the summary.

pub mod entities;
pub mod history;
pub mod phase;
pub mod risk;

pub use entities::{Debate, PhaseResult, StepDebate, round_secs};
pub use history::HistorySummary;
pub use phase::{DebatePhase, PhaseBindings};
pub use risk::{DebateSummary, RISK_RULES, RiskLevel, RiskRule, classify_risk};
