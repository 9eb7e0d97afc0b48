//! Phase-to-engine bindings from TOML (`[phases]` section)
//!
//! ```toml
//! [phases]
//! safety = "llama3.1:8b"
//! ```
//!
//! Unset phases keep their built-in engine.

use autonomy_domain::{DebatePhase, PhaseBindings};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePhasesConfig {
    pub interpretation: Option<String>,
    pub safety: Option<String>,
    pub explanation: Option<String>,
    pub alternate_view: Option<String>,
    pub uncensored_review: Option<String>,
}

impl FilePhasesConfig {
    pub fn get(&self, phase: DebatePhase) -> Option<&str> {
        match phase {
            DebatePhase::Interpretation => self.interpretation.as_deref(),
            DebatePhase::Safety => self.safety.as_deref(),
            DebatePhase::Explanation => self.explanation.as_deref(),
            DebatePhase::AlternateView => self.alternate_view.as_deref(),
            DebatePhase::UncensoredReview => self.uncensored_review.as_deref(),
        }
    }

    /// Overlay configured engines on the defaults; blank names are ignored
    pub fn to_bindings(&self) -> PhaseBindings {
        DebatePhase::ALL
            .iter()
            .fold(PhaseBindings::default(), |bindings, &phase| {
                match self.get(phase).map(str::trim) {
                    Some(engine) if !engine.is_empty() => bindings.with_engine(phase, engine),
                    _ => bindings,
                }
            })
    }
}
