//! Debate phases and their engine bindings

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// One fixed kind of critique applied to a step
///
/// The declaration order is the canonical debate order; [`DebatePhase::ALL`]
/// and the derived `Ord` both follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DebatePhase {
    /// What is this command trying to do?
    Interpretation,
    /// What could go wrong? Drives the risk summary.
    Safety,
    /// Plain-language explanation for an operator
    Explanation,
    /// A different way to reach the same goal
    AlternateView,
    /// Unfiltered critique
    UncensoredReview,
}

impl DebatePhase {
    /// All phases in canonical order
    pub const ALL: [DebatePhase; 5] = [
        DebatePhase::Interpretation,
        DebatePhase::Safety,
        DebatePhase::Explanation,
        DebatePhase::AlternateView,
        DebatePhase::UncensoredReview,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DebatePhase::Interpretation => "interpretation",
            DebatePhase::Safety => "safety",
            DebatePhase::Explanation => "explanation",
            DebatePhase::AlternateView => "alternate_view",
            DebatePhase::UncensoredReview => "uncensored_review",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DebatePhase::Interpretation => "Interpretation",
            DebatePhase::Safety => "Safety",
            DebatePhase::Explanation => "Explanation",
            DebatePhase::AlternateView => "Alternate View",
            DebatePhase::UncensoredReview => "Uncensored Review",
        }
    }

    /// Zero-based position in the canonical order
    pub fn ordinal(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for DebatePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DebatePhase {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        DebatePhase::ALL
            .into_iter()
            .find(|p| p.as_str() == normalized)
            .ok_or_else(|| DomainError::UnknownPhase(s.to_string()))
    }
}

/// Engine identity bound to each phase
///
/// Engines are opaque names handed to the reasoning engine client
/// (e.g. an `ollama` model tag).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseBindings {
    pub interpretation: String,
    pub safety: String,
    pub explanation: String,
    pub alternate_view: String,
    pub uncensored_review: String,
}

impl Default for PhaseBindings {
    fn default() -> Self {
        Self {
            interpretation: "deepseek-r1:8b".to_string(),
            safety: "qwen2.5:3b".to_string(),
            explanation: "gemma3:4b".to_string(),
            alternate_view: "llama3.2:3b".to_string(),
            uncensored_review: "dolphin-mistral:7b".to_string(),
        }
    }
}

impl PhaseBindings {
    pub fn engine_for(&self, phase: DebatePhase) -> &str {
        match phase {
            DebatePhase::Interpretation => &self.interpretation,
            DebatePhase::Safety => &self.safety,
            DebatePhase::Explanation => &self.explanation,
            DebatePhase::AlternateView => &self.alternate_view,
            DebatePhase::UncensoredReview => &self.uncensored_review,
        }
    }

    pub fn with_engine(mut self, phase: DebatePhase, engine: impl Into<String>) -> Self {
        let slot = match phase {
            DebatePhase::Interpretation => &mut self.interpretation,
            DebatePhase::Safety => &mut self.safety,
            DebatePhase::Explanation => &mut self.explanation,
            DebatePhase::AlternateView => &mut self.alternate_view,
            DebatePhase::UncensoredReview => &mut self.uncensored_review,
        };
        *slot = engine.into();
        self
    }

    /// (phase, engine) pairs in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (DebatePhase, &str)> {
        DebatePhase::ALL.into_iter().map(|p| (p, self.engine_for(p)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order() {
        let names: Vec<_> = DebatePhase::ALL.iter().map(|p| p.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "interpretation",
                "safety",
                "explanation",
                "alternate_view",
                "uncensored_review"
            ]
        );
        for (i, phase) in DebatePhase::ALL.iter().enumerate() {
            assert_eq!(phase.ordinal(), i);
        }
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&DebatePhase::AlternateView).unwrap();
        assert_eq!(json, "\"alternate_view\"");
        let phase: DebatePhase = serde_json::from_str("\"uncensored_review\"").unwrap();
        assert_eq!(phase, DebatePhase::UncensoredReview);
    }

    #[test]
    fn test_parse_phase() {
        assert_eq!("safety".parse::<DebatePhase>(), Ok(DebatePhase::Safety));
        assert_eq!(
            "Alternate-View".parse::<DebatePhase>(),
            Ok(DebatePhase::AlternateView)
        );
        assert!(matches!(
            "verdict".parse::<DebatePhase>(),
            Err(DomainError::UnknownPhase(_))
        ));
    }

    #[test]
    fn test_default_bindings() {
        let bindings = PhaseBindings::default();
        assert_eq!(bindings.engine_for(DebatePhase::Interpretation), "deepseek-r1:8b");
        assert_eq!(bindings.engine_for(DebatePhase::Safety), "qwen2.5:3b");
        assert_eq!(bindings.engine_for(DebatePhase::Explanation), "gemma3:4b");
    }

    #[test]
    fn test_with_engine_and_iter() {
        let bindings = PhaseBindings::default().with_engine(DebatePhase::Safety, "guard");
        let pairs: Vec<_> = bindings.iter().collect();
        assert_eq!(pairs.len(), 5);
        assert_eq!(pairs[1], (DebatePhase::Safety, "guard"));
        assert_eq!(pairs[0], (DebatePhase::Interpretation, "deepseek-r1:8b"));
    }
}
