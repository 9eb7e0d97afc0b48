//! Risk classification from free-text safety assessments
//!
//! Classification is an ordered list of keyword rules evaluated against the
//! lower-cased text of the safety phase. The first rule with any matching
//! keyword wins, so text mentioning both "danger" and "safe" is high risk.
//! When nothing matches the result is the neutral [`DebateSummary::neutral`].

use serde::{Deserialize, Serialize};

/// Risk level derived from the safety phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-step risk and agreement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DebateSummary {
    pub risk_level: RiskLevel,
    /// Agreement score in [0, 1]
    pub agreement: f64,
}

impl DebateSummary {
    pub fn new(risk_level: RiskLevel, agreement: f64) -> Self {
        Self {
            risk_level,
            agreement: agreement.clamp(0.0, 1.0),
        }
    }

    /// Outcome when no rule matches or the safety phase failed
    pub fn neutral() -> Self {
        Self::new(RiskLevel::Medium, NEUTRAL_AGREEMENT)
    }
}

impl Default for DebateSummary {
    fn default() -> Self {
        Self::neutral()
    }
}

const NEUTRAL_AGREEMENT: f64 = 0.7;

/// A keyword set mapped to a classification
#[derive(Debug, Clone, Copy)]
pub struct RiskRule {
    pub keywords: &'static [&'static str],
    pub risk_level: RiskLevel,
    pub agreement: f64,
}

impl RiskRule {
    /// `text` must already be lower-cased
    pub fn matches(&self, text: &str) -> bool {
        self.keywords.iter().any(|k| text.contains(k))
    }
}

/// Rules in priority order
pub const RISK_RULES: [RiskRule; 2] = [
    RiskRule {
        keywords: &["danger", "high risk", "data loss", "irreversible"],
        risk_level: RiskLevel::High,
        agreement: 0.3,
    },
    RiskRule {
        keywords: &["safe", "low risk", "non-destructive"],
        risk_level: RiskLevel::Low,
        agreement: 0.85,
    },
];

/// Classify a safety assessment
///
/// # Example
///
/// ```
/// use autonomy_domain::debate::{classify_risk, RiskLevel};
///
/// let summary = classify_risk("This could cause IRREVERSIBLE damage");
/// assert_eq!(summary.risk_level, RiskLevel::High);
/// assert_eq!(summary.agreement, 0.3);
/// ```
pub fn classify_risk(safety_text: &str) -> DebateSummary {
    let normalized = safety_text.to_lowercase();
    RISK_RULES
        .iter()
        .find(|rule| rule.matches(&normalized))
        .map(|rule| DebateSummary::new(rule.risk_level, rule.agreement))
        .unwrap_or_else(DebateSummary::neutral)
}
