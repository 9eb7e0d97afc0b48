//! Proposal entities
//!
//! A [`Proposal`] is the planner's answer to a free-text task: an ordered list
//! of [`Step`]s, each carrying the literal shell command it stands for.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One candidate command within a [`Proposal`]
///
/// Field order matters: the debate prompts embed the pretty-printed step, so
/// the serialized layout is part of what every engine sees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// Unique identifier within the proposal (e.g., "step-1")
    pub id: String,
    /// Human-readable summary
    #[serde(default)]
    pub description: String,
    /// Literal shell command this step represents
    pub command: String,
    /// Planner-assigned initial risk label (informational only)
    #[serde(default)]
    pub risk: String,
}

impl Step {
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        command: impl Into<String>,
        risk: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            command: command.into(),
            risk: risk.into(),
        }
    }

    /// Canonical serialization embedded in debate prompts (2-space pretty JSON)
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| self.command.clone())
    }
}

/// A task decomposed into ordered steps awaiting debate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Proposal {
    /// The originating request
    #[serde(default)]
    pub task: String,
    /// Planner confidence in [0, 1]
    #[serde(default)]
    pub confidence: f64,
    /// Steps in execution (and debate) order
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Proposal {
    pub fn new(task: impl Into<String>, confidence: f64, steps: Vec<Step>) -> Self {
        Self {
            task: task.into(),
            confidence,
            steps,
        }
    }

    /// A proposal without steps is never debated
    pub fn has_steps(&self) -> bool {
        !self.steps.is_empty()
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Check that every step id is non-empty and unique.
    ///
    /// `confidence` is informational and never rejected.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::new();
        for step in &self.steps {
            if step.id.trim().is_empty() {
                return Err(DomainError::EmptyStepId);
            }
            if !seen.insert(step.id.as_str()) {
                return Err(DomainError::DuplicateStepId(step.id.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_step(id: &str) -> Step {
        Step::new(id, "list files", "ls -la", "low")
    }

    #[test]
    fn test_step_pretty_json_keeps_field_order() {
        let json = sample_step("step-1").to_pretty_json();
        let id_pos = json.find("\"id\"").unwrap();
        let desc_pos = json.find("\"description\"").unwrap();
        let cmd_pos = json.find("\"command\"").unwrap();
        let risk_pos = json.find("\"risk\"").unwrap();
        assert!(id_pos < desc_pos && desc_pos < cmd_pos && cmd_pos < risk_pos);
        assert!(json.contains("\n  \"id\": \"step-1\""));
    }

    #[test]
    fn test_deserialize_tolerates_missing_optional_fields() {
        let json = r#"{"steps": [{"id": "s1", "command": "true"}]}"#;
        let proposal: Proposal = serde_json::from_str(json).unwrap();
        assert_eq!(proposal.task, "");
        assert_eq!(proposal.steps[0].description, "");
        assert_eq!(proposal.steps[0].risk, "");
    }

    #[test]
    fn test_deserialize_requires_command() {
        let json = r#"{"task": "x", "steps": [{"id": "s1"}]}"#;
        assert!(serde_json::from_str::<Proposal>(json).is_err());
    }

    #[test]
    fn test_has_steps() {
        assert!(!Proposal::new("t", 0.4, vec![]).has_steps());
        assert!(Proposal::new("t", 0.4, vec![sample_step("a")]).has_steps());
    }

    #[test]
    fn test_validate_duplicate_ids() {
        let proposal = Proposal::new("t", 0.4, vec![sample_step("a"), sample_step("a")]);
        assert_eq!(
            proposal.validate(),
            Err(DomainError::DuplicateStepId("a".to_string()))
        );
    }

    #[test]
    fn test_validate_ignores_confidence() {
        let proposal = Proposal::new("t", 1.5, vec![sample_step("a")]);
        assert_eq!(proposal.validate(), Ok(()));
        let proposal = Proposal::new("t", -0.2, vec![sample_step("a")]);
        assert_eq!(proposal.validate(), Ok(()));
    }

    #[test]
    fn test_validate_empty_id() {
        let proposal = Proposal::new("t", 0.4, vec![sample_step("  ")]);
        assert_eq!(proposal.validate(), Err(DomainError::EmptyStepId));
    }

    #[test]
    fn test_validate_ok() {
        let proposal = Proposal::new("t", 0.4, vec![sample_step("a"), sample_step("b")]);
        assert!(proposal.validate().is_ok());
    }
}
