//! Prompt templates for the debate phases

use crate::debate::DebatePhase;
use crate::proposal::Step;

/// Templates for generating the prompt of each debate phase
///
/// A prompt is the phase instruction followed by the pretty-printed step.
pub struct DebatePromptTemplate;

impl DebatePromptTemplate {
    /// Fixed instruction for a phase
    pub fn instruction(phase: DebatePhase) -> &'static str {
        match phase {
            DebatePhase::Interpretation => "Explain the intent of this command:\n",
            DebatePhase::Safety => {
                "Assess the safety risks of executing this command on a Linux system:\n"
            }
            DebatePhase::Explanation => "Explain this command clearly to a system operator:\n",
            DebatePhase::AlternateView => {
                "Argue the opposing view: propose a safer or simpler way to achieve the same goal, \
or explain why this command should not be run at all:\n"
            }
            DebatePhase::UncensoredReview => {
                "Give a blunt, unfiltered review of this command. Point out anything the other \
reviewers might soften or leave out:\n"
            }
        }
    }

    /// Full prompt sent to the engine bound to `phase`
    pub fn render(phase: DebatePhase, step: &Step) -> String {
        format!("{}{}", Self::instruction(phase), step.to_pretty_json())
    }
}
