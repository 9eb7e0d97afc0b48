//! Aggregate statistics over the debate history
//!
//! Feeds heat-map style reviews: how often each risk level came up, how
//! much the engines agreed on average, and which phases and engines fail.

use super::entities::Debate;
use super::phase::DebatePhase;
use super::risk::RiskLevel;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistorySummary {
    pub debates: usize,
    pub steps: usize,
    pub risk_counts: BTreeMap<RiskLevel, usize>,
    /// Mean agreement over all steps (0.0 when there are none)
    pub mean_agreement: f64,
    pub phase_failures: BTreeMap<DebatePhase, usize>,
    pub engine_failures: BTreeMap<String, usize>,
    /// Completion time of the newest debate
    pub latest: Option<String>,
}

impl HistorySummary {
    pub fn from_debates<'a>(debates: impl IntoIterator<Item = &'a Debate>) -> Self {
        let mut summary = Self::default();
        let mut agreement_total = 0.0;
        let mut latest_ts = i64::MIN;

        for debate in debates {
            summary.debates += 1;
            if debate.timestamp >= latest_ts {
                latest_ts = debate.timestamp;
                summary.latest = Some(debate.time.clone());
            }

            for step in &debate.steps {
                summary.steps += 1;
                agreement_total += step.summary.agreement;
                *summary
                    .risk_counts
                    .entry(step.summary.risk_level)
                    .or_default() += 1;

                for failed in step.failed_phases() {
                    *summary.phase_failures.entry(failed.phase).or_default() += 1;
                    *summary
                        .engine_failures
                        .entry(failed.model.clone())
                        .or_default() += 1;
                }
            }
        }

        if summary.steps > 0 {
            summary.mean_agreement = agreement_total / summary.steps as f64;
        }
        summary
    }

    pub fn risk_count(&self, level: RiskLevel) -> usize {
        self.risk_counts.get(&level).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.debates == 0
    }
}
