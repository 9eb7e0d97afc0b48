//! Console output formatter for proposals and debates

use autonomy_domain::{Debate, HistorySummary, Proposal, RiskLevel, StepDebate};
use colored::{ColoredString, Colorize};

/// Formats pipeline artifacts for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Every phase of every step
    pub fn format_debate(debate: &Debate) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Debate Results"));
        output.push('\n');

        output.push_str(&format!("{} {}\n", "Task:".cyan().bold(), debate.task));
        output.push_str(&format!("{} {}\n", "Completed:".cyan().bold(), debate.time));

        for step in &debate.steps {
            output.push_str(&Self::section_header(&format!(
                "Step {}: {}",
                step.step_id, step.command
            )));
            output.push_str(&format!("{}\n", Self::summary_line(step)));

            for phase in &step.phases {
                let title = format!(
                    "── {} ({}, {:.2}s) ──",
                    phase.phase.display_name(),
                    phase.model,
                    phase.duration_s
                );
                if phase.is_success() {
                    output.push_str(&format!(
                        "\n{}\n{}\n",
                        title.yellow().bold(),
                        Self::indent(&phase.output, "  ")
                    ));
                } else {
                    output.push_str(&format!(
                        "\n{}\nError: {}\n",
                        title.red().bold(),
                        phase.error.as_deref().unwrap_or(&phase.output)
                    ));
                }
            }
        }

        output.push_str(&Self::footer());
        output
    }

    /// One line per step
    pub fn format_summary(debate: &Debate) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n\n", "=== Debate Summary ===".cyan().bold()));
        output.push_str(&format!("{} {}\n\n", "Task:".bold(), debate.task));

        for step in &debate.steps {
            output.push_str(&format!(
                "  {:<12} {}  {}\n",
                step.step_id,
                Self::summary_line(step),
                step.command.dimmed()
            ));
        }

        if let Some(level) = debate.overall_risk() {
            output.push_str(&format!(
                "\n{} {}\n",
                "Overall risk:".bold(),
                Self::risk_label(level)
            ));
        }

        let failed = debate.failed_phase_count();
        if failed > 0 {
            output.push_str(&format!(
                "\n{} {} phase call(s) failed\n",
                "!".yellow().bold(),
                failed
            ));
        }

        output
    }

    /// Format as JSON
    pub fn format_json(debate: &Debate) -> String {
        serde_json::to_string_pretty(debate).unwrap_or_else(|_| "{}".to_string())
    }

    /// Pretty JSON, as written to the proposal store
    pub fn format_proposal_json(proposal: &Proposal) -> String {
        serde_json::to_string_pretty(proposal).unwrap_or_else(|_| "{}".to_string())
    }

    /// Step table for `autonomy-plan --show`
    pub fn format_proposal_table(proposal: &Proposal) -> String {
        let mut output = String::new();

        output.push_str(&format!("{} {}\n", "Task:".cyan().bold(), proposal.task));
        output.push_str(&format!(
            "{} {:.2}\n\n",
            "Confidence:".cyan().bold(),
            proposal.confidence
        ));

        if !proposal.has_steps() {
            output.push_str(&format!("{}\n", "(no steps)".dimmed()));
            return output;
        }

        let id_width = proposal
            .steps
            .iter()
            .map(|s| s.id.chars().count())
            .max()
            .unwrap_or(0)
            .max(2);

        output.push_str(&format!(
            "  {:<id_width$}  {:<6}  {}\n",
            "ID".bold(),
            "RISK".bold(),
            "COMMAND".bold(),
            id_width = id_width
        ));
        for step in &proposal.steps {
            output.push_str(&format!(
                "  {:<id_width$}  {:<6}  {}\n",
                step.id,
                step.risk,
                step.command,
                id_width = id_width
            ));
            if !step.description.is_empty() {
                output.push_str(&format!(
                    "  {:<id_width$}  {:<6}  {}\n",
                    "",
                    "",
                    step.description.dimmed(),
                    id_width = id_width
                ));
            }
        }

        output
    }

    /// Aggregate view for `autonomy-debate --history`
    pub fn format_history(summary: &HistorySummary, skipped: usize) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Debate History"));
        output.push('\n');

        if summary.is_empty() {
            output.push_str("No debates recorded yet.\n");
        } else {
            output.push_str(&format!(
                "{} {} debate(s), {} step(s)\n",
                "Recorded:".cyan().bold(),
                summary.debates,
                summary.steps
            ));
            if let Some(latest) = &summary.latest {
                output.push_str(&format!("{} {}\n", "Latest:".cyan().bold(), latest));
            }
            output.push_str(&format!(
                "{} {:.2}\n",
                "Mean agreement:".cyan().bold(),
                summary.mean_agreement
            ));

            output.push_str(&Self::section_header("Risk levels"));
            for level in [RiskLevel::High, RiskLevel::Medium, RiskLevel::Low] {
                output.push_str(&format!(
                    "  {:<8} {}\n",
                    Self::risk_label(level),
                    summary.risk_count(level)
                ));
            }

            if !summary.phase_failures.is_empty() {
                output.push_str(&Self::section_header("Failures by phase"));
                for (phase, count) in &summary.phase_failures {
                    output.push_str(&format!("  {:<18} {}\n", phase.as_str(), count));
                }
            }

            if !summary.engine_failures.is_empty() {
                output.push_str(&Self::section_header("Failures by engine"));
                for (engine, count) in &summary.engine_failures {
                    output.push_str(&format!("  {:<18} {}\n", engine, count));
                }
            }
        }

        if skipped > 0 {
            output.push_str(&format!(
                "\n{} {} malformed history line(s) skipped\n",
                "!".yellow().bold(),
                skipped
            ));
        }

        output.push_str(&Self::footer());
        output
    }

    fn summary_line(step: &StepDebate) -> String {
        format!(
            "risk={} agreement={:.2}",
            Self::risk_label(step.summary.risk_level),
            step.summary.agreement
        )
    }

    fn risk_label(level: RiskLevel) -> ColoredString {
        match level {
            RiskLevel::High => level.as_str().red().bold(),
            RiskLevel::Medium => level.as_str().yellow(),
            RiskLevel::Low => level.as_str().green(),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use autonomy_domain::{DebatePhase, EchoPlanner, PhaseResult, Planner, Step};
    use std::time::Duration;

    fn sample_debate() -> Debate {
        let step = Step::new("step-1", "Echo the task", "echo \"hi\"", "low");
        let phases = vec![
            PhaseResult::success(
                DebatePhase::Safety,
                "qwen2.5:3b",
                "p",
                "Risk of data loss.",
                Duration::from_millis(1500),
            ),
            PhaseResult::failure(
                DebatePhase::Explanation,
                "gemma3:4b",
                "p",
                "gemma3:4b unavailable (timed out after 90s)",
                Duration::from_secs(90),
            ),
        ];
        Debate::new(
            "say hi",
            1,
            "2026-10-19T09:30:00",
            vec![StepDebate::aggregate(&step, phases)],
        )
    }

    #[test]
    fn test_format_debate_shows_phases_and_errors() {
        let text = ConsoleFormatter::format_debate(&sample_debate());
        assert!(text.contains("say hi"));
        assert!(text.contains("Risk of data loss."));
        assert!(text.contains("gemma3:4b unavailable (timed out after 90s)"));
        assert!(!text.contains("Uncensored Review"));
        assert!(text.contains("1.50s"));
    }

    #[test]
    fn test_format_summary_lists_steps() {
        let text = ConsoleFormatter::format_summary(&sample_debate());
        assert!(text.contains("step-1"));
        assert!(text.contains("high"));
        assert!(text.contains("agreement=0.30"));
        assert!(text.contains("Overall risk:"));
        assert!(text.contains("1 phase call(s) failed"));
    }

    #[test]
    fn test_summary_without_steps_has_no_overall_risk() {
        let debate = Debate::new("t", 0, "", vec![]);
        let text = ConsoleFormatter::format_summary(&debate);
        assert!(!text.contains("Overall risk:"));
    }

    #[test]
    fn test_format_json_round_trips() {
        let debate = sample_debate();
        let parsed: Debate =
            serde_json::from_str(&ConsoleFormatter::format_json(&debate)).unwrap();
        assert_eq!(parsed, debate);
    }

    #[test]
    fn test_proposal_table() {
        let proposal = EchoPlanner.plan("say hi").proposal().cloned().unwrap();
        let text = ConsoleFormatter::format_proposal_table(&proposal);
        assert!(text.contains("say hi"));
        assert!(text.contains("0.40"));
        assert!(text.contains("step-1"));
        assert!(text.contains("echo \"say hi\""));
    }

    #[test]
    fn test_empty_proposal_table() {
        let text = ConsoleFormatter::format_proposal_table(&Proposal::new("t", 0.4, vec![]));
        assert!(text.contains("(no steps)"));
    }

    #[test]
    fn test_history_summary() {
        let debates = vec![sample_debate(), sample_debate()];
        let summary = HistorySummary::from_debates(&debates);
        let text = ConsoleFormatter::format_history(&summary, 1);
        assert!(text.contains("2 debate(s), 2 step(s)"));
        assert!(text.contains("explanation"));
        assert!(text.contains("gemma3:4b"));
        assert!(text.contains("1 malformed history line(s) skipped"));
    }

    #[test]
    fn test_empty_history() {
        let text = ConsoleFormatter::format_history(&HistorySummary::default(), 0);
        assert!(text.contains("No debates recorded yet."));
    }

    #[test]
    fn test_indent() {
        assert_eq!(ConsoleFormatter::indent("a\nb", "  "), "  a\n  b");
    }
}
