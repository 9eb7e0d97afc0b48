//! autonomy-debate: debate every step of proposal.json

use anyhow::Result;
use autonomy_application::{DebateOutcome, DebateRepository, RunDebateUseCase};
use autonomy_domain::HistorySummary;
use autonomy_infrastructure::{CommandEngine, StateDir, TextTraceLog};
use autonomy_presentation::{
    ConsoleFormatter, DebateCli, OutputFormat, ProgressReporter, SimpleProgress,
};
use clap::Parser;
use std::io::IsTerminal;
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = DebateCli::parse();

    autonomy_cli::init_logging(cli.common.verbose);

    if autonomy_cli::show_config_requested(&cli.common) {
        return Ok(());
    }

    let config = autonomy_cli::load_config(&cli.common)?;
    let state = autonomy_cli::resolve_state_dir(&cli.common, &config)?;

    if cli.history {
        return show_history(&state);
    }

    let params = autonomy_cli::debate_params(&cli, &config)?;

    // === Dependency Injection ===
    let engine = Arc::new(CommandEngine::new(
        config.engine.program.clone(),
        config.engine.args.clone(),
    ));
    if !engine.is_available() {
        warn!(
            "Engine program '{}' not found on PATH; every phase will fail",
            engine.program()
        );
    }

    let use_case = RunDebateUseCase::new(
        engine,
        Arc::new(state.proposal_store()),
        Arc::new(state.debate_store()),
        Arc::new(TextTraceLog::new(state.debate_log_path())),
    );

    info!("Debating with {:?}", params.bindings);

    let outcome = if cli.quiet {
        use_case.execute(&params).await?
    } else if std::io::stderr().is_terminal() {
        let progress = ProgressReporter::new();
        use_case.execute_with_progress(&params, &progress).await?
    } else {
        use_case.execute_with_progress(&params, &SimpleProgress).await?
    };

    match outcome {
        DebateOutcome::NoAction(reason) => {
            if !cli.quiet {
                println!("{}", reason);
            }
        }
        DebateOutcome::Completed(debate) => {
            let output = match cli.output {
                OutputFormat::Full => ConsoleFormatter::format_debate(&debate),
                OutputFormat::Summary => ConsoleFormatter::format_summary(&debate),
                OutputFormat::Json => ConsoleFormatter::format_json(&debate),
            };
            println!("{}", output);
        }
    }

    Ok(())
}

fn show_history(state: &StateDir) -> Result<()> {
    let history = state.debate_store().load_history()?;
    if history.skipped > 0 {
        warn!(
            "Skipped {} malformed line(s) in {}",
            history.skipped,
            state.history_path().display()
        );
    }

    let summary = HistorySummary::from_debates(&history.debates);
    print!("{}", ConsoleFormatter::format_history(&summary, history.skipped));
    Ok(())
}
