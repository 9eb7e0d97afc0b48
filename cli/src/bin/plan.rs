//! autonomy-plan: turn a task into proposal.json

use anyhow::{Result, bail};
use autonomy_application::{ProposalRepository, StoreLoad};
use autonomy_infrastructure::StateDir;
use autonomy_presentation::{ConsoleFormatter, PlanCli};
use clap::Parser;
use std::io::IsTerminal;

fn main() -> Result<()> {
    let cli = PlanCli::parse();

    autonomy_cli::init_logging(cli.common.verbose);

    if autonomy_cli::show_config_requested(&cli.common) {
        return Ok(());
    }

    let config = autonomy_cli::load_config(&cli.common)?;
    let state = autonomy_cli::resolve_state_dir(&cli.common, &config)?;

    if cli.show {
        return show_proposal(&state);
    }

    let stdin = std::io::stdin();
    let task = autonomy_cli::resolve_task(cli.task_text(), stdin.is_terminal(), stdin.lock())?;

    autonomy_cli::plan_task(&state, &task, cli.quiet, &mut std::io::stdout().lock())?;
    Ok(())
}

fn show_proposal(state: &StateDir) -> Result<()> {
    match state.proposal_store().load()? {
        StoreLoad::Found(proposal) => {
            print!("{}", ConsoleFormatter::format_proposal_table(&proposal));
            Ok(())
        }
        StoreLoad::Missing => {
            println!("No proposal found in {}", state.root().display());
            Ok(())
        }
        StoreLoad::Malformed(e) => bail!("Failed to parse proposal.json: {}", e),
    }
}
