//! Shared wiring for the autonomy binaries
//!
//! Both `autonomy-plan` and `autonomy-debate` initialize logging, resolve
//! the configuration and the state directory the same way. The planner's
//! task intake and output live here too so they run without a terminal.

use anyhow::{Context, Result, anyhow, bail};
use autonomy_application::{DebateParams, PlanTaskUseCase};
use autonomy_domain::{NO_ACTION, PlanOutcome};
use autonomy_infrastructure::{ConfigLoader, FileConfig, Severity, StateDir, TextTraceLog};
use autonomy_presentation::{ConfigArgs, ConsoleFormatter, DebateCli};
use std::io::{Read, Write};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Initialize logging to stderr based on verbosity level
///
/// `RUST_LOG` takes precedence over `-v` when set.
pub fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| verbosity_filter(verbose));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn verbosity_filter(verbose: u8) -> EnvFilter {
    match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    }
}

/// Load configuration honoring `--no-config` and `--config`
///
/// Warnings are logged; any error-level issue aborts.
pub fn load_config(args: &ConfigArgs) -> Result<FileConfig> {
    let config = if args.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(args.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let issues = config.validate();
    for issue in issues.iter().filter(|i| i.severity == Severity::Warning) {
        warn!("{}", issue.message);
    }
    if config.has_errors() {
        let fatal: Vec<_> = issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .map(|i| i.message.as_str())
            .collect();
        bail!("Invalid configuration: {}", fatal.join("; "));
    }

    Ok(config)
}

/// Orchestrator parameters: the config file, then the command line
pub fn debate_params(cli: &DebateCli, config: &FileConfig) -> Result<DebateParams> {
    let mut params = config.debate_params();
    if let Some(secs) = cli.timeout {
        if secs == 0 {
            bail!("--timeout must be at least 1 second");
        }
        params = params.with_timeout(Duration::from_secs(secs));
    }
    if cli.parallel {
        params = params.with_parallel_phases(true);
    }
    for (phase, engine) in &cli.engines {
        params = params.with_engine(*phase, engine.clone());
    }
    Ok(params)
}

/// `--state-dir`, then `[state] dir`, then `~/.autonomy`
pub fn resolve_state_dir(args: &ConfigArgs, config: &FileConfig) -> Result<StateDir> {
    let root = match &args.state_dir {
        Some(dir) => dir.clone(),
        None => config
            .state
            .resolve_dir(StateDir::default_location())
            .context("Could not determine the home directory; pass --state-dir")?,
    };
    let state = StateDir::new(root);
    state.ensure()?;
    Ok(state)
}

/// Task text for `autonomy-plan`
///
/// Positional words win; `input` is read only when there are none and it
/// is not a terminal. Otherwise the task is empty.
pub fn resolve_task<R: Read>(
    words: Option<String>,
    input_is_terminal: bool,
    mut input: R,
) -> Result<String> {
    if let Some(task) = words {
        return Ok(task);
    }
    if input_is_terminal {
        return Ok(String::new());
    }

    let mut task = String::new();
    input
        .read_to_string(&mut task)
        .context("Failed to read task from stdin")?;
    Ok(task)
}

/// Plan `task` into `state` and print the outcome to `out` unless `quiet`
///
/// The proposal store and `planner.log` are written either way.
pub fn plan_task<W: Write>(
    state: &StateDir,
    task: &str,
    quiet: bool,
    out: &mut W,
) -> Result<PlanOutcome> {
    info!("Planning task ({} chars)", task.len());

    // === Dependency Injection ===
    let store = Arc::new(state.proposal_store());
    let trace = Arc::new(TextTraceLog::new(state.planner_log_path()));
    let use_case = PlanTaskUseCase::new(store, trace);

    let outcome = use_case.execute(task)?;
    if !quiet {
        match &outcome {
            PlanOutcome::NoAction => writeln!(out, "{}", NO_ACTION)?,
            PlanOutcome::Proposal(proposal) => writeln!(
                out,
                "{}",
                ConsoleFormatter::format_proposal_json(proposal)
            )?,
        }
    }

    Ok(outcome)
}

/// Handle `--show-config`; returns true when the binary should exit
pub fn show_config_requested(args: &ConfigArgs) -> bool {
    if args.show_config {
        ConfigLoader::print_config_sources(args.config.as_ref());
    }
    args.show_config
}

#[cfg(test)]
mod tests {
    use super::*;
    use autonomy_domain::{DebatePhase, Proposal};
    use clap::Parser;
    use std::io::Cursor;

    fn temp_state() -> (tempfile::TempDir, StateDir) {
        let dir = tempfile::tempdir().unwrap();
        let state = StateDir::new(dir.path().join("state"));
        state.ensure().unwrap();
        (dir, state)
    }

    fn planner_log(state: &StateDir) -> String {
        std::fs::read_to_string(state.planner_log_path()).unwrap()
    }

    #[test]
    fn test_words_win_over_stdin() {
        let task = resolve_task(
            Some("disk cleanup".to_string()),
            false,
            Cursor::new("from stdin"),
        )
        .unwrap();
        assert_eq!(task, "disk cleanup");
    }

    #[test]
    fn test_stdin_read_without_words() {
        let task = resolve_task(None, false, Cursor::new("rotate nginx logs\n")).unwrap();
        assert_eq!(task, "rotate nginx logs\n");
    }

    #[test]
    fn test_terminal_stdin_is_not_read() {
        let task = resolve_task(None, true, Cursor::new("never read")).unwrap();
        assert_eq!(task, "");
    }

    #[test]
    fn test_plan_prints_proposal_json() {
        let (_dir, state) = temp_state();
        let mut out = Vec::new();

        let outcome = plan_task(&state, "disk cleanup", false, &mut out).unwrap();

        let printed: Proposal = serde_json::from_slice(&out).unwrap();
        assert_eq!(Some(&printed), outcome.proposal());
        assert!(state.proposal_path().is_file());
    }

    #[test]
    fn test_quiet_plan_still_writes_store_and_log() {
        let (_dir, state) = temp_state();
        let mut out = Vec::new();

        let outcome = plan_task(&state, "disk cleanup", true, &mut out).unwrap();

        assert!(out.is_empty());
        assert!(!outcome.is_no_action());
        let saved = std::fs::read_to_string(state.proposal_path()).unwrap();
        assert!(saved.contains("echo \\\"disk cleanup\\\""));
        assert!(planner_log(&state).contains("Wrote proposal.json with 1 step(s)"));
    }

    #[test]
    fn test_empty_task_prints_no_action_and_keeps_store() {
        let (_dir, state) = temp_state();
        let mut out = Vec::new();

        let outcome = plan_task(&state, "  \n", false, &mut out).unwrap();

        assert!(outcome.is_no_action());
        assert_eq!(String::from_utf8(out).unwrap(), "NO_ACTION\n");
        assert!(!state.proposal_path().exists());
        assert!(planner_log(&state).contains("No task provided; NO_ACTION"));
    }

    #[test]
    fn test_quiet_no_action_prints_nothing() {
        let (_dir, state) = temp_state();
        let mut out = Vec::new();
        plan_task(&state, "", true, &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_debate_params_apply_flags_over_config() {
        let cli = DebateCli::parse_from([
            "autonomy-debate",
            "--timeout",
            "5",
            "--parallel",
            "--engine",
            "safety=llama-guard3:1b",
        ]);
        let params = debate_params(&cli, &FileConfig::default()).unwrap();
        assert_eq!(params.timeout, Duration::from_secs(5));
        assert!(params.parallel_phases);
        assert_eq!(
            params.bindings.engine_for(DebatePhase::Safety),
            "llama-guard3:1b"
        );
        assert_eq!(
            params.bindings.engine_for(DebatePhase::Explanation),
            "gemma3:4b"
        );
    }

    #[test]
    fn test_zero_timeout_flag_is_rejected() {
        let cli = DebateCli::parse_from(["autonomy-debate", "--timeout", "0"]);
        assert!(debate_params(&cli, &FileConfig::default()).is_err());
    }

    #[test]
    fn test_no_config_uses_defaults() {
        let args = ConfigArgs {
            no_config: true,
            ..Default::default()
        };
        let config = load_config(&args).unwrap();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("autonomy.toml");
        std::fs::write(&path, "[debate]\ntimeout_secs = 0\n").unwrap();

        let args = ConfigArgs {
            config: Some(path),
            ..Default::default()
        };
        let err = load_config(&args).unwrap_err();
        assert!(err.to_string().contains("timeout_secs"));
    }

    #[test]
    fn test_state_dir_flag_wins_and_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("state");

        let mut config = FileConfig::default();
        config.state.dir = Some("/nonexistent/elsewhere".to_string());
        let args = ConfigArgs {
            state_dir: Some(target.clone()),
            ..Default::default()
        };

        let state = resolve_state_dir(&args, &config).unwrap();
        assert_eq!(state.root(), target.as_path());
        assert!(target.is_dir());
    }

    #[test]
    fn test_state_dir_from_config() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = FileConfig::default();
        config.state.dir = Some(dir.path().join("cfg").to_string_lossy().into_owned());

        let state = resolve_state_dir(&ConfigArgs::default(), &config).unwrap();
        assert_eq!(state.root(), dir.path().join("cfg").as_path());
    }
}
