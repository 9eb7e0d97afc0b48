//! CLI command definitions

use autonomy_domain::DebatePhase;
use clap::{Args, Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for debate results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Every phase output for every step
    Full,
    /// One line per step with risk and agreement
    Summary,
    /// The debate record as JSON
    Json,
}

/// Options shared by both binaries
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// State directory (overrides `[state] dir`; default ~/.autonomy)
    #[arg(long, value_name = "DIR")]
    pub state_dir: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

/// CLI arguments for autonomy-plan
#[derive(Parser, Debug)]
#[command(name = "autonomy-plan")]
#[command(author, version, about = "Turn a task into a proposal for debate")]
#[command(long_about = r#"
Turns a free-text task into a proposal and writes it to proposal.json in the
state directory. The task is taken from the arguments, or from stdin when no
arguments are given and stdin is not a terminal. Options may appear before or
after the task; put task words that start with '-' after `--`.

An empty task prints NO_ACTION and leaves the proposal untouched.

Example:
  autonomy-plan "clean up old docker images"
  autonomy-plan disk cleanup --quiet
  autonomy-plan -- -rf cleanup review
  echo "rotate nginx logs" | autonomy-plan
  autonomy-plan --show
"#)]
pub struct PlanCli {
    /// The task to plan (words are joined with spaces)
    pub task: Vec<String>,

    /// Do not print the proposal
    #[arg(short, long)]
    pub quiet: bool,

    /// Show the current proposal and exit
    #[arg(long)]
    pub show: bool,

    #[command(flatten)]
    pub common: ConfigArgs,
}

impl PlanCli {
    /// Task text from the arguments, if any were given
    pub fn task_text(&self) -> Option<String> {
        if self.task.is_empty() {
            None
        } else {
            Some(self.task.join(" "))
        }
    }
}

/// CLI arguments for autonomy-debate
#[derive(Parser, Debug)]
#[command(name = "autonomy-debate")]
#[command(author, version, about = "Debate each step of the current proposal")]
#[command(long_about = r#"
Runs every step of proposal.json through five debate phases, each served by
its own reasoning engine:

1. interpretation     what the command intends
2. safety             risks of running it (drives the risk classification)
3. explanation        plain explanation for an operator
4. alternate_view     the opposing argument
5. uncensored_review  a blunt review

The result is written to debate.json and appended to debate-history.jsonl.

Configuration files are loaded from (in priority order):
1. AUTONOMY_* environment variables
2. --config <path>     Explicit config file
3. ./autonomy.toml     Project-level config
4. ~/.config/autonomy/config.toml   Global config

Example:
  autonomy-debate
  autonomy-debate --parallel --timeout 30 -o summary
  autonomy-debate --engine safety=llama-guard3:1b
  autonomy-debate --history
"#)]
pub struct DebateCli {
    /// Run the five phases of each step concurrently
    #[arg(long)]
    pub parallel: bool,

    /// Per-call engine timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Bind one phase to an engine, overriding `[phases]` (repeatable)
    #[arg(long = "engine", value_name = "PHASE=ENGINE", value_parser = parse_phase_engine)]
    pub engines: Vec<(DebatePhase, String)>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    pub output: OutputFormat,

    /// Summarize the debate history and exit
    #[arg(long)]
    pub history: bool,

    /// Suppress progress indicators and the no-action message
    #[arg(short, long)]
    pub quiet: bool,

    #[command(flatten)]
    pub common: ConfigArgs,
}

/// Parse `PHASE=ENGINE`, e.g. `safety=llama-guard3:1b`
fn parse_phase_engine(value: &str) -> Result<(DebatePhase, String), String> {
    let (phase, engine) = value
        .split_once('=')
        .ok_or_else(|| format!("expected PHASE=ENGINE, got '{}'", value))?;
    let phase = phase.parse::<DebatePhase>().map_err(|e| e.to_string())?;
    let engine = engine.trim();
    if engine.is_empty() {
        return Err(format!("empty engine name for phase {}", phase));
    }
    Ok((phase, engine.to_string()))
}
