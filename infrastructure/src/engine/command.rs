//! Reasoning engine backed by an external command
//!
//! Each call spawns `<program> <args...> <engine> <prompt>` once, for
//! example `ollama run qwen2.5:3b "<prompt>"`, and reads the completion from
//! stdout with surrounding whitespace trimmed. A non-zero exit or an
//! elapsed timeout is the only failure signal; a timed-out process is killed.

use async_trait::async_trait;
use autonomy_application::ports::reasoning_engine::{EngineError, ReasoningEngine};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::debug;

/// Maximum stderr characters kept in an error message
const STDERR_PREVIEW_CHARS: usize = 400;

#[derive(Debug, Clone)]
pub struct CommandEngine {
    program: String,
    args: Vec<String>,
}

impl CommandEngine {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// `ollama run <engine> <prompt>`
    pub fn ollama() -> Self {
        Self::new("ollama", vec!["run".to_string()])
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Whether the program can be found on `PATH`
    pub fn is_available(&self) -> bool {
        which::which(&self.program).is_ok()
    }
}

impl Default for CommandEngine {
    fn default() -> Self {
        Self::ollama()
    }
}

#[async_trait]
impl ReasoningEngine for CommandEngine {
    async fn complete(
        &self,
        engine: &str,
        prompt: &str,
        timeout: Duration,
    ) -> Result<String, EngineError> {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args).arg(engine).arg(prompt);
        cmd.kill_on_drop(true);
        cmd.stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        debug!("Spawning {} for engine {}", self.program, engine);

        let child = cmd
            .spawn()
            .map_err(|e| EngineError::Spawn(format!("{}: {}", self.program, e)))?;

        // Dropping the wait future on timeout drops the child, which kills it
        let output = match tokio::time::timeout(timeout, child.wait_with_output()).await {
            Ok(Ok(output)) => output,
            Ok(Err(e)) => return Err(EngineError::Io(e.to_string())),
            Err(_) => return Err(EngineError::Timeout(timeout)),
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(EngineError::NonZeroExit {
                code: output.status.code().unwrap_or(-1),
                stderr: preview(stderr.trim(), STDERR_PREVIEW_CHARS),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

fn preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max_chars).collect();
    cut.push_str("...");
    cut
}
