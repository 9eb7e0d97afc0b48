//! Reasoning engine adapters
//!
//! [`CommandEngine`] implements the
//! [`ReasoningEngine`](autonomy_application::ReasoningEngine) port by
//! spawning one external process per call (`ollama run`, `ask`, ...).

mod command;

pub use command::CommandEngine;
