//! Prompt domain
//!
//! Templates for the prompts sent at each debate phase.

mod template;

pub use template::DebatePromptTemplate;
