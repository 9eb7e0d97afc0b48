//! Trace log files
//!
//! Provides [`TextTraceLog`], a plain-text writer implementing the
//! [`TraceLog`](autonomy_application::TraceLog) port for `planner.log` and
//! `debate.log`.

mod text_trace_log;

pub use text_trace_log::TextTraceLog;
