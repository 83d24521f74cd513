//! Event Sink Implementations
//!
//! Concrete implementations of RunEventSink:
//! - JsonEventSink: NDJSON output for CI/automation
//! - TracingEventSink: structured log lines

mod json;
mod tracing_sink;

pub use json::JsonEventSink;
pub use tracing_sink::TracingEventSink;
