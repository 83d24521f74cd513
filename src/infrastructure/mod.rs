//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `environment/` - Target environments (in-memory, JSON state file)
//! - `events/` - Run event sinks (tracing, NDJSON)
//! - `fs/` - Local file system record writer
//! - `repositories/` - Record file codec

pub mod environment;
pub mod events;
pub mod fs;
pub mod repositories;

// Re-export for convenience
pub use environment::{InMemoryEnvironment, StateFileEnvironment};
pub use events::{JsonEventSink, TracingEventSink};
pub use fs::LocalFs;
pub use repositories::{decode_record, encode_record};
