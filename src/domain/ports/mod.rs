//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod record_writer;
pub mod run_events;
pub mod target_environment;

pub use record_writer::{RecordWriter, WriteResult};
pub use run_events::{NoopEventSink, RunEvent, RunEventSink};
pub use target_environment::{EnvResult, EnvironmentError, TargetEnvironment};
