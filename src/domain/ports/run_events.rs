//! Run Event Port
//!
//! Provides an observable interface for provisioning runs.
//! Enables progress logging, JSON event streams, and test assertions.

use std::path::PathBuf;

use crate::domain::entities::RecordValue;
use crate::domain::value_objects::{Address, ContentHash};

/// Event emitted during a deployment run
#[derive(Debug, Clone, PartialEq)]
pub enum RunEvent {
    /// A variant name was resolved
    VariantResolved { name: String, salt: String },

    /// The target address was derived
    AddressPredicted {
        address: Address,
        payload_hash: ContentHash,
    },

    /// Something already lives at the predicted address and passed
    /// footprint and owner checks
    ExistingVerified { address: Address, owner: Address },

    /// The payload was freshly deployed
    Deployed { address: Address },

    /// A record entry changed in memory
    RecordChanged { key: String, value: RecordValue },

    /// A snapshot reached disk
    SnapshotSaved {
        path: PathBuf,
        sequence: Option<u32>,
        entries: usize,
    },
}

/// Trait for receiving run events
///
/// Implementations:
/// - `TracingEventSink`: structured log lines
/// - `JsonEventSink`: NDJSON event stream for CI
/// - `NoopEventSink`: silent operation
pub trait RunEventSink: Send + Sync {
    fn on_event(&self, event: RunEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl RunEventSink for NoopEventSink {
    fn on_event(&self, _event: RunEvent) {}
}
