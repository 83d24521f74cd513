//! Tracing Event Sink
//!
//! Turns run events into structured log lines.

use tracing::info;

use crate::domain::ports::{RunEvent, RunEventSink};

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventSink;

impl RunEventSink for TracingEventSink {
    fn on_event(&self, event: RunEvent) {
        match event {
            RunEvent::VariantResolved { name, salt } => {
                info!(variant = %name, salt = %salt, "variant resolved");
            }
            RunEvent::AddressPredicted {
                address,
                payload_hash,
            } => {
                info!(address = %address.to_checksum(), payload_hash = %payload_hash, "address predicted");
            }
            RunEvent::ExistingVerified { address, owner } => {
                info!(address = %address.to_checksum(), owner = %owner.to_checksum(), "existing deployment verified");
            }
            RunEvent::Deployed { address } => {
                info!(address = %address.to_checksum(), "deployed");
            }
            RunEvent::RecordChanged { key, value } => {
                info!(key = %key, value = %value, "record changed");
            }
            RunEvent::SnapshotSaved {
                path,
                sequence,
                entries,
            } => {
                info!(path = %path.display(), ?sequence, entries, "snapshot saved");
            }
        }
    }
}
