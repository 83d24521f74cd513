//! JSON Event Sink
//!
//! Outputs run events as NDJSON for CI/automation consumption.

use crate::domain::ports::{RunEvent, RunEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl RunEventSink for JsonEventSink {
    fn on_event(&self, event: RunEvent) {
        let json = match event {
            RunEvent::VariantResolved { name, salt } => {
                serde_json::json!({
                    "event": "variant_resolved",
                    "variant": name,
                    "salt": salt,
                })
            }

            RunEvent::AddressPredicted {
                address,
                payload_hash,
            } => {
                serde_json::json!({
                    "event": "address_predicted",
                    "address": address.to_checksum(),
                    "payload_hash": payload_hash.to_string(),
                })
            }

            RunEvent::ExistingVerified { address, owner } => {
                serde_json::json!({
                    "event": "existing_verified",
                    "address": address.to_checksum(),
                    "owner": owner.to_checksum(),
                })
            }

            RunEvent::Deployed { address } => {
                serde_json::json!({
                    "event": "deployed",
                    "address": address.to_checksum(),
                })
            }

            RunEvent::RecordChanged { key, value } => {
                serde_json::json!({
                    "event": "record_changed",
                    "key": key,
                    "kind": value.kind(),
                    "value": value.to_string(),
                })
            }

            RunEvent::SnapshotSaved {
                path,
                sequence,
                entries,
            } => {
                serde_json::json!({
                    "event": "snapshot_saved",
                    "path": path.display().to_string(),
                    "sequence": sequence,
                    "entries": entries,
                })
            }
        };

        self.write_event(json);
    }
}
