//! JSON Deployment Record Codec
//!
//! Entries are grouped into one section per value kind:
//!
//! ```json
//! {
//!   "version": 1,
//!   "addresses": { "Harbor": "0x…" },
//!   "numbers": { "Harbor.fee": "3000" },
//!   "strings": { "Harbor.status": "deployed" }
//! }
//! ```
//!
//! Numbers are decimal strings so values beyond 2^53 survive JSON readers.
//! A key may appear once across all sections.

use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::domain::entities::{DeploymentRecord, RecordValue};
use crate::domain::value_objects::Address;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("malformed record JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("record format version {found} is not supported (expected {expected})")]
    VersionMismatch { found: u32, expected: u32 },

    #[error("key '{key}' appears more than once")]
    DuplicateKey { key: String },

    #[error("number '{value}' for key '{key}' is not a non-negative integer")]
    BadNumber { key: String, value: String },
}

#[derive(Debug, Serialize)]
struct JsonRecord {
    version: u32,
    addresses: BTreeMap<String, Address>,
    numbers: BTreeMap<String, String>,
    strings: BTreeMap<String, String>,
}

/// Read side of `JsonRecord`. Sections keep every entry in file order so
/// repeated keys are caught instead of collapsing last-wins.
#[derive(Debug, Deserialize)]
struct JsonRecordIn {
    version: u32,
    #[serde(default)]
    addresses: Section<Address>,
    #[serde(default)]
    numbers: Section<String>,
    #[serde(default)]
    strings: Section<String>,
}

#[derive(Debug)]
struct Section<V>(Vec<(String, V)>);

impl<V> Default for Section<V> {
    fn default() -> Self {
        Section(Vec::new())
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for Section<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SectionVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for SectionVisitor<V> {
            type Value = Section<V>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of record entries")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::new();
                while let Some(entry) = map.next_entry::<String, V>()? {
                    entries.push(entry);
                }
                Ok(Section(entries))
            }
        }

        deserializer.deserialize_map(SectionVisitor(PhantomData))
    }
}

/// Serialize a record to its persisted form (pretty JSON, trailing newline)
pub fn encode_record(record: &DeploymentRecord) -> Result<String, CodecError> {
    let mut json = JsonRecord {
        version: record.version(),
        addresses: BTreeMap::new(),
        numbers: BTreeMap::new(),
        strings: BTreeMap::new(),
    };

    for (key, value) in record.entries() {
        match value {
            RecordValue::Address(addr) => {
                json.addresses.insert(key.to_string(), *addr);
            }
            RecordValue::Number(n) => {
                json.numbers.insert(key.to_string(), n.to_string());
            }
            RecordValue::Text(s) => {
                json.strings.insert(key.to_string(), s.clone());
            }
        }
    }

    let mut out = serde_json::to_string_pretty(&json)?;
    out.push('\n');
    Ok(out)
}

/// Parse a persisted record back into the exact entries it was written from
pub fn decode_record(content: &str) -> Result<DeploymentRecord, CodecError> {
    let json: JsonRecordIn = serde_json::from_str(content)?;

    if json.version != DeploymentRecord::VERSION {
        return Err(CodecError::VersionMismatch {
            found: json.version,
            expected: DeploymentRecord::VERSION,
        });
    }

    let mut record = DeploymentRecord::new();
    let mut insert = |key: String, value: RecordValue| -> Result<(), CodecError> {
        if record.contains(&key) {
            return Err(CodecError::DuplicateKey { key });
        }
        record.set(key, value);
        Ok(())
    };

    for (key, addr) in json.addresses.0 {
        insert(key, RecordValue::Address(addr))?;
    }
    for (key, text) in json.numbers.0 {
        let n = text.parse::<u128>().map_err(|_| CodecError::BadNumber {
            key: key.clone(),
            value: text.clone(),
        })?;
        insert(key, RecordValue::Number(n))?;
    }
    for (key, text) in json.strings.0 {
        insert(key, RecordValue::Text(text))?;
    }

    Ok(record)
}
