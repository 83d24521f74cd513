//! Deployment record entity - the facts accumulated by one deployment run
//!
//! A pure data structure; persistence is handled by the record store and
//! the `RecordWriter` port.

use std::collections::BTreeMap;
use std::fmt;

use crate::domain::value_objects::Address;

/// A single recorded fact
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValue {
    Address(Address),
    Number(u128),
    Text(String),
}

impl RecordValue {
    /// Section name used when the record is persisted
    pub fn kind(&self) -> &'static str {
        match self {
            RecordValue::Address(_) => "address",
            RecordValue::Number(_) => "number",
            RecordValue::Text(_) => "string",
        }
    }

    pub fn as_address(&self) -> Option<Address> {
        match self {
            RecordValue::Address(addr) => Some(*addr),
            _ => None,
        }
    }
}

impl fmt::Display for RecordValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordValue::Address(addr) => write!(f, "{}", addr),
            RecordValue::Number(n) => write!(f, "{}", n),
            RecordValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<Address> for RecordValue {
    fn from(addr: Address) -> Self {
        RecordValue::Address(addr)
    }
}

impl From<u128> for RecordValue {
    fn from(n: u128) -> Self {
        RecordValue::Number(n)
    }
}

impl From<u64> for RecordValue {
    fn from(n: u64) -> Self {
        RecordValue::Number(n.into())
    }
}

impl From<&str> for RecordValue {
    fn from(s: &str) -> Self {
        RecordValue::Text(s.to_string())
    }
}

impl From<String> for RecordValue {
    fn from(s: String) -> Self {
        RecordValue::Text(s)
    }
}

/// Keyed deployment facts. Keys are unique; setting a key again replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentRecord {
    /// Format version
    version: u32,
    entries: BTreeMap<String, RecordValue>,
}

impl Default for DeploymentRecord {
    fn default() -> Self {
        Self::new()
    }
}

impl DeploymentRecord {
    pub const VERSION: u32 = 1;

    pub fn new() -> Self {
        Self {
            version: Self::VERSION,
            entries: BTreeMap::new(),
        }
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Upsert `key`, returning the value it replaced
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<RecordValue>) -> Option<RecordValue> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&RecordValue> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|s| s.as_str())
    }

    /// All entries in key order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &RecordValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}
