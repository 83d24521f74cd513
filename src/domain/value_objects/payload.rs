//! Deployable payload
//!
//! The creation bytes decide the address; the runtime bytes decide what the
//! live footprint must hash to once deployed.

use super::hash::ContentHash;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    creation: Vec<u8>,
    runtime: Option<Vec<u8>>,
}

impl Payload {
    /// Payload whose creation bytes are also its footprint
    pub fn new(creation: impl Into<Vec<u8>>) -> Self {
        Self {
            creation: creation.into(),
            runtime: None,
        }
    }

    pub fn with_runtime(mut self, runtime: impl Into<Vec<u8>>) -> Self {
        self.runtime = Some(runtime.into());
        self
    }

    pub fn creation(&self) -> &[u8] {
        &self.creation
    }

    /// Bytes expected at the deployed address
    pub fn runtime(&self) -> &[u8] {
        self.runtime.as_deref().unwrap_or(&self.creation)
    }

    pub fn has_explicit_runtime(&self) -> bool {
        self.runtime.is_some()
    }

    /// Hash fed into address derivation
    pub fn creation_hash(&self) -> ContentHash {
        ContentHash::of(&self.creation)
    }

    /// Hash the live code must report
    pub fn footprint_hash(&self) -> ContentHash {
        ContentHash::of(self.runtime())
    }
}
