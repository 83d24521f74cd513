//! Variant entity - a named, pre-baked deployment configuration

use crate::domain::value_objects::{Address, Payload, Salt};

/// What to deploy, under which salt, and who must own it afterwards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantConfig {
    payload: Payload,
    salt: Salt,
    expected_owner: Address,
}

impl VariantConfig {
    pub fn new(payload: Payload, salt: Salt, expected_owner: Address) -> Self {
        Self {
            payload,
            salt,
            expected_owner,
        }
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    pub fn salt(&self) -> &Salt {
        &self.salt
    }

    pub fn expected_owner(&self) -> Address {
        self.expected_owner
    }
}
