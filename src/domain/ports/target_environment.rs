//! TargetEnvironment port - the network a run provisions onto
//!
//! The provisioning engine only ever talks to the network through this
//! trait. Production bindings wrap an RPC client; tests use
//! `InMemoryEnvironment`.

use thiserror::Error;

use crate::domain::value_objects::{Address, ContentHash, Payload, Salt};

/// Result type for environment calls
pub type EnvResult<T> = Result<T, EnvironmentError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnvironmentError {
    /// The call reverted; `data` is the raw revert payload, untouched
    #[error("call reverted with data 0x{}", hex::encode(.data))]
    Reverted { data: Vec<u8> },

    /// The environment could not be reached or answered nonsense
    #[error("environment unavailable: {0}")]
    Unavailable(String),

    /// The call took effect but the environment's own state could not be
    /// written back
    #[error("failed to persist environment state: {0}")]
    StateWrite(String),
}

/// Query and deploy capabilities of a target network
///
/// All calls are blocking; a run owns the environment exclusively.
pub trait TargetEnvironment {
    /// Whether any code is present at `address`
    fn has_content(&self, address: &Address) -> EnvResult<bool>;

    /// Hash of the code present at `address`
    fn footprint_hash(&self, address: &Address) -> EnvResult<ContentHash>;

    /// Owner reported by the instance at `address`
    fn owner_of(&self, address: &Address) -> EnvResult<Address>;

    /// Deploy `payload` through `factory` under `salt`
    fn deploy_via_factory(
        &self,
        factory: &Address,
        payload: &Payload,
        salt: &Salt,
    ) -> EnvResult<Address>;
}

impl<T: TargetEnvironment + ?Sized> TargetEnvironment for &T {
    fn has_content(&self, address: &Address) -> EnvResult<bool> {
        (**self).has_content(address)
    }

    fn footprint_hash(&self, address: &Address) -> EnvResult<ContentHash> {
        (**self).footprint_hash(address)
    }

    fn owner_of(&self, address: &Address) -> EnvResult<Address> {
        (**self).owner_of(address)
    }

    fn deploy_via_factory(
        &self,
        factory: &Address,
        payload: &Payload,
        salt: &Salt,
    ) -> EnvResult<Address> {
        (**self).deploy_via_factory(factory, payload, salt)
    }
}
