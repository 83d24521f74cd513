//! Provision Result
//!
//! Outcome and failure types for `ensure_deployed`.

use std::fmt;

use thiserror::Error;

use crate::domain::ports::EnvironmentError;
use crate::domain::value_objects::{Address, ContentHash};

/// Outcome of an idempotent provisioning call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Provisioned {
    pub address: Address,
    /// `true` when a verified instance was already present
    pub already_existed: bool,
}

impl Provisioned {
    pub fn existing(address: Address) -> Self {
        Self {
            address,
            already_existed: true,
        }
    }

    pub fn deployed(address: Address) -> Self {
        Self {
            address,
            already_existed: false,
        }
    }

    /// Label written to deployment records
    pub fn status(&self) -> &'static str {
        if self.already_existed {
            "existing"
        } else {
            "deployed"
        }
    }
}

impl fmt::Display for Provisioned {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.address.to_checksum(), self.status())
    }
}

/// Every way provisioning can fail. None of these are retried or
/// downgraded; each aborts the run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProvisionError {
    /// Live code at the predicted address is not what this payload deploys
    #[error("code mismatch at {address}: expected footprint {expected}, found {actual}")]
    CodeMismatch {
        address: Address,
        expected: ContentHash,
        actual: ContentHash,
    },

    /// The owner check itself failed (call error or missing interface)
    #[error("owner check failed at {address}: {source}")]
    OwnerCheckFailed {
        address: Address,
        #[source]
        source: EnvironmentError,
    },

    #[error("owner mismatch at {address}: expected {expected}, found {actual}")]
    OwnerMismatch {
        address: Address,
        expected: Address,
        actual: Address,
    },

    /// The factory call failed; the revert payload is preserved verbatim
    #[error("deployment through factory failed: {0}")]
    DeployFailed(#[source] EnvironmentError),

    /// The deployed address differs from the prediction
    #[error("address drift: predicted {expected}, got {actual}")]
    AddressDrift { expected: Address, actual: Address },

    /// Deployment reported success but nothing is at the address
    #[error("deployment to {address} left no code behind")]
    EmptyFootprint { address: Address },

    /// Occupancy or footprint query failed
    #[error("environment query failed: {0}")]
    Environment(#[source] EnvironmentError),

    /// The factory call succeeded but the environment could not record it
    #[error("deployed to {address}, but the environment state was not saved: {source}")]
    StateNotSaved {
        address: Address,
        #[source]
        source: EnvironmentError,
    },
}

impl ProvisionError {
    /// Raw revert payload of a failed factory call, if that is what happened
    pub fn revert_data(&self) -> Option<&[u8]> {
        match self {
            ProvisionError::DeployFailed(EnvironmentError::Reverted { data }) => Some(data),
            _ => None,
        }
    }
}
