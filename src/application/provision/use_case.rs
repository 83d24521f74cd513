//! Provisioning Engine
//!
//! Idempotent deploy-or-verify:
//! 1. Derive the target address from (factory, salt, creation hash)
//! 2. If code is already there, verify footprint, then owner, and reuse it
//! 3. Otherwise deploy through the factory and confirm the result landed
//!    exactly where predicted with non-empty code
//!
//! A run assumes exclusive access to the environment for its duration.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::ports::{
    EnvironmentError, NoopEventSink, RunEvent, RunEventSink, TargetEnvironment,
};
use crate::domain::services::predict_address;
use crate::domain::value_objects::{Address, Payload, Salt};

use super::result::{ProvisionError, Provisioned};

/// Provisioning engine, parameterized by the environment it talks to
pub struct ProvisioningEngine<E>
where
    E: TargetEnvironment,
{
    environment: E,
    events: Arc<dyn RunEventSink>,
}

impl<E> ProvisioningEngine<E>
where
    E: TargetEnvironment,
{
    pub fn new(environment: E) -> Self {
        Self {
            environment,
            events: Arc::new(NoopEventSink),
        }
    }

    pub fn with_events(mut self, events: Arc<dyn RunEventSink>) -> Self {
        self.events = events;
        self
    }

    pub fn environment(&self) -> &E {
        &self.environment
    }

    pub fn into_environment(self) -> E {
        self.environment
    }

    /// Make sure `payload` lives at its deterministic address.
    pub fn ensure_deployed(
        &self,
        factory: &Address,
        payload: &Payload,
        salt: &Salt,
        expected_owner: Address,
    ) -> Result<Provisioned, ProvisionError> {
        let payload_hash = payload.creation_hash();
        let predicted = predict_address(factory, salt, &payload_hash);
        debug!(
            factory = %factory,
            salt = %salt,
            payload_hash = %payload_hash,
            predicted = %predicted,
            "predicted deployment address"
        );
        self.events.on_event(RunEvent::AddressPredicted {
            address: predicted,
            payload_hash,
        });

        let occupied = self
            .environment
            .has_content(&predicted)
            .map_err(ProvisionError::Environment)?;

        if occupied {
            self.verify_existing(predicted, payload, expected_owner)?;
            info!(address = %predicted, "reusing verified deployment");
            return Ok(Provisioned::existing(predicted));
        }

        self.deploy_fresh(factory, payload, salt, predicted)?;
        info!(address = %predicted, "deployed");
        Ok(Provisioned::deployed(predicted))
    }

    /// Footprint first, then owner: a corrupted instance is reported as
    /// such even when its owner is also wrong.
    fn verify_existing(
        &self,
        address: Address,
        payload: &Payload,
        expected_owner: Address,
    ) -> Result<(), ProvisionError> {
        let expected = payload.footprint_hash();
        let actual = self
            .environment
            .footprint_hash(&address)
            .map_err(ProvisionError::Environment)?;
        if actual != expected {
            warn!(address = %address, expected = %expected, actual = %actual, "footprint mismatch");
            return Err(ProvisionError::CodeMismatch {
                address,
                expected,
                actual,
            });
        }

        let owner = self
            .environment
            .owner_of(&address)
            .map_err(|source| ProvisionError::OwnerCheckFailed { address, source })?;
        if owner != expected_owner {
            warn!(address = %address, expected = %expected_owner, actual = %owner, "owner mismatch");
            return Err(ProvisionError::OwnerMismatch {
                address,
                expected: expected_owner,
                actual: owner,
            });
        }

        self.events
            .on_event(RunEvent::ExistingVerified { address, owner });
        Ok(())
    }

    fn deploy_fresh(
        &self,
        factory: &Address,
        payload: &Payload,
        salt: &Salt,
        predicted: Address,
    ) -> Result<(), ProvisionError> {
        let deployed = self
            .environment
            .deploy_via_factory(factory, payload, salt)
            .map_err(|e| match e {
                EnvironmentError::StateWrite(_) => ProvisionError::StateNotSaved {
                    address: predicted,
                    source: e,
                },
                other => ProvisionError::DeployFailed(other),
            })?;

        let rederived = predict_address(factory, salt, &payload.creation_hash());
        for actual in [rederived, deployed] {
            if actual != predicted {
                return Err(ProvisionError::AddressDrift {
                    expected: predicted,
                    actual,
                });
            }
        }

        let landed = self
            .environment
            .has_content(&predicted)
            .map_err(ProvisionError::Environment)?;
        if !landed {
            return Err(ProvisionError::EmptyFootprint { address: predicted });
        }

        self.events
            .on_event(RunEvent::Deployed { address: predicted });
        Ok(())
    }
}
