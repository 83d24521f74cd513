//! Deployment Run
//!
//! Wires variant resolution, provisioning and the record store into one
//! sequential run. Any failure aborts the run; everything already provisioned
//! stays in place and a re-run picks it up as existing.

use std::sync::Arc;

use tracing::info;

use super::provision::{Provisioned, ProvisioningEngine};
use super::record_store::DeploymentRecordStore;
use crate::domain::ports::{NoopEventSink, RecordWriter, RunEvent, RunEventSink, TargetEnvironment};
use crate::domain::services::VariantResolver;
use crate::domain::value_objects::Address;
use crate::error::SaltedResult;

pub struct DeploymentRun<'r, E, W>
where
    E: TargetEnvironment,
    W: RecordWriter,
{
    resolver: &'r VariantResolver,
    engine: ProvisioningEngine<E>,
    store: DeploymentRecordStore<W>,
    factory: Address,
    events: Arc<dyn RunEventSink>,
}

impl<'r, E, W> DeploymentRun<'r, E, W>
where
    E: TargetEnvironment,
    W: RecordWriter,
{
    pub fn new(
        resolver: &'r VariantResolver,
        engine: ProvisioningEngine<E>,
        store: DeploymentRecordStore<W>,
        factory: Address,
    ) -> Self {
        Self {
            resolver,
            engine,
            store,
            factory,
            events: Arc::new(NoopEventSink),
        }
    }

    pub fn with_events(mut self, events: Arc<dyn RunEventSink>) -> Self {
        self.events = events;
        self
    }

    pub fn factory(&self) -> Address {
        self.factory
    }

    pub fn engine(&self) -> &ProvisioningEngine<E> {
        &self.engine
    }

    pub fn store(&self) -> &DeploymentRecordStore<W> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut DeploymentRecordStore<W> {
        &mut self.store
    }

    /// Resolve `variant` (or the default), make sure it is deployed, and
    /// record `key` = address and `key.status` = deployed | existing.
    pub fn provision(&mut self, variant: Option<&str>, key: &str) -> SaltedResult<Provisioned> {
        let (name, config) = self.resolver.resolve_or_default(variant)?;
        info!(variant = name, salt = %config.salt(), "resolved variant");
        self.events.on_event(RunEvent::VariantResolved {
            name: name.to_string(),
            salt: config.salt().label().to_string(),
        });

        let outcome = self.engine.ensure_deployed(
            &self.factory,
            config.payload(),
            config.salt(),
            config.expected_owner(),
        )?;

        self.store.record(key, outcome.address)?;
        self.store
            .record(format!("{}.status", key), outcome.status())?;

        info!(key, address = %outcome.address, status = outcome.status(), "provisioned");
        Ok(outcome)
    }
}
