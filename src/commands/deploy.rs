//! Deploy command handler
//!
//! Resolves the variant, provisions it against the local state file and
//! records the outcome.

use std::path::{Path, PathBuf};

use anyhow::Result;

use salted::application::{DeploymentRecordStore, DeploymentRun, ProvisioningEngine};
use salted::infrastructure::{LocalFs, StateFileEnvironment};

use super::{event_sink, load_project};

pub fn cmd_deploy(
    config_path: &Path,
    key: &str,
    variant: Option<String>,
    record: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let config = load_project(config_path)?;
    let resolver = config.build_resolver()?;
    let variant = variant.or_else(|| config.selected_variant.clone());

    // Unknown variants fail before the environment is touched
    let (name, _) = resolver.resolve_or_default(variant.as_deref())?;
    let name = name.to_string();

    let environment = StateFileEnvironment::open(config.state_path(), config.environment.deployer)?;
    let events = event_sink(json);

    let mut store =
        DeploymentRecordStore::new(LocalFs::new(), config.record.mode).with_events(events.clone());
    store.set_output_path(record.unwrap_or_else(|| config.record_path()));
    store.resume()?;

    let engine = ProvisioningEngine::new(environment).with_events(events.clone());
    let mut run =
        DeploymentRun::new(&resolver, engine, store, config.deploy.factory).with_events(events);

    let outcome = run.provision(Some(name.as_str()), key)?;

    if !json {
        println!("{} [{}] {}", key, name, outcome);
    }
    Ok(())
}
