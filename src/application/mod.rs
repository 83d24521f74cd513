//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `ProvisioningEngine` - Deploy-or-verify one payload at its deterministic address
//! - `DeploymentRecordStore` - Persist the run's record (overwrite or sequenced)
//! - `DeploymentRun` - Resolve a variant, provision it, record the outcome

pub mod provision;
pub mod record_store;
pub mod run;

pub use provision::{ProvisionError, Provisioned, ProvisioningEngine};
pub use record_store::{
    lookup, plan_save, DeploymentRecordStore, PersistMode, RecordError, SavePlan,
};
pub use run::DeploymentRun;
