//! salted - deterministic, idempotent contract provisioning
//!
//! Predicts where a payload will land (CREATE2), deploys it there once,
//! verifies and reuses it on every later run, and keeps a deployment record
//! that is either overwritten in place or appended as numbered snapshots.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{
    DeploymentRecordStore, DeploymentRun, PersistMode, ProvisionError, Provisioned,
    ProvisioningEngine,
};
pub use config::Config;
pub use domain::entities::{DeploymentRecord, RecordValue, VariantConfig};
pub use domain::services::{append_sequence, predict_address, VariantResolver, DEFAULT_FACTORY};
pub use domain::value_objects::{Address, ContentHash, Payload, Salt};
pub use error::{SaltedError, SaltedResult};
