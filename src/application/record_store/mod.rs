//! Record Store Module
//!
//! Persists the deployment record after every change, either replacing one
//! file or appending numbered snapshots.
//!
//! ## Structure
//!
//! - `strategy` - `PersistMode` and pure save planning
//! - `store` - `DeploymentRecordStore`, `lookup` and `RecordError`

mod store;
mod strategy;

pub use store::{lookup, DeploymentRecordStore, RecordError};
pub use strategy::{plan_save, PersistMode, SavePlan};
