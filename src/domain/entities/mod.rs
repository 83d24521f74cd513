//! Domain Entities

mod deployment_record;
mod variant;

pub use deployment_record::{DeploymentRecord, RecordValue};
pub use variant::VariantConfig;
