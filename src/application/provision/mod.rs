//! Provision Module
//!
//! Deterministic, idempotent provisioning of one payload.
//!
//! ## Structure
//!
//! - `result` - `Provisioned` outcome and `ProvisionError`
//! - `use_case` - `ProvisioningEngine`
//!
//! ## Usage
//!
//! ```ignore
//! use salted::application::provision::ProvisioningEngine;
//!
//! let engine = ProvisioningEngine::new(environment);
//! let outcome = engine.ensure_deployed(&factory, &payload, &salt, owner)?;
//! ```

mod result;
mod use_case;

pub use result::{ProvisionError, Provisioned};
pub use use_case::ProvisioningEngine;
