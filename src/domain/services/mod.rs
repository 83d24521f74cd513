//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod address_oracle;
mod sequence_namer;
mod suggest;
mod variant_resolver;

pub use address_oracle::{predict_address, predict_address_raw, DEFAULT_FACTORY};
pub use sequence_namer::{append_sequence, SequenceError, MAX_SEQUENCE};
pub use suggest::{closest, levenshtein};
pub use variant_resolver::{VariantError, VariantResolver};
