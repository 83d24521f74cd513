//! Error types for salted
//!
//! Each layer owns a `thiserror` enum; `SaltedError` gathers them for
//! callers that drive a whole run.

use thiserror::Error;

use crate::application::provision::ProvisionError;
use crate::application::record_store::RecordError;
use crate::config::ConfigError;
use crate::domain::services::VariantError;
use crate::domain::value_objects::HexError;
use crate::infrastructure::environment::StateFileError;

/// Result type alias for salted operations
pub type SaltedResult<T> = Result<T, SaltedError>;

/// Main error type for salted operations
#[derive(Error, Debug)]
pub enum SaltedError {
    /// Deploy or verification failure
    #[error(transparent)]
    Provision(#[from] ProvisionError),

    /// Unresolvable variant name
    #[error(transparent)]
    Variant(#[from] VariantError),

    /// Record could not be saved or read
    #[error(transparent)]
    Record(#[from] RecordError),

    /// Invalid project configuration
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Local state file could not be loaded or saved
    #[error(transparent)]
    StateFile(#[from] StateFileError),

    /// Malformed hex input
    #[error("invalid hex input: {0}")]
    Hex(#[from] HexError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SaltedError {
    /// Verification failures are the ones an operator has to look at on
    /// the network; everything else is local.
    pub fn is_verification_failure(&self) -> bool {
        matches!(
            self,
            SaltedError::Provision(
                ProvisionError::CodeMismatch { .. }
                    | ProvisionError::OwnerMismatch { .. }
                    | ProvisionError::OwnerCheckFailed { .. }
                    | ProvisionError::AddressDrift { .. }
                    | ProvisionError::EmptyFootprint { .. }
            )
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::Address;

    #[test]
    fn variant_errors_display_unchanged() {
        let err: SaltedError = VariantError::MissingDefault {
            name: "production".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "default variant 'production' is not among the configured variants"
        );
    }

    #[test]
    fn verification_failures_are_classified() {
        let drift: SaltedError = ProvisionError::AddressDrift {
            expected: Address::ZERO,
            actual: Address::new([1; 20]),
        }
        .into();
        assert!(drift.is_verification_failure());

        let record: SaltedError = RecordError::OutputPathUnset.into();
        assert!(!record.is_verification_failure());
    }
}
