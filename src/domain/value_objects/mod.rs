//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod address;
mod hash;
mod payload;
mod salt;

pub use address::Address;
pub use hash::{keccak256, ContentHash};
pub use payload::Payload;
pub use salt::Salt;

use thiserror::Error;

/// Hex parsing errors shared by the fixed-width value objects
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HexError {
    #[error("invalid hex: {0}")]
    Invalid(#[from] hex::FromHexError),

    #[error("expected {expected} bytes, got {actual}")]
    Length { expected: usize, actual: usize },
}

/// Strip an optional `0x`/`0X` prefix.
pub(crate) fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}

/// Decode hex of arbitrary length, ignoring an optional prefix and any
/// embedded whitespace (payload files are often wrapped).
pub fn decode_hex(s: &str) -> Result<Vec<u8>, HexError> {
    let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    Ok(hex::decode(strip_hex_prefix(&compact))?)
}

pub(crate) fn decode_fixed<const N: usize>(s: &str) -> Result<[u8; N], HexError> {
    let bytes = hex::decode(strip_hex_prefix(s.trim()))?;
    if bytes.len() != N {
        return Err(HexError::Length {
            expected: N,
            actual: bytes.len(),
        });
    }
    let mut out = [0u8; N];
    out.copy_from_slice(&bytes);
    Ok(out)
}
