//! Address Oracle
//!
//! Reproduces the network's deterministic address rule (EIP-1014):
//!
//! ```text
//! address = keccak256(0xff ++ factory ++ salt ++ keccak256(init_code))[12..]
//! ```
//!
//! Pure and total. Input widths are enforced by the value object types.

use crate::domain::value_objects::{keccak256, Address, ContentHash, Salt};

/// Tag byte that separates CREATE2 preimages from CREATE (RLP) preimages
const CREATE2_TAG: u8 = 0xff;

/// The deterministic deployment proxy present on most EVM networks
/// (`0x4e59b44847b379578588920ca78fbf26c0b4956c`)
pub const DEFAULT_FACTORY: Address = Address::new([
    0x4e, 0x59, 0xb4, 0x48, 0x47, 0xb3, 0x79, 0x57, 0x85, 0x88, 0x92, 0x0c, 0xa7, 0x8f, 0xbf, 0x26,
    0xc0, 0xb4, 0x95, 0x6c,
]);

/// Predict the address `factory` will deploy `payload_hash` to under `salt`.
pub fn predict_address(factory: &Address, salt: &Salt, payload_hash: &ContentHash) -> Address {
    predict_address_raw(factory, salt.word(), payload_hash)
}

/// Same as [`predict_address`] for a raw salt word.
pub fn predict_address_raw(
    factory: &Address,
    salt: &[u8; 32],
    payload_hash: &ContentHash,
) -> Address {
    let mut preimage = [0u8; 1 + Address::LEN + 32 + ContentHash::LEN];
    preimage[0] = CREATE2_TAG;
    preimage[1..21].copy_from_slice(factory.as_bytes());
    preimage[21..53].copy_from_slice(salt);
    preimage[53..85].copy_from_slice(payload_hash.as_bytes());

    let digest = keccak256(&preimage);
    Address::from_slice(&digest[12..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_factory_is_the_deployment_proxy() {
        assert_eq!(
            DEFAULT_FACTORY.to_string(),
            "0x4e59b44847b379578588920ca78fbf26c0b4956c"
        );
    }

    fn word(hex_text: &str) -> [u8; 32] {
        let mut out = [0u8; 32];
        let bytes = hex::decode(hex_text).unwrap();
        out[32 - bytes.len()..].copy_from_slice(&bytes);
        out
    }

    fn check(factory: &str, salt: [u8; 32], init_code: &[u8], expected: &str) {
        let factory: Address = factory.parse().unwrap();
        let predicted = predict_address_raw(&factory, &salt, &ContentHash::of(init_code));
        assert_eq!(predicted.to_string(), expected.to_lowercase());
    }

    // Published EIP-1014 examples.

    #[test]
    fn eip1014_example_0() {
        check(
            "0x0000000000000000000000000000000000000000",
            [0u8; 32],
            &[0x00],
            "0x4D1A2e2bB4F88F0250f26Ffff098B0b30B26BF38",
        );
    }

    #[test]
    fn eip1014_example_1() {
        check(
            "0xdeadbeef00000000000000000000000000000000",
            [0u8; 32],
            &[0x00],
            "0xB928f69Bb1D91Cd65274e3c79d8986362984fDA3",
        );
    }

    #[test]
    fn eip1014_example_4() {
        check(
            "0x00000000000000000000000000000000deadbeef",
            word("cafebabe"),
            &[0xde, 0xad, 0xbe, 0xef],
            "0x60f3f640a8508fC6a86d45DF051962668E1e8AC7",
        );
    }

    #[test]
    fn eip1014_example_6_empty_init_code() {
        check(
            "0x0000000000000000000000000000000000000000",
            [0u8; 32],
            &[],
            "0xE33C0C7F7df4809055C3ebA6c09CFe4BaF1BD9e0",
        );
    }

    #[test]
    fn prediction_is_deterministic() {
        let factory: Address = "0x4e59b44847b379578588920ca78fbf26c0b4956c".parse().unwrap();
        let salt = Salt::from_label("harbor.v1");
        let hash = ContentHash::of(b"\x60\x80\x60\x40");

        let first = predict_address(&factory, &salt, &hash);
        let second = predict_address(&factory, &salt, &hash);
        assert_eq!(first, second);
    }

    #[test]
    fn salt_changes_address() {
        let factory: Address = "0x4e59b44847b379578588920ca78fbf26c0b4956c".parse().unwrap();
        let hash = ContentHash::of(b"\x60\x80\x60\x40");

        let a = predict_address(&factory, &Salt::from_label("a"), &hash);
        let b = predict_address(&factory, &Salt::from_label("b"), &hash);
        assert_ne!(a, b);
    }
}
