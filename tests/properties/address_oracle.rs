//! Property tests for deterministic address derivation.

use proptest::prelude::*;

use salted::domain::services::{predict_address, predict_address_raw};
use salted::domain::value_objects::{Address, ContentHash, Salt};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: prediction is a pure function of its inputs.
    #[test]
    fn property_prediction_is_deterministic(
        factory in any::<[u8; 20]>(),
        salt in any::<[u8; 32]>(),
        code in proptest::collection::vec(any::<u8>(), 0..128),
    ) {
        let factory = Address::new(factory);
        let hash = ContentHash::of(&code);
        prop_assert_eq!(
            predict_address_raw(&factory, &salt, &hash),
            predict_address_raw(&factory, &salt, &hash)
        );
    }

    /// PROPERTY: changing the salt label moves the address.
    #[test]
    fn property_distinct_labels_give_distinct_addresses(
        a in "[a-z.]{1,16}",
        b in "[a-z.]{1,16}",
    ) {
        prop_assume!(a != b);
        let factory = Address::new([0x4e; 20]);
        let hash = ContentHash::of(&[0x60, 0x80]);
        prop_assert_ne!(
            predict_address(&factory, &Salt::from_label(a.as_str()), &hash),
            predict_address(&factory, &Salt::from_label(b.as_str()), &hash)
        );
    }

    /// PROPERTY: a literal 32-byte hex label is used as the salt word itself.
    #[test]
    fn property_hex_label_is_the_word(word in any::<[u8; 32]>()) {
        let label = format!("0x{}", hex_string(&word));
        let salt = Salt::from_label(label);
        prop_assert_eq!(salt.word(), &word);
    }
}

fn hex_string(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
