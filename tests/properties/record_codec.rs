//! Property tests for the deployment record file format.

use proptest::prelude::*;

use salted::domain::entities::{DeploymentRecord, RecordValue};
use salted::domain::value_objects::Address;
use salted::infrastructure::repositories::{decode_record, encode_record};

fn record_value() -> impl Strategy<Value = RecordValue> {
    prop_oneof![
        any::<[u8; 20]>().prop_map(|bytes| RecordValue::Address(Address::new(bytes))),
        any::<u128>().prop_map(RecordValue::Number),
        ".{0,24}".prop_map(RecordValue::Text),
    ]
}

fn record() -> impl Strategy<Value = DeploymentRecord> {
    let key = proptest::string::string_regex("[A-Za-z][A-Za-z0-9_.]{0,15}").unwrap();
    proptest::collection::btree_map(key, record_value(), 0..12).prop_map(|entries| {
        let mut record = DeploymentRecord::new();
        for (key, value) in entries {
            record.set(key, value);
        }
        record
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a snapshot reads back as exactly the entries it was written from.
    #[test]
    fn property_snapshot_reproduces_entries(record in record()) {
        let content = encode_record(&record).unwrap();
        prop_assert_eq!(decode_record(&content).unwrap(), record);
    }

    /// PROPERTY: encoding is deterministic (stable key order).
    #[test]
    fn property_encoding_is_deterministic(record in record()) {
        prop_assert_eq!(encode_record(&record).unwrap(), encode_record(&record.clone()).unwrap());
    }

    /// PROPERTY: decoding arbitrary text never panics.
    #[test]
    fn property_decode_never_panics(input in ".{0,256}") {
        let _ = decode_record(&input);
    }
}
