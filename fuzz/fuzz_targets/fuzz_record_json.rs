#![no_main]

use libfuzzer_sys::fuzz_target;
use salted::infrastructure::repositories::{decode_record, encode_record};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Anything that decodes must encode and decode to the same entries
        if let Ok(record) = decode_record(content) {
            let encoded = encode_record(&record).expect("decoded record must encode");
            assert_eq!(decode_record(&encoded).ok(), Some(record));
        }
    }
});
