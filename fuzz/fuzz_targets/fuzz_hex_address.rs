#![no_main]

use libfuzzer_sys::fuzz_target;
use salted::domain::value_objects::{decode_hex, Address};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        let _ = decode_hex(content);
        if let Ok(address) = content.parse::<Address>() {
            assert_eq!(address.to_checksum().to_lowercase(), address.to_string());
        }
    }
});
