#![no_main]

use libfuzzer_sys::fuzz_target;
use salted::domain::services::append_sequence;

fuzz_target!(|input: (&str, u32)| {
    let (path, n) = input;
    if let Ok(named) = append_sequence(path, n) {
        assert_eq!(named.len(), path.len() + 4);
    }
});
