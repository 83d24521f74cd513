//! Property tests for sequence file naming.

use proptest::prelude::*;

use salted::domain::services::{append_sequence, SequenceError, MAX_SEQUENCE};

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_-]{1,12}").unwrap()
}

fn path_string() -> impl Strategy<Value = String> {
    let dir = proptest::collection::vec(segment(), 0..=3);
    let ext = proptest::option::of(proptest::string::string_regex("[a-z]{1,5}").unwrap());
    (dir, segment(), ext).prop_map(|(dirs, stem, ext)| {
        let mut path = dirs.join("/");
        if !path.is_empty() {
            path.push('/');
        }
        path.push_str(&stem);
        if let Some(ext) = ext {
            path.push('.');
            path.push_str(&ext);
        }
        path
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the suffix is exactly three digits and the original
    /// extension (if any) is preserved.
    #[test]
    fn property_suffix_is_three_digits_before_extension(
        path in path_string(),
        n in 1u32..=MAX_SEQUENCE,
    ) {
        let named = append_sequence(&path, n).unwrap();
        let suffix = format!(".{:03}", n);

        match path.rfind('.') {
            Some(i) => {
                prop_assert_eq!(&named[..i], &path[..i]);
                prop_assert_eq!(&named[i..i + 4], suffix.as_str());
                prop_assert_eq!(&named[i + 4..], &path[i..]);
            }
            None => prop_assert_eq!(named, format!("{}{}", path, suffix)),
        }
    }

    /// PROPERTY: distinct counters never collide for the same base.
    #[test]
    fn property_distinct_counters_give_distinct_names(
        path in path_string(),
        a in 1u32..=MAX_SEQUENCE,
        b in 1u32..=MAX_SEQUENCE,
    ) {
        prop_assume!(a != b);
        prop_assert_ne!(append_sequence(&path, a).unwrap(), append_sequence(&path, b).unwrap());
    }

    /// PROPERTY: counters past the three-digit range always fail.
    #[test]
    fn property_overflow_always_fails(
        path in path_string(),
        n in (MAX_SEQUENCE + 1)..=u32::MAX,
    ) {
        prop_assert_eq!(
            append_sequence(&path, n),
            Err(SequenceError::Overflow { counter: n })
        );
    }
}
