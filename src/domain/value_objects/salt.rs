//! Deployment salt
//!
//! Salts are configured as human-readable labels. A label that already is a
//! 32-byte hex word is used as-is; anything else is hashed into one.

use std::fmt;

use super::hash::keccak256;

/// A 32-byte salt word together with the label it came from
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Salt {
    label: String,
    word: [u8; 32],
}

impl Salt {
    pub fn from_label(label: impl Into<String>) -> Self {
        let label = label.into();
        let word = match raw_word(&label) {
            Some(word) => word,
            None => keccak256(label.as_bytes()),
        };
        Self { label, word }
    }

    pub fn from_word(word: [u8; 32]) -> Self {
        Self {
            label: format!("0x{}", hex::encode(word)),
            word,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn word(&self) -> &[u8; 32] {
        &self.word
    }
}

fn raw_word(label: &str) -> Option<[u8; 32]> {
    let digits = label.strip_prefix("0x")?;
    if digits.len() != 64 {
        return None;
    }
    super::decode_fixed::<32>(digits).ok()
}

impl fmt::Display for Salt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

impl fmt::Debug for Salt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Salt({:?} => 0x{})", self.label, hex::encode(self.word))
    }
}
