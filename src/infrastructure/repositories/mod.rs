//! Repository Implementations
//!
//! Concrete persistence formats for domain entities.

mod json_record;

pub use json_record::{decode_record, encode_record, CodecError};
