//! Common test utilities for salted CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project directory plus helpers to run the binary
//! - Assertion macros: `assert_output_contains!`, `assert_file_exists!`, etc.
//! - Fixtures: Reusable config and payload constants

pub mod assertions;
pub mod env;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
pub use env::*;
pub use fixtures::*;
