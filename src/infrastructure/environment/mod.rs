//! Target environment implementations

mod memory;
mod state_file;

pub use memory::{Account, InMemoryEnvironment};
pub use state_file::{StateFileEnvironment, StateFileError};
