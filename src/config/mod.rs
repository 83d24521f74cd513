//! Configuration module for salted
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (SALTED_*), then a `.env` file next to the config
//! 3. Project config (salted.toml)
//! 4. Built-in defaults (lowest priority)

mod env;
mod env_validator;
mod loader;
mod types;

pub use env::{parse_dotenv, EnvSource, RECORD_MODE_VAR, RECORD_PATH_VAR, VARIANT_VAR};
pub use loader::{load_payload, with_env_overrides_to, ConfigError, ConfigWarning};
pub use types::{
    Config, DeployConfig, EnvironmentConfig, RecordConfig, VariantEntry, CONFIG_FILE_NAME,
};
