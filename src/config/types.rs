//! Configuration type definitions

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::application::record_store::PersistMode;
use crate::domain::services::{VariantResolver, DEFAULT_FACTORY};
use crate::domain::value_objects::Address;

use super::env::EnvSource;
use super::loader::{self, ConfigError, ConfigWarning};

/// Name of the project configuration file
pub const CONFIG_FILE_NAME: &str = "salted.toml";

/// Deploy configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeployConfig {
    /// Deterministic deployment factory
    #[serde(default = "default_factory")]
    pub factory: Address,

    /// Variant used when no name is supplied
    #[serde(default = "default_variant")]
    pub variant: String,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            factory: default_factory(),
            variant: default_variant(),
        }
    }
}

fn default_factory() -> Address {
    DEFAULT_FACTORY
}

fn default_variant() -> String {
    "default".to_string()
}

/// Record persistence configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordConfig {
    #[serde(default = "default_record_path")]
    pub path: PathBuf,

    #[serde(default)]
    pub mode: PersistMode,
}

impl Default for RecordConfig {
    fn default() -> Self {
        Self {
            path: default_record_path(),
            mode: PersistMode::default(),
        }
    }
}

fn default_record_path() -> PathBuf {
    PathBuf::from("deployments/deploy.json")
}

/// Local target environment configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    /// JSON state file standing in for the network
    #[serde(default = "default_state_path")]
    pub state: PathBuf,

    /// Identity that ends up owning fresh deployments
    #[serde(default = "default_deployer")]
    pub deployer: Address,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            state: default_state_path(),
            deployer: default_deployer(),
        }
    }
}

fn default_state_path() -> PathBuf {
    PathBuf::from(".salted/state.json")
}

fn default_deployer() -> Address {
    Address::ZERO
}

/// One `[variants.<name>]` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariantEntry {
    /// Creation code file (hex or forge artifact JSON)
    pub payload: PathBuf,

    /// Runtime code file, when the payload file does not carry it
    #[serde(default)]
    pub runtime: Option<PathBuf>,

    /// Salt label, or a literal 32-byte hex word
    pub salt: String,

    /// Identity that must own the deployment
    pub owner: Address,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub deploy: DeployConfig,

    #[serde(default)]
    pub record: RecordConfig,

    #[serde(default)]
    pub environment: EnvironmentConfig,

    #[serde(default)]
    pub variants: BTreeMap<String, VariantEntry>,

    /// Variant requested for this run (`SALTED_VARIANT`), read once
    #[serde(skip)]
    pub selected_variant: Option<String>,

    /// Directory relative paths are resolved against
    #[serde(skip)]
    pub base_dir: PathBuf,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> Result<(Self, Vec<ConfigWarning>), ConfigError> {
        loader::load_with_warnings(path)
    }

    /// Apply environment variable overrides (SALTED_* prefix)
    pub fn with_env_overrides(self, env: &EnvSource) -> Self {
        loader::with_env_overrides(self, env)
    }

    /// Resolve a path from the config file against its directory
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }

    pub fn record_path(&self) -> PathBuf {
        self.resolve_path(&self.record.path)
    }

    pub fn state_path(&self) -> PathBuf {
        self.resolve_path(&self.environment.state)
    }

    /// Load every variant's payload and build the resolver
    pub fn build_resolver(&self) -> Result<VariantResolver, ConfigError> {
        loader::build_resolver(self)
    }
}
