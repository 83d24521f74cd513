//! Configuration loading, environment overrides and payload files

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::application::record_store::PersistMode;
use crate::domain::entities::VariantConfig;
use crate::domain::services::{closest, VariantError, VariantResolver};
use crate::domain::value_objects::{decode_hex, Payload, Salt};

use super::env::{EnvSource, RECORD_MODE_VAR, RECORD_PATH_VAR, VARIANT_VAR};
use super::env_validator::EnvVarValidator;
use super::types::Config;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("invalid payload file {path}: {message}")]
    Payload { path: PathBuf, message: String },

    #[error("no variants configured; add a [variants.<name>] table")]
    NoVariants,

    #[error(transparent)]
    Variant(#[from] VariantError),
}

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> Result<(Config, Vec<ConfigWarning>), ConfigError> {
    let content = read(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let mut config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    config.base_dir = base_dir(path);

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

fn base_dir(config_path: &Path) -> PathBuf {
    match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Apply environment variable overrides (SALTED_* prefix)
pub fn with_env_overrides(config: Config, env: &EnvSource) -> Config {
    with_env_overrides_to(config, env, &mut std::io::stderr())
}

/// Same as [`with_env_overrides`], warnings go to `writer`
pub fn with_env_overrides_to<W: Write>(mut config: Config, env: &EnvSource, writer: &mut W) -> Config {
    if let Some(variant) = env.get(VARIANT_VAR) {
        let variant = variant.trim();
        if !variant.is_empty() {
            config.selected_variant = Some(variant.to_string());
        }
    }

    if let Some(mode) = env.get(RECORD_MODE_VAR) {
        config.record.mode = EnvVarValidator::new(RECORD_MODE_VAR, PersistMode::VALID_VALUES)
            .parse_with_writer(&mode, |s| s.parse().ok(), config.record.mode, writer);
    }

    if let Some(path) = env.get(RECORD_PATH_VAR) {
        if !path.trim().is_empty() {
            config.record.path = PathBuf::from(path.trim());
        }
    }

    config
}

/// Load every variant's payload and build the resolver
pub fn build_resolver(config: &Config) -> Result<VariantResolver, ConfigError> {
    if config.variants.is_empty() {
        return Err(ConfigError::NoVariants);
    }

    let mut variants = Vec::with_capacity(config.variants.len());
    for (name, entry) in &config.variants {
        let runtime = entry.runtime.as_ref().map(|p| config.resolve_path(p));
        let payload = load_payload(&config.resolve_path(&entry.payload), runtime.as_deref())?;
        debug!(
            variant = %name,
            creation_len = payload.creation().len(),
            explicit_runtime = payload.has_explicit_runtime(),
            "loaded payload"
        );
        variants.push((
            name.clone(),
            VariantConfig::new(payload, Salt::from_label(entry.salt.as_str()), entry.owner),
        ));
    }

    Ok(VariantResolver::new(config.deploy.variant.clone(), variants)?)
}

/// Forge/hardhat artifact, reduced to the two code fields
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Artifact {
    #[serde(default)]
    bytecode: Option<ArtifactCode>,
    #[serde(default)]
    deployed_bytecode: Option<ArtifactCode>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ArtifactCode {
    Object { object: String },
    Hex(String),
}

impl ArtifactCode {
    fn hex(&self) -> &str {
        match self {
            ArtifactCode::Object { object } => object,
            ArtifactCode::Hex(hex) => hex,
        }
    }
}

/// Code carried by one file: creation code and, for artifacts, runtime code
struct CodeFile {
    creation: Option<Vec<u8>>,
    runtime: Option<Vec<u8>>,
}

fn parse_code(content: &str) -> Result<CodeFile, String> {
    if content.trim_start().starts_with('{') {
        let artifact: Artifact =
            serde_json::from_str(content).map_err(|e| format!("not a contract artifact: {}", e))?;
        let decode = |code: Option<ArtifactCode>| -> Result<Option<Vec<u8>>, String> {
            code.map(|c| decode_hex(c.hex()).map_err(|e| e.to_string()))
                .transpose()
        };
        return Ok(CodeFile {
            creation: decode(artifact.bytecode)?,
            runtime: decode(artifact.deployed_bytecode)?,
        });
    }

    let bytes = decode_hex(content).map_err(|e| e.to_string())?;
    Ok(CodeFile {
        creation: Some(bytes.clone()),
        runtime: Some(bytes),
    })
}

/// Load a payload from a creation code file and an optional runtime file.
///
/// Artifact JSON supplies both; a hex file only supplies creation code, and
/// the runtime then comes from `runtime_path` when given.
pub fn load_payload(path: &Path, runtime_path: Option<&Path>) -> Result<Payload, ConfigError> {
    let payload_error = |path: &Path, message: String| ConfigError::Payload {
        path: path.to_path_buf(),
        message,
    };

    let is_artifact = |content: &str| content.trim_start().starts_with('{');

    let content = read(path)?;
    let code = parse_code(&content).map_err(|m| payload_error(path, m))?;
    let creation = code
        .creation
        .filter(|c| !c.is_empty())
        .ok_or_else(|| payload_error(path, "no creation code".to_string()))?;
    let mut runtime = if is_artifact(&content) {
        code.runtime.filter(|r| !r.is_empty())
    } else {
        None
    };

    if let Some(runtime_path) = runtime_path {
        let content = read(runtime_path)?;
        let code = parse_code(&content).map_err(|m| payload_error(runtime_path, m))?;
        runtime = Some(
            code.runtime
                .filter(|r| !r.is_empty())
                .ok_or_else(|| payload_error(runtime_path, "no runtime code".to_string()))?,
        );
    }

    let payload = Payload::new(creation);
    Ok(match runtime {
        Some(runtime) => payload.with_runtime(runtime),
        None => payload,
    })
}

fn read(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "deploy",
        "factory",
        "variant",
        "record",
        "path",
        "mode",
        "environment",
        "state",
        "deployer",
        "variants",
        "payload",
        "runtime",
        "salt",
        "owner",
    ];

    closest(unknown, CANDIDATES.iter().copied()).map(str::to_string)
}
