//! Command handlers for the salted binary

mod deploy;
mod keccak;
mod lookup;
mod predict;
mod variants;

pub use deploy::cmd_deploy;
pub use keccak::cmd_keccak;
pub use lookup::cmd_lookup;
pub use predict::cmd_predict;
pub use variants::cmd_variants;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use salted::config::{Config, EnvSource};
use salted::domain::ports::RunEventSink;
use salted::infrastructure::{JsonEventSink, TracingEventSink};

/// Load the project config, report unknown keys, apply SALTED_* overrides
pub(crate) fn load_project(config_path: &Path) -> Result<Config> {
    let (config, warnings) = Config::load_with_warnings(config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;

    for warning in &warnings {
        let location = match warning.line {
            Some(line) => format!("{}:{}", warning.file.display(), line),
            None => warning.file.display().to_string(),
        };
        match &warning.suggestion {
            Some(suggestion) => eprintln!(
                "Warning: unknown config key '{}' in {} (did you mean '{}'?)",
                warning.key, location, suggestion
            ),
            None => eprintln!(
                "Warning: unknown config key '{}' in {}",
                warning.key, location
            ),
        }
    }

    let env = EnvSource::from_dir(&config.base_dir);
    Ok(config.with_env_overrides(&env))
}

/// NDJSON on stdout for `--json`, log lines otherwise
pub(crate) fn event_sink(json: bool) -> Arc<dyn RunEventSink> {
    if json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(TracingEventSink)
    }
}
