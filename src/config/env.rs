//! Environment lookup with `.env` fallback
//!
//! A variable set in the process environment wins; otherwise the value from
//! a `.env` file next to the config file is used.

use std::collections::BTreeMap;
use std::path::Path;

/// Variant to deploy in this run
pub const VARIANT_VAR: &str = "SALTED_VARIANT";
/// `overwrite` or `sequenced`
pub const RECORD_MODE_VAR: &str = "SALTED_RECORD_MODE";
/// Record output path
pub const RECORD_PATH_VAR: &str = "SALTED_RECORD_PATH";

#[derive(Debug, Clone, Default)]
pub struct EnvSource {
    use_process: bool,
    dotenv: BTreeMap<String, String>,
}

impl EnvSource {
    /// Process environment, falling back to `<dir>/.env` when it exists
    pub fn from_dir(dir: &Path) -> Self {
        let dotenv = std::fs::read_to_string(dir.join(".env"))
            .map(|content| parse_dotenv(&content))
            .unwrap_or_default();
        Self {
            use_process: true,
            dotenv,
        }
    }

    /// Fixed variables only, the process environment is ignored
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            use_process: false,
            dotenv: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        if self.use_process {
            if let Ok(value) = std::env::var(key) {
                return Some(value);
            }
        }
        self.dotenv.get(key).cloned()
    }
}

/// Parse `KEY=VALUE` lines. Blank lines and `#` comments are skipped, an
/// `export ` prefix is allowed and matching outer quotes are removed.
pub fn parse_dotenv(content: &str) -> BTreeMap<String, String> {
    let mut vars = BTreeMap::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let line = line.strip_prefix("export ").unwrap_or(line);
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        vars.insert(key.to_string(), unquote(value.trim()).to_string());
    }
    vars
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}
