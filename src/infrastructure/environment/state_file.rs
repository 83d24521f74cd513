//! State-file target environment
//!
//! An `InMemoryEnvironment` loaded from, and written back to, a JSON state
//! file. Lets the CLI run the full pipeline against a local network image:
//!
//! ```json
//! {
//!   "deployer": "0x…",
//!   "accounts": {
//!     "0x…": { "code": "0x6080…", "owner": "0x…" }
//!   }
//! }
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::memory::{Account, InMemoryEnvironment};
use crate::domain::ports::{EnvResult, EnvironmentError, TargetEnvironment};
use crate::domain::value_objects::{decode_hex, Address, ContentHash, Payload, Salt};
use crate::infrastructure::fs::atomic_write;

#[derive(Error, Debug)]
pub enum StateFileError {
    #[error("failed to read state file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid state file {path}: {message}")]
    Invalid { path: PathBuf, message: String },
}

#[derive(Debug, Serialize, Deserialize)]
struct StateFile {
    deployer: Address,
    #[serde(default)]
    accounts: BTreeMap<String, StateAccount>,
}

#[derive(Debug, Serialize, Deserialize)]
struct StateAccount {
    code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    owner: Option<Address>,
}

/// Environment persisted as a JSON state file
#[derive(Debug)]
pub struct StateFileEnvironment {
    path: PathBuf,
    inner: InMemoryEnvironment,
}

impl StateFileEnvironment {
    /// Load `path`; a missing file starts an empty network owned by `deployer`.
    pub fn open(path: impl Into<PathBuf>, deployer: Address) -> Result<Self, StateFileError> {
        let path = path.into();
        if !path.exists() {
            debug!(path = %path.display(), "state file absent, starting empty");
            return Ok(Self {
                path,
                inner: InMemoryEnvironment::new(deployer),
            });
        }

        let content = std::fs::read_to_string(&path).map_err(|source| StateFileError::Io {
            path: path.clone(),
            source,
        })?;
        let inner = parse_state(&content).map_err(|message| StateFileError::Invalid {
            path: path.clone(),
            message,
        })?;
        Ok(Self { path, inner })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn inner(&self) -> &InMemoryEnvironment {
        &self.inner
    }

    fn persist(&self) -> EnvResult<()> {
        let content = render_state(&self.inner)
            .map_err(|e| EnvironmentError::StateWrite(e.to_string()))?;
        atomic_write(&self.path, content.as_bytes()).map_err(|e| {
            EnvironmentError::StateWrite(format!(
                "failed to write state file {}: {}",
                self.path.display(),
                e
            ))
        })
    }
}

fn parse_state(content: &str) -> Result<InMemoryEnvironment, String> {
    let state: StateFile = serde_json::from_str(content).map_err(|e| e.to_string())?;
    let mut accounts = BTreeMap::new();
    for (key, entry) in state.accounts {
        let address: Address = key
            .parse()
            .map_err(|e| format!("account key '{}': {}", key, e))?;
        let code = decode_hex(&entry.code).map_err(|e| format!("code of {}: {}", key, e))?;
        accounts.insert(address, Account::new(code, entry.owner));
    }
    Ok(InMemoryEnvironment::with_accounts(state.deployer, accounts))
}

fn render_state(env: &InMemoryEnvironment) -> serde_json::Result<String> {
    let accounts = env
        .accounts()
        .into_iter()
        .map(|(address, account)| {
            (
                address.to_string(),
                StateAccount {
                    code: format!("0x{}", hex::encode(&account.code)),
                    owner: account.owner,
                },
            )
        })
        .collect();
    let state = StateFile {
        deployer: env.deployer(),
        accounts,
    };
    let mut out = serde_json::to_string_pretty(&state)?;
    out.push('\n');
    Ok(out)
}

impl TargetEnvironment for StateFileEnvironment {
    fn has_content(&self, address: &Address) -> EnvResult<bool> {
        self.inner.has_content(address)
    }

    fn footprint_hash(&self, address: &Address) -> EnvResult<ContentHash> {
        self.inner.footprint_hash(address)
    }

    fn owner_of(&self, address: &Address) -> EnvResult<Address> {
        self.inner.owner_of(address)
    }

    fn deploy_via_factory(
        &self,
        factory: &Address,
        payload: &Payload,
        salt: &Salt,
    ) -> EnvResult<Address> {
        let address = self.inner.deploy_via_factory(factory, payload, salt)?;
        self.persist()?;
        Ok(address)
    }
}
