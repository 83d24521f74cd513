//! Lookup command handler

use std::path::{Path, PathBuf};

use anyhow::Result;

use salted::application::record_store::lookup;
use salted::domain::entities::RecordValue;
use salted::infrastructure::LocalFs;

use super::load_project;

pub fn cmd_lookup(config_path: &Path, key: &str, record: Option<PathBuf>, json: bool) -> Result<()> {
    let path = match record {
        Some(path) => path,
        None => load_project(config_path)?.record_path(),
    };

    let value = lookup(&LocalFs::new(), &path, key)?;
    let rendered = match &value {
        RecordValue::Address(address) => address.to_checksum(),
        other => other.to_string(),
    };

    if json {
        let output = serde_json::json!({
            "event": "lookup",
            "key": key,
            "kind": value.kind(),
            "value": rendered,
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{}", rendered);
    }
    Ok(())
}
