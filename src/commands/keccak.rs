//! Keccak command handler

use std::path::Path;

use anyhow::{Context, Result};

use salted::domain::value_objects::ContentHash;

pub fn cmd_keccak(file: &Path, json: bool) -> Result<()> {
    let bytes = std::fs::read(file).with_context(|| format!("reading {}", file.display()))?;
    let hash = ContentHash::of(&bytes);

    if json {
        let output = serde_json::json!({
            "event": "keccak",
            "path": file.display().to_string(),
            "hash": hash.to_string(),
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{}", hash);
    }
    Ok(())
}
