//! Predict command handler

use std::path::Path;

use anyhow::Result;

use salted::domain::services::predict_address;

use super::load_project;

pub fn cmd_predict(config_path: &Path, variant: Option<String>, json: bool) -> Result<()> {
    let config = load_project(config_path)?;
    let resolver = config.build_resolver()?;
    let variant = variant.or_else(|| config.selected_variant.clone());
    let (name, variant) = resolver.resolve_or_default(variant.as_deref())?;

    let payload_hash = variant.payload().creation_hash();
    let address = predict_address(&config.deploy.factory, variant.salt(), &payload_hash);

    if json {
        let output = serde_json::json!({
            "event": "predict",
            "variant": name,
            "factory": config.deploy.factory.to_checksum(),
            "salt": variant.salt().label(),
            "payload_hash": payload_hash.to_string(),
            "address": address.to_checksum(),
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{}", address.to_checksum());
    }
    Ok(())
}
