//! Variants command handler

use std::path::Path;

use anyhow::Result;

use salted::domain::services::predict_address;

use super::load_project;

pub fn cmd_variants(config_path: &Path, json: bool) -> Result<()> {
    let config = load_project(config_path)?;
    let resolver = config.build_resolver()?;

    for name in resolver.names() {
        let variant = resolver.resolve(name)?;
        let address = predict_address(
            &config.deploy.factory,
            variant.salt(),
            &variant.payload().creation_hash(),
        );
        let is_default = name == resolver.default_name();

        if json {
            let output = serde_json::json!({
                "event": "variant",
                "name": name,
                "default": is_default,
                "salt": variant.salt().label(),
                "owner": variant.expected_owner().to_checksum(),
                "address": address.to_checksum(),
            });
            println!("{}", serde_json::to_string(&output)?);
        } else {
            let marker = if is_default { "*" } else { " " };
            println!(
                "{} {:<16} {}  salt={}",
                marker,
                name,
                address.to_checksum(),
                variant.salt()
            );
        }
    }
    Ok(())
}
