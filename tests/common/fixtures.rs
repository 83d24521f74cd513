//! Test fixtures - reusable content constants for tests.

#![allow(dead_code)]

/// Deployer and expected owner of the fixture variants
pub const OWNER: &str = "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";

/// Forge-style artifact with both creation and runtime code
pub const HARBOR_ARTIFACT: &str = r#"{
  "abi": [],
  "bytecode": { "object": "0x6080604052348015600e575f80fd5b50603e80601a5f395ff3fe" },
  "deployedBytecode": { "object": "0x60806040525f80fdfea164736f6c6343000818000a" }
}
"#;

/// Raw creation code, hex with a trailing newline
pub const HARBOR_CREATION_HEX: &str = "0x6080604052600a600c5f395f5ff3fe\n";

/// Project config with three variants:
/// - `production` (default) from the artifact
/// - `staging` from the raw hex file
/// - `foreign`, which expects an owner the local deployer is not
pub const HARBOR_CONFIG: &str = r#"
[deploy]
variant = "production"

[record]
path = "deployments/deploy.json"

[environment]
state = ".salted/state.json"
deployer = "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"

[variants.production]
payload = "build/Harbor.json"
salt = "harbor.production"
owner = "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"

[variants.staging]
payload = "build/harbor.hex"
salt = "harbor.staging"
owner = "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"

[variants.foreign]
payload = "build/harbor.hex"
salt = "harbor.foreign"
owner = "0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb"
"#;
