//! salted CLI - deterministic, idempotent contract provisioning
//!
//! Usage: salted <COMMAND>
//!
//! Commands:
//!   deploy    Deploy a variant, or verify and reuse an existing deployment
//!   predict   Print a variant's deterministic address
//!   variants  List configured variants
//!   lookup    Read one entry back from a deployment record
//!   keccak    Hash a file's raw bytes

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Deploy {
            key,
            variant,
            record,
        } => commands::cmd_deploy(&cli.config, &key, variant, record, cli.json),
        Commands::Predict { variant } => commands::cmd_predict(&cli.config, variant, cli.json),
        Commands::Variants => commands::cmd_variants(&cli.config, cli.json),
        Commands::Lookup { key, record } => {
            commands::cmd_lookup(&cli.config, &key, record, cli.json)
        }
        Commands::Keccak { file } => commands::cmd_keccak(&file, cli.json),
    }
}

/// `RUST_LOG` wins; otherwise `-v` raises the level from warn.
fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
