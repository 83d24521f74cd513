use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// salted - deterministic, idempotent contract provisioning
#[derive(Parser, Debug)]
#[command(name = "salted")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON run events for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Project configuration file
    #[arg(short, long, global = true, default_value = "salted.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Deploy a variant, or verify and reuse an existing deployment
    Deploy {
        /// Record key the address is stored under
        key: String,

        /// Variant to deploy (default: SALTED_VARIANT, then [deploy].variant)
        #[arg(long)]
        variant: Option<String>,

        /// Override the record output path
        #[arg(long)]
        record: Option<PathBuf>,
    },

    /// Print the deterministic address of a variant without deploying
    Predict {
        /// Variant to predict (default: SALTED_VARIANT, then [deploy].variant)
        #[arg(long)]
        variant: Option<String>,
    },

    /// List configured variants
    Variants,

    /// Read one entry back from a deployment record
    Lookup {
        /// Record key
        key: String,

        /// Record file (default: [record].path)
        #[arg(long)]
        record: Option<PathBuf>,
    },

    /// Print the keccak-256 hash of a file's raw bytes
    Keccak {
        /// File to hash
        file: PathBuf,
    },
}
