use clap::{Parser, Subcommand};
use std::error::Error;

use crate::common;

#[derive(Parser)]
#[command(name = "keygen")]
#[command(about = "secp256k1 private key generator and compressed public key deriver")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Clone)]
pub enum Command {
    /// Generate fresh private keys from the OS CSPRNG
    Generate {
        /// Number of keys to generate
        #[arg(short, long, default_value_t = 1)]
        count: usize,
        /// Worker threads (defaults to available parallelism)
        #[arg(short, long)]
        threads: Option<usize>,
        /// Also print the compressed public key of every generated key
        #[arg(short, long)]
        public: bool,
    },
    /// Derive the compressed public key of a private key
    Derive {
        /// Private key, 64 hex characters
        private_key: String,
        /// Also print the uncompressed public key
        #[arg(short, long)]
        uncompressed: bool,
    },
}

impl Command {
    pub fn validate(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        match self {
            Command::Generate { count, threads, .. } => {
                if *count == 0 {
                    return Err("count must be at least 1".into());
                }
                if *threads == Some(0) {
                    return Err("threads must be at least 1".into());
                }
            }
            Command::Derive { private_key, .. } => {
                common::validate_private_key_hex(private_key)?;
            }
        }
        Ok(())
    }

    pub fn description(&self) -> String {
        match self {
            Command::Generate { count, public, .. } => {
                if *public {
                    format!("Generating {} private key(s) with compressed public keys", count)
                } else {
                    format!("Generating {} private key(s)", count)
                }
            }
            Command::Derive { .. } => "Deriving compressed public key".to_string(),
        }
    }
}
