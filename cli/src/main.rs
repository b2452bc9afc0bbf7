mod args;
mod common;
mod modes;

use args::{Cli, Command};
use clap::Parser;
use crate::common::GlobalStats;
use std::error::Error;
use std::sync::Arc;

fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let cli = Cli::parse();

    // Validate inputs
    cli.command.validate()?;

    eprintln!("{}", cli.command.description());

    match &cli.command {
        Command::Generate { count, threads, public } => {
            let num_threads = threads.unwrap_or_else(|| {
                std::thread::available_parallelism()
                    .map(|n| n.get())
                    .unwrap_or(4)
            });
            let stats = Arc::new(GlobalStats::new(num_threads.min(*count)));
            modes::generate::run(num_threads, *count, *public, stats)
        }
        Command::Derive { private_key, uncompressed } => {
            modes::derive::run(private_key, *uncompressed)
        }
    }
}
