//! Binary crate for the `geocode` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Loading credentials from `.env`, the environment and the config file
//! - Printing one line per resolved location

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse first so usage errors exit before anything else runs.
    let cmd = cli::Cli::parse();

    dotenvy::dotenv().ok();

    // stdout carries results only
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    cmd.run().await
}
