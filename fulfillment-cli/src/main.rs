//! Binary crate for the `fulfillment` command-line harness.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Feeding intent events into the core handler
//! - Printing the dialog-action response

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
