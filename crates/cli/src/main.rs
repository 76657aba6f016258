// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! rwgate - bounded reader/writer coordination demo

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{config, run};

#[derive(Parser)]
#[command(
    name = "rwgate",
    version,
    about = "Bounded reader/writer coordination demo"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run coordinators for a while, stop them, and print their stats
    Run(run::RunArgs),
    /// Print the effective configuration as TOML
    Config(config::ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging();

    match cli.command {
        Commands::Run(args) => run::handle(args).await,
        Commands::Config(args) => config::handle(args),
    }
}

/// Logs go to stderr so stdout only carries results
fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
