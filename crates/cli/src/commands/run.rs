// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `rwgate run` - Run the coordinators and report their stats

use crate::output::{self, OutputFormat};
use anyhow::Result;
use clap::Args;
use rwgate_core::harness;
use rwgate_core::CoordinatorStats;
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

#[derive(Args)]
pub struct RunArgs {
    /// Config file (TOML); the built-in demo when omitted
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// How long to run before stopping (e.g. "500ms", "2s")
    #[arg(long, short, value_parser = humantime::parse_duration)]
    pub duration: Option<Duration>,

    /// Seed for the simulated work delays
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub async fn handle(args: RunArgs) -> Result<()> {
    let mut config = super::load_config(args.config.as_deref())?;
    if let Some(duration) = args.duration {
        config = config.with_run_for(duration);
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let stats = harness::run(&config, ctrl_c()).await?;
    output::print_list(&stats, args.format)?;

    let violations: usize = stats.iter().map(CoordinatorStats::violations).sum();
    if violations > 0 {
        anyhow::bail!("{} coordination invariant violations detected", violations);
    }
    Ok(())
}

/// Resolves on Ctrl-C, or never if the handler cannot be installed
async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for ctrl-c: {}", e);
        std::future::pending::<()>().await;
    }
}
