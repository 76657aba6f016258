// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `rwgate config` - Print the effective configuration

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct ConfigArgs {
    /// Config file to validate and print; the built-in demo when omitted
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

pub fn handle(args: ConfigArgs) -> Result<()> {
    let config = super::load_config(args.config.as_deref())?;
    print!("{}", config.to_toml_string()?);
    Ok(())
}
