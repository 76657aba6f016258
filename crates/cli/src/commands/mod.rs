// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod config;
pub mod run;

use anyhow::Result;
use rwgate_core::HarnessConfig;
use std::path::Path;

/// The config file when one is given, the built-in demo otherwise
pub fn load_config(path: Option<&Path>) -> Result<HarnessConfig> {
    match path {
        Some(path) => Ok(HarnessConfig::load(path)?),
        None => Ok(HarnessConfig::default()),
    }
}
