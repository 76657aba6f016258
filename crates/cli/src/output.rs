// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for CLI commands

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Print a list of items to stdout, one line each for text
pub fn print_list<T>(items: &[T], format: OutputFormat) -> Result<()>
where
    T: Serialize + std::fmt::Display,
{
    write_list(&mut std::io::stdout().lock(), items, format)
}

fn write_list<T, W>(out: &mut W, items: &[T], format: OutputFormat) -> Result<()>
where
    T: Serialize + std::fmt::Display,
    W: Write,
{
    match format {
        OutputFormat::Text => {
            for item in items {
                writeln!(out, "{}", item)?;
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(items)?;
            writeln!(out, "{}", json)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
