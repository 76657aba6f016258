//! Help and version specs

use crate::prelude::*;

#[test]
fn help_lists_commands() {
    rwgate()
        .args(&["--help"])
        .passes()
        .stdout_has("run")
        .stdout_has("config");
}

#[test]
fn run_help_lists_options() {
    rwgate()
        .args(&["run", "--help"])
        .passes()
        .stdout_has("--duration")
        .stdout_has("--seed")
        .stdout_has("--format");
}

#[test]
fn version_is_reported() {
    rwgate()
        .args(&["--version"])
        .passes()
        .stdout_has(env!("CARGO_PKG_VERSION"));
}
