//! Error reporting specs

use crate::prelude::*;

#[test]
fn zero_capacity_is_rejected() {
    let project = Project::empty();
    let path = project.file(
        "zero.toml",
        "[[coordinator]]\nname = \"Broken\"\nmax_reads = 0\nreaders = 2\n",
    );

    rwgate()
        .args(&["run", "--config", path.as_str()])
        .fails()
        .stderr_has("Broken")
        .stderr_has("capacity must allow at least 1 concurrent read");
}

#[test]
fn negative_capacity_is_rejected() {
    let project = Project::empty();
    let path = project.file(
        "negative.toml",
        "[[coordinator]]\nname = \"Broken\"\nmax_reads = -1\n",
    );

    rwgate()
        .args(&["run", "--config", path.as_str()])
        .fails()
        .stderr_has("invalid config");
}

#[test]
fn config_without_coordinators_is_rejected() {
    let project = Project::empty();
    let path = project.file("empty.toml", "run_for = \"1s\"\n");

    rwgate()
        .args(&["config", "--config", path.as_str()])
        .fails()
        .stderr_has("no coordinators");
}

#[test]
fn missing_config_file_is_reported() {
    rwgate()
        .args(&["run", "--config", "/nonexistent/rwgate.toml"])
        .fails()
        .stderr_has("failed to read config");
}

#[test]
fn malformed_duration_is_rejected() {
    rwgate()
        .args(&["run", "--duration", "soon"])
        .fails()
        .stderr_has("--duration");
}
