//! `rwgate run` specs
//!
//! Verify coordinators run, stop, and report clean stats.

use crate::prelude::*;

const FAST: &str = r#"
run_for = "300ms"
seed = 42

[[coordinator]]
name = "First"
max_reads = 3
readers = 6

[coordinator.pacing]
read_time = "20ms"
write_time = "20ms"
write_interval = "20ms"

[[coordinator]]
name = "Second"
max_reads = 2
readers = 2

[coordinator.pacing]
read_time = "20ms"
write_time = "20ms"
write_interval = "20ms"
"#;

#[test]
fn default_demo_reports_both_coordinators() {
    rwgate()
        .args(&["run", "--duration", "200ms", "--seed", "1"])
        .passes()
        .stdout_has("First: capacity=3")
        .stdout_has("Second: capacity=2")
        .stdout_has("workers=7/7 exited")
        .stdout_has("workers=3/3 exited")
        .stdout_has("slots=3/3")
        .stdout_has("slots=2/2")
        .stdout_has("violations=0");
}

#[test]
fn config_file_drives_the_run() {
    let project = Project::empty();
    let path = project.file("rwgate.toml", FAST);

    let out = rwgate().args(&["run", "--config", path.as_str()]).passes();
    let stdout = out.stdout();
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 2, "unexpected output: {}", stdout);
    assert!(lines.iter().all(|l| l.ends_with("violations=0")));
}

#[test]
fn json_output_is_parseable() {
    let project = Project::empty();
    let path = project.file("rwgate.toml", FAST);

    let out = rwgate()
        .args(&["run", "--config", path.as_str(), "--format", "json"])
        .passes();
    let stats: serde_json::Value = serde_json::from_str(&out.stdout()).unwrap();
    let stats = stats.as_array().unwrap();

    assert_eq!(stats.len(), 2);
    assert_eq!(stats[0]["name"], "First");
    assert_eq!(stats[1]["name"], "Second");
    for s in stats {
        assert_eq!(s["stopped"], true);
        assert_eq!(s["capacity_violations"], 0);
        assert_eq!(s["exclusivity_violations"], 0);
        assert_eq!(s["available_slots"], s["max_reads"]);
        assert!(s["peak_reads"].as_u64().unwrap() <= s["max_reads"].as_u64().unwrap());
    }
    assert_eq!(stats[0]["workers"]["readers_launched"], 6);
    assert_eq!(stats[0]["workers"]["writers_launched"], 1);
}

#[test]
fn logs_go_to_stderr() {
    let project = Project::empty();
    let path = project.file("rwgate.toml", FAST);

    rwgate()
        .env("RUST_LOG", "info")
        .args(&["run", "--config", path.as_str()])
        .passes()
        .stderr_has("stopped")
        .stdout_lacks("INFO");
}
