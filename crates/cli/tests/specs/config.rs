//! `rwgate config` specs

use crate::prelude::*;

#[test]
fn default_config_describes_the_demo() {
    let out = rwgate()
        .args(&["config"])
        .passes()
        .stdout_has("[[coordinator]]")
        .stdout_has("name = \"First\"")
        .stdout_has("name = \"Second\"");

    let value: toml::Table = toml::from_str(&out.stdout()).unwrap();
    let coordinators = value.get("coordinator").unwrap().as_array().unwrap();
    assert_eq!(coordinators.len(), 2);
    assert_eq!(coordinators[0].get("max_reads").unwrap().as_integer(), Some(3));
    assert_eq!(coordinators[0].get("readers").unwrap().as_integer(), Some(6));
    assert_eq!(value.get("run_for").unwrap().as_str(), Some("2s"));
}

#[test]
fn config_file_is_echoed_with_defaults_filled_in() {
    let project = Project::empty();
    let path = project.file(
        "rwgate.toml",
        "seed = 9\n\n[[coordinator]]\nname = \"Solo\"\nmax_reads = 4\n",
    );

    rwgate()
        .args(&["config", "--config", path.as_str()])
        .passes()
        .stdout_has("seed = 9")
        .stdout_has("name = \"Solo\"")
        .stdout_has("readers = 0")
        .stdout_has("read_time = \"1s\"");
}
