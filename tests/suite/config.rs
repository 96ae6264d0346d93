//! On-disk configuration format tests.
//!
//! `ReclaimConfig::load` reads a fixed path under the home directory, so
//! these tests run its read-then-parse steps against files in a temp dir.

use std::fs;

use reclaim_engine::{ReclaimConfig, config_path};
use tempfile::tempdir;

#[test]
fn full_config_round_trips_from_disk() {
    let temp = tempdir().expect("temp dir should open");
    let path = temp.path().join("config.toml");
    fs::write(
        &path,
        "[app]\nascii_only = true\nhigh_contrast = false\nreduced_motion = true\n",
    )
    .expect("config should write");

    let content = fs::read_to_string(&path).expect("config should read back");
    let config: ReclaimConfig = toml::from_str(&content).expect("config should parse");

    let ui = config.ui_options();
    assert!(ui.ascii_only);
    assert!(!ui.high_contrast);
    assert!(ui.reduced_motion);
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let config: ReclaimConfig =
        toml::from_str("[app]\nhigh_contrast = true\n").expect("partial config should parse");

    let ui = config.ui_options();
    assert!(!ui.ascii_only);
    assert!(ui.high_contrast);
    assert!(!ui.reduced_motion);
}

/// Files written by newer builds keep loading: unknown tables and keys
/// parse without error.
#[test]
fn unknown_keys_are_tolerated() {
    let content = "\
[app]\n\
ascii_only = true\n\
theme = \"kanagawa\"\n\
\n\
[telemetry]\n\
enabled = false\n";

    let config: ReclaimConfig = toml::from_str(content).expect("unknown keys should not fail");
    assert!(config.ui_options().ascii_only);
}

#[test]
fn malformed_toml_is_an_error_not_a_default() {
    let temp = tempdir().expect("temp dir should open");
    let path = temp.path().join("config.toml");
    fs::write(&path, "[app\nascii_only = yes").expect("config should write");

    let content = fs::read_to_string(&path).expect("config should read back");
    assert!(toml::from_str::<ReclaimConfig>(&content).is_err());
}

#[test]
fn config_lives_under_the_dot_reclaim_dir() {
    if let Some(path) = config_path() {
        assert!(path.ends_with(".reclaim/config.toml"));
    }
}
