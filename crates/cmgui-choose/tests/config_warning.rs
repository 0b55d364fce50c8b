//! Integration tests for config file handling.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn write_project_config(dir: &Path, content: &str) {
    let config_dir = dir.join(".cmgui");
    fs::create_dir_all(&config_dir).expect("Failed to create .cmgui dir");
    fs::write(config_dir.join("chooser.toml"), content).expect("Failed to write config");
}

fn layout_in(dir: &Path, extra: &[&str]) -> Output {
    let items: String = (0..10).map(|i| format!("{i}\tvalue {i}\n")).collect();
    fs::write(dir.join("items.txt"), items).expect("Failed to write items");

    Command::new(env!("CARGO_BIN_EXE_cmgui-choose"))
        .current_dir(dir)
        .env("HOME", dir)
        .arg("layout")
        .arg("items.txt")
        .args(extra)
        .output()
        .expect("Failed to execute cmgui-choose")
}

#[test]
fn test_config_warning_on_invalid_toml() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_project_config(temp_dir.path(), "invalid toml [[[");

    let output = layout_in(temp_dir.path(), &[]);
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Warning: Could not load config"),
        "Expected warning in stderr, got: {}",
        stderr
    );
    assert!(
        stderr.contains("Tip: Check"),
        "Expected tip about config files in stderr, got: {}",
        stderr
    );
    // Defaults keep ten items flat
    assert!(!String::from_utf8_lossy(&output.stdout).contains(" + "));
}

#[test]
fn test_project_config_sets_fan_out() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_project_config(
        temp_dir.path(),
        "[menu]\nfan_out = 4\ngroup_separator = \" - \"\n",
    );

    let output = layout_in(temp_dir.path(), &[]);
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        !stderr.contains("Warning"),
        "Valid config should not warn, got: {}",
        stderr
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("  + value 0 - value 3\n"),
        "Expected grouped output, got: {}",
        stdout
    );
}

#[test]
fn test_cli_fan_out_overrides_config() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_project_config(temp_dir.path(), "[menu]\nfan_out = 4\n");

    let output = layout_in(temp_dir.path(), &["--fan-out", "16"]);
    assert!(output.status.success());
    assert!(!String::from_utf8_lossy(&output.stdout).contains(" + "));
}

#[test]
fn test_invalid_fan_out_flag_fails() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");

    let output = layout_in(temp_dir.path(), &["--fan-out", "1"]);
    assert!(!output.status.success());
    assert!(
        String::from_utf8_lossy(&output.stderr).contains("Invalid configuration"),
        "Expected validation error, got: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}
