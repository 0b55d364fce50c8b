//! Integration tests for CLI output behavior
//!
//! The default behavior is quiet (no logs). Use -v/--verbose to enable logs.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

/// Write `count` numbered items (`N<TAB>item NN`) into `dir/name`.
fn write_numbered_items(dir: &Path, name: &str, count: usize) {
    let text: String = (0..count).map(|i| format!("{i}\titem {i:02}\n")).collect();
    fs::write(dir.join(name), text).expect("Failed to write items");
}

/// Run cmgui-choose inside `dir` with `HOME` pointed there as well, so no
/// real user config is picked up.
fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cmgui-choose"))
        .current_dir(dir)
        .env("HOME", dir)
        .args(args)
        .output()
        .expect("Failed to execute cmgui-choose")
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "cmgui-choose failed with exit code {:?}. stderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn test_layout_groups_forty_items() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_numbered_items(temp_dir.path(), "items.txt", 40);

    let output = run_in(temp_dir.path(), &["layout", "items.txt", "--current", "20"]);
    assert_success(&output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    let groups: Vec<&str> = stdout
        .lines()
        .filter(|line| line.starts_with("  + "))
        .collect();
    assert_eq!(
        groups,
        vec![
            "  + item 00 ... item 13",
            "  + item 14 ... item 26",
            "  + item 27 ... item 39",
        ]
    );
    assert!(stdout.starts_with("current: item 20\n"));
    assert!(stdout.contains("    * item 20\n"));
}

#[test]
fn test_layout_json_parses() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_numbered_items(temp_dir.path(), "items.txt", 3);

    let output = run_in(
        temp_dir.path(),
        &["layout", "items.txt", "--current", "99", "--json"],
    );
    assert_success(&output);

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON");
    assert_eq!(report["current"], "0");
    assert_eq!(report["matched"], false);
    assert_eq!(report["group_count"], 0);
    assert_eq!(report["nodes"].as_array().unwrap().len(), 3);
    assert_eq!(report["nodes"][1]["kind"], "entry");
    assert_eq!(report["nodes"][1]["label"], "item 01");
}

#[test]
fn test_layout_reads_stdin() {
    use std::io::Write;
    use std::process::Stdio;

    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let mut child = Command::new(env!("CARGO_BIN_EXE_cmgui-choose"))
        .current_dir(temp_dir.path())
        .env("HOME", temp_dir.path())
        .args(["layout", "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn cmgui-choose");
    child
        .stdin
        .take()
        .expect("stdin should be piped")
        .write_all(b"Alpha\nBeta\n")
        .expect("Failed to write stdin");
    let output = child.wait_with_output().expect("Failed to wait");
    assert_success(&output);

    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "current: Alpha\n  * Alpha\n  - Beta\n"
    );
}

#[test]
fn test_layout_empty_list_shows_placeholder() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join("empty.txt"), "\n").unwrap();

    let output = run_in(temp_dir.path(), &["layout", "empty.txt"]);
    assert_success(&output);
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "current: <none>\n  x none available\n"
    );
}

#[test]
fn test_run_reports_fallback_and_forced_pick() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    fs::write(
        temp_dir.path().join("items.txt"),
        "1\tAlpha\n2\tBeta\n3\tGamma\n",
    )
    .unwrap();

    let output = run_in(
        temp_dir.path(),
        &[
            "run",
            "items.txt",
            "--initial",
            "2",
            "--op",
            "set=2",
            "--op",
            "pick=2",
            "--op",
            "set=99",
        ],
    );
    assert_success(&output);

    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "pick=2: changed to 2\n\
         set=99: coerced 99 to 1\n\
         set=99: changed to 1\n\
         current: 1\n"
    );
}

#[test]
fn test_run_json_with_rebuild() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_numbered_items(temp_dir.path(), "items.txt", 40);
    write_numbered_items(temp_dir.path(), "fewer.txt", 10);

    let output = run_in(
        temp_dir.path(),
        &[
            "run",
            "items.txt",
            "--op",
            "activate=2.5",
            "--op",
            "rebuild=fewer.txt",
            "--json",
        ],
    );
    assert_success(&output);

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON");
    let steps = report["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 2);
    assert_eq!(
        steps[0]["events"][0]["SelectionChanged"]["identity"],
        "32"
    );
    assert_eq!(steps[1]["events"][0]["Rebuilt"]["item_count"], 10);
    assert_eq!(
        steps[1]["events"][1]["SelectionCoerced"]["actual"],
        "0"
    );
    assert_eq!(report["current"], "0");
    assert_eq!(report["notifications"], 2);
}

#[test]
fn test_run_unknown_entry_fails() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_numbered_items(temp_dir.path(), "items.txt", 3);

    let output = run_in(temp_dir.path(), &["run", "items.txt", "--op", "pick=7"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Failed to apply 'pick=7'"),
        "Expected failure message in stderr, got: {}",
        stderr
    );
}

/// User errors are logged at warn with their error code, never at error
#[test]
fn test_user_error_logs_warning_with_code() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_numbered_items(temp_dir.path(), "items.txt", 3);

    let output = run_in(
        temp_dir.path(),
        &["-v", "run", "items.txt", "--op", "pick=7"],
    );
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    let failure = stderr
        .lines()
        .find(|line| line.contains(r#""event":"cli.run_failed""#))
        .unwrap_or_else(|| panic!("Expected cli.run_failed log, got: {}", stderr));
    assert!(failure.contains(r#""level":"WARN""#), "got: {}", failure);
    assert!(
        failure.contains(r#""error_code":"CHOOSER_UNKNOWN_ENTRY""#),
        "got: {}",
        failure
    );
    assert!(
        !stderr.contains(r#""level":"ERROR""#),
        "User errors should not log at error level, got: {}",
        stderr
    );
}

#[test]
fn test_run_rejects_malformed_op() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_numbered_items(temp_dir.path(), "items.txt", 3);

    let output = run_in(temp_dir.path(), &["run", "items.txt", "--op", "jump=1"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

/// Verify that stdout contains only user-facing output (no JSON logs)
/// and that stderr carries no INFO logs by default (quiet mode)
#[test]
fn test_stdout_is_clean_and_quiet_by_default() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_numbered_items(temp_dir.path(), "items.txt", 20);

    let output = run_in(temp_dir.path(), &["layout", "items.txt"]);
    assert_success(&output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    for line in stdout.lines() {
        assert!(
            !line.trim_start().starts_with('{'),
            "stdout should be pipeable, got JSON line: {}",
            line
        );
    }
    assert!(
        !stderr.contains(r#""level":"INFO""#),
        "Default mode should not emit INFO logs, got: {}",
        stderr
    );
}

/// Verify that -v enables JSON logs on stderr
#[test]
fn test_verbose_emits_json_logs() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_numbered_items(temp_dir.path(), "items.txt", 5);

    let output = run_in(temp_dir.path(), &["-v", "layout", "items.txt"]);
    assert_success(&output);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains(r#""event":"cli.layout_started""#),
        "Verbose mode should log command start, got: {}",
        stderr
    );
    assert!(!String::from_utf8_lossy(&output.stdout).contains(r#""event":"#));
}

#[test]
fn test_completions_bash() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output = run_in(temp_dir.path(), &["completions", "bash"]);
    assert_success(&output);
    assert!(String::from_utf8_lossy(&output.stdout).contains("cmgui-choose"));
}
