//! Integration tests for `pwkit repair` command
//!
//! A fake packwiz script records each invocation.

#![cfg(unix)]

mod common;

use common::{run_pwkit, TestProject};

#[test]
fn test_repair_resets_index_and_refreshes_once() {
    let project = TestProject::with_pack();
    project.create_file("index.toml", "hash-format = \"sha256\"\n\n[[files]]\nfile = \"mods/a.pw.toml\"\n");
    let packwiz = project.fake_packwiz(0);

    let output = run_pwkit(
        &project.path(),
        &["--exec", &packwiz.display().to_string(), "repair"],
    );

    assert!(
        output.status.success(),
        "repair should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(project.file_exists("index.toml"));
    assert_eq!(project.read_file("index.toml"), "");
    assert_eq!(project.packwiz_calls(), vec!["refresh".to_string()]);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Running: packwiz refresh"), "{stdout}");
}

#[test]
fn test_repair_creates_missing_index() {
    let project = TestProject::with_pack();
    let packwiz = project.fake_packwiz(0);

    let output = run_pwkit(
        &project.path(),
        &["--exec", &packwiz.display().to_string(), "repair"],
    );

    assert!(output.status.success());
    assert!(project.file_exists("index.toml"));
}

#[test]
fn test_repair_from_subdirectory_runs_in_root() {
    let project = TestProject::with_pack();
    project.create_dir("mods");
    let packwiz = project.fake_packwiz(0);

    let output = common::pwkit_command(&project.path().join("mods"))
        .env("PACKWIZ_EXEC", &packwiz)
        .arg("repair")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(project.file_exists("index.toml"));
    assert!(!project.file_exists("mods/index.toml"));
}

#[test]
fn test_repair_propagates_packwiz_failure() {
    let project = TestProject::with_pack();
    let packwiz = project.fake_packwiz(3);

    let output = run_pwkit(
        &project.path(),
        &["--exec", &packwiz.display().to_string(), "repair"],
    );

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("exited with code 3"), "{stderr}");
    assert_eq!(project.packwiz_calls().len(), 1);
}

#[test]
fn test_repair_missing_executable_fails() {
    let project = TestProject::with_pack();
    let missing = project.tools.path().join("no-packwiz-here");

    let output = run_pwkit(
        &project.path(),
        &["--exec", &missing.display().to_string(), "repair"],
    );

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no-packwiz-here"), "{stderr}");
}
