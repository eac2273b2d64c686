//! Integration tests for the CLI interface
//!
//! Tests the entry point and argument parsing; nothing here touches
//! the network.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_cli_requires_a_subcommand() {
    let mut cmd = Command::cargo_bin("gleaner").unwrap();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_cli_help_flag() {
    let mut cmd = Command::cargo_bin("gleaner").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"));
}

#[test]
fn test_organize_help() {
    let mut cmd = Command::cargo_bin("gleaner").unwrap();
    cmd.arg("organize")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("extension-keyed subdirectories"));
}

#[test]
fn test_wordfreq_help() {
    let mut cmd = Command::cargo_bin("gleaner").unwrap();
    cmd.arg("wordfreq")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("word frequencies"));
}

#[test]
fn test_invalid_command() {
    let mut cmd = Command::cargo_bin("gleaner").unwrap();
    cmd.arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_organize_requires_both_paths() {
    let mut cmd = Command::cargo_bin("gleaner").unwrap();
    cmd.arg("organize")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_organize_missing_source_returns_cleanly() {
    let dir = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("gleaner").unwrap();
    cmd.arg("organize")
        .arg(dir.path().join("absent"))
        .arg(dir.path().join("output"))
        .assert()
        .success()
        .stdout(predicate::str::contains("does not exist"));
}

#[test]
fn test_organize_copies_files_end_to_end() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("source");
    let output = dir.path().join("output");
    std::fs::create_dir_all(&source).unwrap();
    std::fs::write(source.join("a.txt"), "alpha").unwrap();

    let mut cmd = Command::cargo_bin("gleaner").unwrap();
    cmd.arg("organize")
        .arg(&source)
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Copied 1 of 1 files"));

    assert_eq!(
        std::fs::read_to_string(output.join("txt/a.txt")).unwrap(),
        "alpha"
    );
}

#[test]
fn test_wordfreq_rejects_malformed_url() {
    let mut cmd = Command::cargo_bin("gleaner").unwrap();
    cmd.args(["wordfreq", "--url", "not a url"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_wordfreq_rejects_non_numeric_top() {
    let mut cmd = Command::cargo_bin("gleaner").unwrap();
    cmd.args(["wordfreq", "--top", "many"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}
