//! CLI-level integration tests.
//!
//! Only paths that exit before the terminal is put into raw mode are
//! exercised here; the interactive loop is covered by unit tests.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_describes_the_viewer() {
    Command::cargo_bin("threadlens")
        .expect("binary exists")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("thread dump viewer"))
        .stdout(predicate::str::contains("--locale"));
}

#[test]
fn missing_path_exits_with_an_error() {
    Command::cargo_bin("threadlens")
        .expect("binary exists")
        .arg("/nonexistent/threaddump.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Path not found"));
}
