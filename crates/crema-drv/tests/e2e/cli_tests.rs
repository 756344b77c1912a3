//! CLI surface tests: flags, help text, and driver-level argument errors.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

fn crema_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_crema"))
}

#[test]
fn help_lists_every_fixture() {
    Command::new(crema_bin())
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("usage: crema"))
        .stdout(predicate::str::contains("arithmetic"));
}

#[test]
fn missing_fixture_flag_is_a_driver_error() {
    Command::new(crema_bin())
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing required -f"));
}

#[test]
fn unknown_flag_is_a_driver_error() {
    Command::new(crema_bin()).arg("--nope").assert().failure();
}

#[test]
fn stop_after_parse_prints_the_ast_without_running_analysis() {
    Command::new(crema_bin())
        .args(["-f", "type_mismatch", "-p"])
        .assert()
        .success();
}

#[test]
fn verbose_mode_traces_phases_on_stderr() {
    Command::new(crema_bin())
        .args(["-f", "arithmetic", "-s", "-v"])
        .assert()
        .success()
        .stderr(predicate::str::contains("semantic analysis"));
}
