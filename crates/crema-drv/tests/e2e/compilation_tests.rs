//! End-to-end compilation outcomes for each fixture, driven through the
//! `crema` binary rather than the library API.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

fn crema_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_crema"))
}

/// Scenario 1 of spec.md §8: `int a = 3  int b = a + 4  return b`.
#[test]
fn arithmetic_fixture_compiles_and_emits_ir() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("arithmetic.ll");
    Command::new(crema_bin())
        .args(["-f", "arithmetic", "-S"])
        .arg(&out)
        .assert()
        .success();
    let text = std::fs::read_to_string(&out).unwrap();
    assert!(text.contains("define i64 @main"));
}

/// Scenario 2: `int a  double b = 2.5  a = b` — double not assignable to int.
#[test]
fn type_mismatch_fixture_fails_with_nonzero_exit() {
    Command::new(crema_bin())
        .args(["-f", "type_mismatch"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

/// Scenario 4: `def int f() { return f() }` — whole-program recursion check.
#[test]
fn recursion_fixture_fails_with_nonzero_exit() {
    Command::new(crema_bin())
        .args(["-f", "recursion"])
        .assert()
        .failure();
}

/// Scenario 7: `int[] xs = [1, 2.0]` — heterogeneous list literal.
#[test]
fn heterogeneous_list_fixture_fails_with_nonzero_exit() {
    Command::new(crema_bin())
        .args(["-f", "heterogeneous_list"])
        .assert()
        .failure();
}

/// Scenario 8: `if ("hi") { }` — condition cannot evaluate to boolean.
#[test]
fn bad_condition_fixture_fails_with_nonzero_exit() {
    Command::new(crema_bin())
        .args(["-f", "bad_condition"])
        .assert()
        .failure();
}

/// Scenario 3: up-cast is accepted, with a warning, not an error.
#[test]
fn upcast_fixture_succeeds_with_a_warning_on_stderr() {
    Command::new(crema_bin())
        .args(["-f", "upcast", "-s"])
        .assert()
        .success()
        .stderr(predicate::str::contains("warning"));
}

/// Scenario 5: `struct Pt { int x  int y }  Pt p  p.x = 5  return p.x`.
#[test]
fn record_fixture_compiles_successfully() {
    Command::new(crema_bin())
        .args(["-f", "record", "-s"])
        .assert()
        .success();
}

/// Scenario 6: `int[] xs = [1,2,3]  foreach (xs as v) { int_println(v) }`.
#[test]
fn foreach_fixture_compiles_successfully() {
    Command::new(crema_bin())
        .args(["-f", "foreach", "-s"])
        .assert()
        .success();
}
