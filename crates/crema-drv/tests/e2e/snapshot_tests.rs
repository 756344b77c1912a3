//! Stability checks on the `-S` IR-text output: repeated invocations of the
//! same fixture must produce byte-identical text, since the emitter carries
//! no process-wide mutable state that could let two runs diverge.

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

fn crema_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_crema"))
}

#[test]
fn ir_text_is_stable_across_runs() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("first.ll");
    let second = dir.path().join("second.ll");

    Command::new(crema_bin())
        .args(["-f", "record", "-S"])
        .arg(&first)
        .assert()
        .success();
    Command::new(crema_bin())
        .args(["-f", "record", "-S"])
        .arg(&second)
        .assert()
        .success();

    let a = std::fs::read_to_string(&first).unwrap();
    let b = std::fs::read_to_string(&second).unwrap();
    assert_eq!(a, b);
    assert!(a.contains("%Pt = type"));
}
