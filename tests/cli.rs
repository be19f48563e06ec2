// tests/cli.rs
#![cfg(feature = "cli")]

use std::process::Command;

#[test]
fn cli_reports_invalid_period_with_readable_message() {
    let exe = env!("CARGO_BIN_EXE_parrondo");
    let output = Command::new(exe)
        .args(["--periods", "0"])
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("error: period must be at least 1 (got 0)"),
        "stderr: {stderr}"
    );
    assert!(!stderr.contains("NonPositivePeriod"), "stderr: {stderr}");
}

#[test]
fn cli_reports_unknown_pattern_label() {
    let exe = env!("CARGO_BIN_EXE_parrondo");
    let output = Command::new(exe)
        .args(["sweep", "--pattern", "AXB"])
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error: unknown game label 'X' in pattern"), "stderr: {stderr}");
}

#[test]
fn cli_sweep_prints_summary() {
    let exe = env!("CARGO_BIN_EXE_parrondo");
    let output = Command::new(exe)
        .args(["sweep", "--runs", "2", "--steps", "100"])
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("seq=AABB M=3 runs=2 steps=100"), "stdout: {stdout}");
}
