//! Integration tests for the CLI binary.
//!
//! Verifies that the `utctime` binary responds to basic flags and performs
//! each conversion.
//!
//! This test is registered as a [[test]] in the sdk-timing-cli crate
//! so that CARGO_BIN_EXE_utctime is available.

use std::process::{Command, Output};

/// Get a Command pointing to the `utctime` binary.
fn utctime_binary() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_utctime"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn run(args: &[&str]) -> Output {
    utctime_binary()
        .args(args)
        .output()
        .expect("failed to execute utctime")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

#[test]
fn cli_responds_to_help() {
    let output = run(&["--help"]);

    assert!(
        output.status.success(),
        "utctime --help should exit with success, stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("utctime") || stdout.contains("Usage"),
        "utctime --help output should contain usage information, got: {stdout}"
    );
}

#[test]
fn cli_responds_to_version() {
    let output = run(&["--version"]);

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(
        stdout.contains(env!("CARGO_PKG_VERSION")),
        "utctime --version should contain version info, got: {stdout}"
    );
}

#[test]
fn cli_exits_with_error_on_unknown_flag() {
    let output = run(&["--nonexistent-flag"]);

    assert!(
        !output.status.success(),
        "utctime with unknown flag should exit with error"
    );
}

#[test]
fn cli_decode_prints_epoch_seconds() {
    let output = run(&["decode", "2017-08-03T19:53:14+0000"]);

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "1501789994");
}

#[test]
fn cli_decode_wrong_length_fails() {
    let output = run(&["decode", "2017-08-03T19:53:14"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("length"), "stderr: {stderr}");
}

#[test]
fn cli_encode_prints_fixed_format() {
    let output = run(&["encode", "1005"]);

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "1970-01-01T00:00:01.005Z");
}

#[test]
fn cli_encode_accepts_negative_millis() {
    let output = run(&["encode", "-1"]);

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "1969-12-31T23:59:59.999Z");
}

#[test]
fn cli_epoch_from_fields() {
    let output = run(&[
        "epoch", "--year", "1969", "--month", "12", "--day", "31", "--hour", "23", "--minute",
        "59", "--second", "59",
    ]);

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "-1");
}

#[test]
fn cli_epoch_accepts_out_of_range_fields() {
    // Day -1 of January 2018 is 2017-12-30.
    let output = run(&["epoch", "--year", "2018", "--month", "1", "--day", "-1"]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(stdout_of(&output), "1514592000");

    // Month 0 of 2018 is December 2017.
    let output = run(&["epoch", "--year", "2018", "--month", "0", "--day", "1"]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "1512086400");

    let output = run(&[
        "epoch", "--year", "1970", "--month", "1", "--day", "1", "--hour", "-1", "--minute",
        "-30", "--second", "-5",
    ]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "-5405");
}

#[test]
fn cli_breakdown_json() {
    let output = run(&["--json", "breakdown", "951782400"]);

    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_str(&stdout_of(&output)).expect("output should be JSON");
    assert_eq!(value["epoch_seconds"], 951_782_400);
    assert_eq!(value["utc"]["year"], 2000);
    assert_eq!(value["utc"]["month"], 2);
    assert_eq!(value["utc"]["day"], 29);
}

#[test]
fn cli_now_prints_positive_seconds() {
    let output = run(&["now", "--encoded"]);

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    let mut lines = stdout.lines();
    let seconds: i64 = lines.next().unwrap().parse().unwrap();
    assert!(seconds > 1_501_789_994);
    assert_eq!(lines.next().unwrap().len(), 24);
}
