//! Integration tests for color control: `--color-mode`, `NO_COLOR`, `FORCE_COLOR`, `TERM`,
//! and custom word colors.

use assert_cmd::Command;
use predicates::prelude::*;

const INPUT: &str = r#"{"level":"info","message":"Test PASS"}"#;

#[allow(deprecated)]
fn glug() -> Command {
    let mut cmd = Command::cargo_bin("glug").unwrap();
    cmd.env("XDG_CONFIG_HOME", "/tmp/glug-test-no-config")
        .env_remove("RUST_LOG")
        .env_remove("NO_COLOR")
        .env_remove("FORCE_COLOR")
        .arg("--no-pager");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.write_stdin(INPUT).output().unwrap();
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn color_never_disables_ansi() {
    let stdout = stdout_of(glug().arg("--color-mode=never"));
    assert!(!stdout.contains("\x1b["), "unexpected ANSI escapes: {stdout:?}");
}

#[test]
fn color_always_enables_ansi() {
    let stdout = stdout_of(glug().arg("--color-mode=always"));
    // INFO in green
    assert!(stdout.contains("\x1b[32mINFO"), "missing green level: {stdout:?}");
}

#[test]
fn piped_stdout_disables_colors_by_default() {
    let stdout = stdout_of(&mut glug());
    assert_eq!(stdout, "INFO Test PASS\n");
}

#[test]
fn force_color_enables_colors_when_piped() {
    let stdout = stdout_of(glug().env("FORCE_COLOR", "1"));
    assert!(stdout.contains("\x1b["), "expected ANSI escapes: {stdout:?}");
}

#[test]
fn no_color_beats_force_color() {
    let stdout = stdout_of(glug().env("NO_COLOR", "1").env("FORCE_COLOR", "1"));
    assert!(!stdout.contains("\x1b["), "unexpected ANSI escapes: {stdout:?}");
}

#[test]
fn color_always_overrides_no_color() {
    let stdout = stdout_of(glug().env("NO_COLOR", "1").arg("--color-mode=always"));
    assert!(stdout.contains("\x1b["), "expected ANSI escapes: {stdout:?}");
}

#[test]
fn color_never_overrides_force_color() {
    let stdout = stdout_of(glug().env("FORCE_COLOR", "1").arg("--color-mode=never"));
    assert!(!stdout.contains("\x1b["), "unexpected ANSI escapes: {stdout:?}");
}

#[test]
fn custom_word_colored() {
    let stdout = stdout_of(glug().args(["--color-mode=always", "--colour", "green:PASS"]));
    assert!(stdout.contains("\x1b[32mPASS"), "PASS not green: {stdout:?}");
    // Unmatched remainder is left as plain text
    assert!(stdout.contains("Test "), "{stdout:?}");
}

#[test]
fn unmatched_rules_leave_message_white() {
    let stdout = stdout_of(glug().args(["--color-mode=always", "--color", "red:FAIL"]));
    assert!(stdout.contains("\x1b[37mTest PASS"), "message not white: {stdout:?}");
}

#[test]
fn custom_rules_apply_to_field_values() {
    glug()
        .args(["--color-mode=always", "--colour", "red:FAIL"])
        .write_stdin(r#"{"message":"done","result":"FAIL"}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[31mFAIL"));
}

#[test]
fn custom_rules_are_plain_without_color() {
    glug()
        .args(["--color-mode=never", "--colour", "green:PASS"])
        .write_stdin(INPUT)
        .assert()
        .success()
        .stdout("INFO Test PASS\n");
}

#[test]
fn unknown_rule_color_falls_back_to_white() {
    let stdout = stdout_of(glug().args(["--color-mode=always", "--colour", "sparkly:PASS"]));
    assert!(stdout.contains("\x1b[37mPASS"), "PASS not white: {stdout:?}");
}

#[test]
fn malformed_rule_exits_one() {
    glug()
        .args(["--colour", "PASS"])
        .write_stdin(INPUT)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("glug:"));
}
