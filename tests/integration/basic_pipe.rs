//! Integration tests for basic stdin->stdout piping.

use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn glug() -> Command {
    let mut cmd = Command::cargo_bin("glug").unwrap();
    cmd.env("XDG_CONFIG_HOME", "/tmp/glug-test-no-config")
        .env_remove("RUST_LOG")
        .args(["--color-mode=never", "--no-pager"]);
    cmd
}

#[test]
fn empty_stdin_exits_zero() {
    glug().write_stdin("").assert().success().stdout("");
}

#[test]
fn single_json_line_outputs_formatted() {
    let input = r#"{"time":1749975482337,"level":"debug","message":"hello","component":"auth"}"#;
    glug()
        .write_stdin(input)
        .assert()
        .success()
        .stdout("2025-06-15 08:18:02 DEBUG hello component=auth\n");
}

#[test]
fn extra_fields_sorted_alphabetically() {
    let input = r#"{"level":"info","message":"test","zebra":"z","alpha":"a","middle":"m"}"#;
    glug()
        .write_stdin(input)
        .assert()
        .success()
        .stdout("INFO test alpha=a middle=m zebra=z\n");
}

#[test]
fn string_values_unquoted_others_compact_json() {
    let input = r#"{"message":"m","s":"text","n":1.5,"b":true,"z":null,"arr":[1,2],"obj":{"k":"v"}}"#;
    glug()
        .write_stdin(input)
        .assert()
        .success()
        .stdout("m arr=[1,2] b=true n=1.5 obj={\"k\":\"v\"} s=text z=null\n");
}

#[test]
fn seconds_and_iso_timestamps_normalized() {
    let input = "{\"time\":1609459200,\"message\":\"epoch\"}\n\
                 {\"time\":\"2021-01-01T12:30:00Z\",\"message\":\"iso\"}\n";
    glug()
        .write_stdin(input)
        .assert()
        .success()
        .stdout("2021-01-01 00:00:00 epoch\n2021-01-01 12:30:00 iso\n");
}

#[test]
fn unparseable_time_shown_verbatim() {
    let input = r#"{"time":"yesterday","message":"when?"}"#;
    glug()
        .write_stdin(input)
        .assert()
        .success()
        .stdout("yesterday when?\n");
}

#[test]
fn unknown_level_upper_cased() {
    let input = r#"{"level":"notice","message":"hi"}"#;
    glug()
        .write_stdin(input)
        .assert()
        .success()
        .stdout("NOTICE hi\n");
}

#[test]
fn blank_lines_skipped() {
    let input = "\n   \n{\"message\":\"only\"}\n\t\n";
    glug().write_stdin(input).assert().success().stdout("only\n");
}

#[test]
fn many_lines_keep_order() {
    let input: String = (0..500)
        .map(|i| format!("{{\"message\":\"line {i}\"}}\n"))
        .collect();
    let expected: String = (0..500).map(|i| format!("line {i}\n")).collect();
    glug().write_stdin(input).assert().success().stdout(expected);
}

#[test]
fn extremely_long_line_no_crash() {
    let long_val = "x".repeat(100_000);
    let input = format!(r#"{{"message":"big","data":"{long_val}"}}"#);
    glug()
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains(long_val));
}

#[test]
fn completions_generated() {
    glug()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("glug"));
}

#[test]
fn version_flag() {
    glug()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("glug "));
}
