//! Integration tests for the config file and timestamp field conversion.

use std::io::Write;

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

fn config_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn convert_timestamps_for_named_fields() {
    let input = r#"{"message":"token","validUntil":1760134416629,"expires":"never","id":1760134416629}"#;
    glug()
        .args(["-t", "validUntil,expires"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(
            "token expires=never id=1760134416629 \
             validUntil=2025-10-10 22:13:36 (1760134416629)\n",
        );
}

#[test]
fn convert_timestamps_case_insensitive_names() {
    let input = r#"{"message":"m","VALIDUNTIL":1609459200}"#;
    glug()
        .arg("--convert-timestamps=validuntil")
        .write_stdin(input)
        .assert()
        .success()
        .stdout("m VALIDUNTIL=2021-01-01 00:00:00 (1609459200)\n");
}

#[test]
fn timestamp_fields_untouched_without_flag() {
    let input = r#"{"message":"m","expires":1609459200}"#;
    glug()
        .write_stdin(input)
        .assert()
        .success()
        .stdout("m expires=1609459200\n");
}

#[test]
fn detect_timestamps_uses_field_names() {
    let input = r#"{"message":"m","created_at":1609459200,"count":1609459200}"#;
    glug()
        .arg("--detect-timestamps")
        .write_stdin(input)
        .assert()
        .success()
        .stdout("m count=1609459200 created_at=2021-01-01 00:00:00 (1609459200)\n");
}

#[test]
fn config_file_settings_applied() {
    let file = config_file(
        r#"
level = "warn"
timestamp_fields = ["expires"]

[colors]
PASS = "green"
"#,
    );
    let input = "{\"level\":\"info\",\"message\":\"hidden\"}\n\
                 {\"level\":\"error\",\"message\":\"shown\",\"expires\":1609459200}\n";
    glug()
        .arg(format!("--config={}", file.path().display()))
        .write_stdin(input)
        .assert()
        .success()
        .stdout("ERROR shown expires=2021-01-01 00:00:00 (1609459200)\n");
}

#[test]
fn config_file_found_via_xdg_config_home() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("glug")).unwrap();
    std::fs::write(dir.path().join("glug/config.toml"), "level = \"error\"\n").unwrap();

    glug()
        .env("XDG_CONFIG_HOME", dir.path())
        .write_stdin("{\"level\":\"warn\",\"message\":\"w\"}\n{\"level\":\"error\",\"message\":\"e\"}\n")
        .assert()
        .success()
        .stdout("ERROR e\n");
}

#[test]
fn cli_overrides_config_file() {
    let file = config_file("level = \"error\"\ncolor = \"always\"\n");
    glug()
        .arg(format!("--config={}", file.path().display()))
        .arg("--level=debug")
        .write_stdin(r#"{"level":"debug","message":"d"}"#)
        .assert()
        .success()
        // --color-mode=never from the command line beats the file
        .stdout("DEBUG d\n");
}

#[test]
fn missing_config_file_exits_one() {
    glug()
        .arg("--config=/nonexistent/glug/config.toml")
        .write_stdin("")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn invalid_config_file_exits_one() {
    let file = config_file("unknown_key = true\n");
    glug()
        .arg(format!("--config={}", file.path().display()))
        .write_stdin("")
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("glug:"));
}
