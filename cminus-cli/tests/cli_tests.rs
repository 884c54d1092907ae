//! CLI Interface Tests
//!
//! These tests run the `cminus` binary against the fixtures directory and
//! check its output and exit status.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get the path to the fixtures directory
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn fixture(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// A `cminus` command that cannot see any user configuration.
fn cminus(home: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_cminus"));
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("CMINUS_CONFIG")
        .env_remove("CMINUS_VERBOSE")
        .env_remove("CMINUS_NO_COLOR")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_help() {
    let home = TempDir::new().expect("Failed to create temp directory");
    cminus(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage").and(predicate::str::contains("lex")));
}

#[test]
fn test_cli_version() {
    let home = TempDir::new().expect("Failed to create temp directory");
    cminus(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_lex_valid_file_table() {
    let home = TempDir::new().expect("Failed to create temp directory");
    cminus(&home)
        .arg("lex")
        .arg(fixture("valid.cm"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("TOKEN KIND"))
        .stdout(predicate::str::contains(format!("{:<25} | gcd", "IDENTIFIER")))
        .stdout(predicate::str::contains(format!("{:<25} | ,", "SYM_COMMA")))
        .stdout(predicate::str::contains("Euclid").not());
}

#[test]
fn test_lex_reads_stdin() {
    let home = TempDir::new().expect("Failed to create temp directory");
    cminus(&home)
        .args(["lex", "--format", "plain"])
        .write_stdin("while (x != 0) x = x - 1;")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("KW_WHILE while\nSYM_LPAREN (\n"))
        .stdout(predicate::str::contains("OP_NOT_EQUAL !="))
        .stdout(predicate::str::ends_with("EOF EOF\n"));
}

#[test]
fn test_lex_no_eof() {
    let home = TempDir::new().expect("Failed to create temp directory");
    cminus(&home)
        .args(["lex", "-f", "plain", "--no-eof"])
        .write_stdin("x")
        .assert()
        .success()
        .stdout("IDENTIFIER x\n");
}

#[test]
fn test_lex_error_exits_with_one() {
    let home = TempDir::new().expect("Failed to create temp directory");
    cminus(&home)
        .args(["lex", "-f", "plain"])
        .arg(fixture("bad_char.cm"))
        .assert()
        .code(1)
        .stdout(predicate::str::ends_with("ERROR %\n"))
        .stderr(predicate::str::contains(
            "bad_char.cm:2:7: unexpected character '%' at byte 13",
        ));
}

#[test]
fn test_lex_json() {
    let home = TempDir::new().expect("Failed to create temp directory");
    let output = cminus(&home)
        .args(["lex", "--format", "json"])
        .arg(fixture("unterminated.cm"))
        .output()
        .expect("Failed to run cminus");
    assert_eq!(output.status.code(), Some(1));

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is not JSON");
    let report = &value[0];
    assert_eq!(report["tokens"][0]["kind"], "KW_INT");
    assert_eq!(report["tokens"][3]["kind"], "ERROR");
    assert_eq!(report["error"]["line"], 2);
    assert_eq!(report["error"]["column"], 1);
}

#[test]
fn test_lex_missing_file_exits_with_two() {
    let home = TempDir::new().expect("Failed to create temp directory");
    cminus(&home)
        .args(["lex", "does-not-exist.cm"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to read does-not-exist.cm"));
}

#[test]
fn test_check_reports_each_file() {
    let home = TempDir::new().expect("Failed to create temp directory");
    cminus(&home)
        .arg("check")
        .arg(fixture("valid.cm"))
        .arg(fixture("bad_char.cm"))
        .arg(fixture("unterminated.cm"))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("valid.cm: ok ("))
        .stdout(predicate::str::contains("bad_char.cm:2:7: unexpected character '%'"))
        .stdout(predicate::str::contains(
            "unterminated.cm:2:1: unterminated block comment starting at byte 7",
        ));
}

#[test]
fn test_check_clean_quiet() {
    let home = TempDir::new().expect("Failed to create temp directory");
    cminus(&home)
        .args(["check", "--quiet"])
        .arg(fixture("valid.cm"))
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_demo() {
    let home = TempDir::new().expect("Failed to create temp directory");
    cminus(&home)
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("--- C- Scanner ---"))
        .stdout(predicate::str::contains(format!("{:<25} | >=", "OP_GREATER_EQUAL")))
        .stdout(predicate::str::contains(format!("{:<25} | EOF", "EOF")));
}

#[test]
fn test_config_file_sets_defaults() {
    let home = TempDir::new().expect("Failed to create temp directory");
    cminus(&home)
        .arg("--config")
        .arg(fixture("plain.toml"))
        .arg("lex")
        .write_stdin("x;")
        .assert()
        .success()
        .stdout("IDENTIFIER x\nSYM_SEMICOLON ;\n");
}

#[test]
fn test_config_in_current_directory_is_found() {
    let home = TempDir::new().expect("Failed to create temp directory");
    std::fs::write(home.path().join("cminus.toml"), "[lex]\nformat = \"json\"\n")
        .expect("Failed to write config");
    cminus(&home)
        .arg("lex")
        .write_stdin("x")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("["));
}

#[test]
fn test_missing_config_file_exits_with_two() {
    let home = TempDir::new().expect("Failed to create temp directory");
    cminus(&home)
        .args(["--config", "nope.toml", "demo"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("could not load configuration"));
}

#[test]
fn test_config_write_then_use() {
    let home = TempDir::new().expect("Failed to create temp directory");
    let path = home.path().join("out").join("cminus.toml");
    cminus(&home)
        .args(["config", "--output"])
        .arg(&path)
        .assert()
        .success();
    assert!(path.exists());

    cminus(&home)
        .args(["config", "--output"])
        .arg(&path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--force"));
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let home = TempDir::new().expect("Failed to create temp directory");
    cminus(&home)
        .args(["--verbose", "--no-color", "lex", "-f", "plain", "--no-eof"])
        .write_stdin("x")
        .assert()
        .success()
        .stdout("IDENTIFIER x\n")
        .stderr(predicate::str::contains("lexed source"));
}
