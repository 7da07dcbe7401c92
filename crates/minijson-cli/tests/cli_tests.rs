//! Integration tests for the `minijson` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise the check, fmt,
//! and stats subcommands through the actual binary, including stdin/stdout
//! piping, file I/O, parse limits, and error reporting.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

fn sample_json_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/sample.json")
}

fn deep_json_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/deep.json")
}

fn minijson() -> Command {
    Command::cargo_bin("minijson").unwrap()
}

/// Helper: a per-test path under the system temp directory.
fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("minijson-cli-{}-{name}", std::process::id()))
}

// ─────────────────────────────────────────────────────────────────────────────
// check
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn check_stdin_object() {
    minijson()
        .arg("check")
        .write_stdin(r#"{"name":"Alice","age":30}"#)
        .assert()
        .success()
        .stdout("ok: object\n");
}

#[test]
fn check_file() {
    minijson()
        .args(["check", "-i", sample_json_path()])
        .assert()
        .success()
        .stdout(predicate::str::contains("ok: object"));
}

#[test]
fn check_scalar_kinds() {
    for (input, kind) in [
        ("null", "null"),
        ("true", "bool"),
        ("-1.5", "number"),
        ("[]", "array"),
    ] {
        minijson()
            .arg("check")
            .write_stdin(input)
            .assert()
            .success()
            .stdout(format!("ok: {kind}\n"));
    }
}

#[test]
fn check_invalid_input_fails() {
    minijson()
        .arg("check")
        .write_stdin("[1, 2")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse <stdin>"))
        .stderr(predicate::str::contains("end of json"));
}

#[test]
fn check_reports_error_position() {
    minijson()
        .arg("check")
        .write_stdin("[1,?]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("parse error at byte 3"));
}

#[test]
fn check_max_depth_flag() {
    minijson()
        .args(["check", "--max-depth", "6", "-i", deep_json_path()])
        .assert()
        .success();

    minijson()
        .args(["check", "--max-depth", "5", "-i", deep_json_path()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeded max depth"));
}

#[test]
fn check_max_depth_above_limit_is_rejected() {
    minijson()
        .args(["check", "--max-depth", "100000000"])
        .write_stdin("[]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be at most 200"));
}

#[test]
fn check_strict_rejects_trailing_text() {
    minijson()
        .arg("check")
        .write_stdin("1 2")
        .assert()
        .success();

    minijson()
        .args(["check", "--strict"])
        .write_stdin("1 2")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected trailing character"));
}

#[test]
fn check_missing_file_fails() {
    minijson()
        .args(["check", "-i", "/nonexistent/path/input.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

// ─────────────────────────────────────────────────────────────────────────────
// fmt
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn fmt_compacts_whitespace() {
    minijson()
        .arg("fmt")
        .write_stdin("[ 1 , 2.5 , \"a\" , null ]")
        .assert()
        .success()
        .stdout("[1,2.5,\"a\",null]\n");
}

#[test]
fn fmt_pretty() {
    minijson()
        .args(["fmt", "--pretty"])
        .write_stdin(r#"{"a":[1,2]}"#)
        .assert()
        .success()
        .stdout("{\n  \"a\": [\n    1,\n    2\n  ]\n}\n");
}

#[test]
fn fmt_file_to_file() {
    let output_path = temp_path("fmt-output.json");
    let _ = std::fs::remove_file(&output_path);

    minijson()
        .args(["fmt", "-i", sample_json_path(), "-o"])
        .arg(&output_path)
        .assert()
        .success()
        .stdout("");

    let content = std::fs::read_to_string(&output_path).expect("output file must exist");
    assert!(content.contains(r#""name":"Alice""#));
    assert!(content.contains(r#""tags":["admin","ops"]"#));
    assert!(!content.trim_end().contains('\n'), "compact output is one line");

    let _ = std::fs::remove_file(&output_path);
}

#[test]
fn fmt_output_is_accepted_by_check() {
    let output = minijson()
        .args(["fmt", "-i", sample_json_path()])
        .output()
        .unwrap();
    assert!(output.status.success());

    minijson()
        .args(["check", "--strict"])
        .write_stdin(output.stdout)
        .assert()
        .success()
        .stdout("ok: object\n");
}

#[test]
fn fmt_invalid_input_fails() {
    minijson()
        .arg("fmt")
        .write_stdin("{\"a\" 1}")
        .assert()
        .failure()
        .stderr(predicate::str::contains("expect ':'"));
}

// ─────────────────────────────────────────────────────────────────────────────
// stats
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn stats_sample() {
    minijson()
        .args(["stats", "-i", sample_json_path()])
        .assert()
        .success()
        .stdout(predicate::str::contains("nodes:      12"))
        .stdout(predicate::str::contains("max depth:  2"))
        .stdout(predicate::str::contains("string:     5"))
        .stdout(predicate::str::contains("object:     2"));
}

#[test]
fn stats_scalar() {
    minijson()
        .arg("stats")
        .write_stdin("42")
        .assert()
        .success()
        .stdout(predicate::str::contains("nodes:      1"))
        .stdout(predicate::str::contains("max depth:  0"))
        .stdout(predicate::str::contains("number:     1"));
}

// ─────────────────────────────────────────────────────────────────────────────
// General
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn no_subcommand_shows_help() {
    minijson()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn version_flag() {
    minijson()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("minijson"));
}
