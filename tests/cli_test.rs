//! Integration tests for the command-line front-end.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const RESULTS: &str = r#"[
  {
    "source": "/project/src/app.css",
    "warnings": [
      {"line": 44, "column": 22, "rule": "color-named", "severity": "warning", "text": "Unexpected named color \"red\" (color-named)"},
      {"line": 3, "column": 12, "rule": "block-no-empty", "severity": "error", "text": "Unexpected empty block (block-no-empty)"}
    ],
    "deprecations": [{"text": "The \"foo\" rule is deprecated."}],
    "invalidOptionWarnings": [{"text": "Invalid option \"bar\" for rule \"baz\""}]
  },
  {
    "source": "/project/src/clean.css",
    "warnings": [],
    "deprecations": [{"text": "The \"foo\" rule is deprecated."}],
    "invalidOptionWarnings": []
  }
]"#;

fn write_results(contents: &str) -> (TempDir, std::path::PathBuf) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("results.json");
    fs::write(&path, contents).unwrap();
    (temp, path)
}

fn command() -> Command {
    let mut cmd = Command::new(cargo_bin("stylelint-pretty"));
    cmd.env_remove("NO_COLOR")
        .env_remove("FORCE_COLOR")
        .args(["--no-color", "--no-tty", "--cwd", "/project"]);
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("stylelint-pretty"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("stylelint"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("stylelint-pretty"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_formats_results_file() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, path) = write_results(RESULTS);
    let mut cmd = command();
    cmd.arg(&path);
    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with(
            "\nInvalid option: Invalid option \"bar\" for rule \"baz\".\n",
        ))
        .stdout(predicate::str::contains("Deprecated rule: The \"foo\" rule is deprecated.\n"))
        .stdout(predicate::str::contains("\n src/app.css\n src/app.css:3:12 "))
        .stdout(predicate::str::contains("src/clean.css").not())
        .stdout(predicate::str::ends_with(
            "Summary:\n ✖ 1 error\n ⚠ 1 warning\n ℹ 1 invalid option\n ℹ 1 deprecation\n\n",
        ));
    Ok(())
}

#[test]
fn cli_reads_stdin() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = command();
    cmd.write_stdin(RESULTS);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("src/app.css:44:22"));
    Ok(())
}

#[test]
fn cli_clean_results_print_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = command();
    cmd.write_stdin(r#"[{"source": "/project/a.css", "warnings": []}]"#);
    cmd.assert().success().stdout(predicate::str::is_empty());
    Ok(())
}

#[test]
fn cli_fail_on_error_exits_two() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = command();
    cmd.arg("--fail-on-error").write_stdin(RESULTS);
    cmd.assert().code(2).stdout(predicate::str::contains("1 error"));
    Ok(())
}

#[test]
fn cli_missing_file_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = command();
    cmd.arg("/definitely/not/here.json");
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("Results file not found"));
    Ok(())
}

#[test]
fn cli_malformed_input_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = command();
    cmd.write_stdin("{not json");
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse results from <stdin>"));
    Ok(())
}
