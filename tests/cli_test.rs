//! Integration tests for the marklint binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn setup_project(config: Option<&str>, files: &[(&str, &str)]) -> TempDir {
    let temp = TempDir::new().unwrap();
    if let Some(config) = config {
        fs::write(temp.path().join(".marklint.yml"), config).unwrap();
    }
    for (name, contents) in files {
        fs::write(temp.path().join(name), contents).unwrap();
    }
    temp
}

fn marklint(temp: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("marklint"));
    cmd.current_dir(temp.path());
    cmd.env_remove("MARKLINT_CONFIG");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("marklint"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("fixtures"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("marklint"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn check_clean_file_succeeds() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(None, &[("README.md", "# Mercury\n\n## Venus\n")]);
    marklint(&temp)
        .args(["check", "README.md"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    Ok(())
}

#[test]
fn check_reports_warnings_without_failing() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(None, &[("README.md", "# Mercury.\n")]);
    let output = marklint(&temp)
        .args(["check", "README.md"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    insta::assert_snapshot!(String::from_utf8(output)?, @r"
    README.md:1:1-1:11: Don’t add a trailing `.` to headings  warning  no-heading-punctuation
    Found 0 error(s) and 1 warning(s)
    ");
    Ok(())
}

#[test]
fn check_fails_on_fatal_messages() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(
        Some("rules:\n  final-newline: [2]\n"),
        &[("README.md", ".")],
    );
    marklint(&temp)
        .args(["check", "README.md"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "README.md:1:1: Missing newline character at end of file  error  final-newline",
        ));
    Ok(())
}

#[test]
fn check_honors_ignore_directives() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(
        Some("rules:\n  no-heading-punctuation: 2\n"),
        &[("README.md", "# Mercury\n\n<!--lint ignore-->\n## Venus.\n")],
    );
    marklint(&temp)
        .args(["check", "README.md"])
        .assert()
        .success();
    Ok(())
}

#[test]
fn check_explicit_config_flag() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(
        None,
        &[
            ("README.md", "Text"),
            ("strict.yml", "rules:\n  final-newline: error\n"),
        ],
    );
    marklint(&temp)
        .args(["check", "README.md", "--config", "strict.yml"])
        .assert()
        .code(1);
    Ok(())
}

#[test]
fn check_invalid_severity_exits_with_config_code() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(
        Some("rules:\n  final-newline: [-1]\n"),
        &[("README.md", "Text\n")],
    );
    marklint(&temp)
        .args(["check", "README.md"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "Invalid severity `-1` for `final-newline`, expected 0, 1, or 2",
        ));
    Ok(())
}

#[test]
fn check_json_format() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(None, &[("README.md", "## Mercury\n")]);
    let output = marklint(&temp)
        .args(["check", "README.md", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output)?;
    assert_eq!(parsed["messages"][0]["rule_id"], "first-heading-level");
    assert_eq!(parsed["messages"][0]["file"], "README.md");
    assert_eq!(parsed["summary"]["total"], 1);
    Ok(())
}

#[test]
fn fixtures_command_passes() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    marklint(&temp)
        .arg("fixtures")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 failed"))
        .stdout(predicate::str::contains("no-tabs: "));
    Ok(())
}

#[test]
fn check_continues_past_unreadable_files() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(None, &[("README.md", "# Mercury.\n")]);
    marklint(&temp)
        .args(["check", "missing.md", "README.md"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("missing.md: "))
        .stdout(predicate::str::contains(
            "README.md:1:1-1:11: Don’t add a trailing `.` to headings",
        ));
    Ok(())
}
