use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

/// Helper to get the path to test fixtures
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

/// Helper to create a Command for the datalint binary
#[allow(deprecated)]
fn datalint() -> Command {
    Command::cargo_bin("datalint").expect("Failed to find datalint binary")
}

// ============================================================================
// check command tests
// ============================================================================

#[test]
fn test_check_valid_metadata() {
    datalint()
        .arg("check")
        .arg(fixture_path("people_metadata.yaml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("people"))
        .stdout(predicate::str::contains("Columns:     3"))
        .stdout(predicate::str::contains("age [bounds]"))
        .stdout(predicate::str::contains("id [nullable]"));
}

#[test]
fn test_check_bad_pattern_metadata() {
    datalint()
        .arg("check")
        .arg(fixture_path("bad_pattern_metadata.yaml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("pattern"));
}

#[test]
fn test_check_missing_file() {
    datalint()
        .arg("check")
        .arg("nonexistent.yaml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

// ============================================================================
// validate command tests
// ============================================================================

#[test]
fn test_validate_passing_table() {
    datalint()
        .arg("validate")
        .arg(fixture_path("people_metadata.yaml"))
        .arg(fixture_path("people_ok.csv"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Validation PASSED"));
}

#[test]
fn test_validate_failing_table_exits_nonzero() {
    datalint()
        .arg("validate")
        .arg(fixture_path("people_metadata.yaml"))
        .arg(fixture_path("people_bad.csv"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("Validation FAILED"))
        .stdout(predicate::str::contains("age"))
        .stdout(predicate::str::contains("status"));
}

#[test]
fn test_validate_json_output() {
    datalint()
        .arg("validate")
        .arg(fixture_path("people_metadata.yaml"))
        .arg(fixture_path("people_bad.csv"))
        .arg("--format")
        .arg("json")
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"valid\": false"))
        .stdout(predicate::str::contains("\"rule_name\": \"bounds\""))
        .stdout(predicate::str::contains("\"unexpected_row_indices\""));
}

#[test]
fn test_validate_missing_column_is_fatal_by_default() {
    let mut data = tempfile::NamedTempFile::with_suffix(".csv").unwrap();
    writeln!(data, "id,age").unwrap();
    writeln!(data, "1,25").unwrap();
    data.flush().unwrap();

    datalint()
        .arg("validate")
        .arg(fixture_path("people_metadata.yaml"))
        .arg(data.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("status"));
}

#[test]
fn test_validate_ignore_missing_columns() {
    let mut data = tempfile::NamedTempFile::with_suffix(".csv").unwrap();
    writeln!(data, "id,age").unwrap();
    writeln!(data, "1,25").unwrap();
    data.flush().unwrap();

    datalint()
        .arg("validate")
        .arg(fixture_path("people_metadata.yaml"))
        .arg(data.path())
        .arg("--ignore-missing-columns")
        .assert()
        .success()
        .stdout(predicate::str::contains("Validation PASSED"));
}
