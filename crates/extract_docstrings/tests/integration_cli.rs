// crates/extract_docstrings/tests/integration_cli.rs

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn extract_cmd() -> Command {
    let mut cmd = Command::cargo_bin("extract_docstrings").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_extracts_single_docstring() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("sample.py");
    let output = temp_dir.path().join("docs.md");
    fs::write(&input, "x = 1\n\"\"\"\nHello\nWorld\n\"\"\"\ny = 2\n").unwrap();

    extract_cmd()
        .arg("--file-path")
        .arg(&input)
        .arg("--output-file")
        .arg(&output)
        .assert()
        .success()
        .stderr(predicate::str::contains("Extracted 1 docstrings"))
        .stderr(predicate::str::contains("Docstrings successfully saved to"));

    let markdown = fs::read_to_string(&output).unwrap();
    assert_eq!(
        markdown,
        "## Docstring 1\n\n```\n\"\"\"\nHello\nWorld\n\"\"\"\n```\n\n"
    );
}

#[test]
fn test_no_markers_yields_empty_document() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("plain.py");
    let output = temp_dir.path().join("docs.md");
    fs::write(&input, "import sys\nprint(sys.argv)\n").unwrap();

    extract_cmd()
        .arg("--file-path")
        .arg(&input)
        .arg("--output-file")
        .arg(&output)
        .assert()
        .success()
        .stderr(predicate::str::contains("Extracted 0 docstrings"));

    let markdown = fs::read_to_string(&output).unwrap();
    assert!(!markdown.contains("## Docstring"));
}

#[test]
fn test_rerun_produces_identical_output() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("sample.py");
    let output = temp_dir.path().join("docs.md");
    fs::write(&input, "'''\nfirst\n'''\n\"\"\"\nsecond\n\"\"\"\n\"\"\"\nunterminated\n").unwrap();

    extract_cmd()
        .arg("--file-path")
        .arg(&input)
        .arg("--output-file")
        .arg(&output)
        .assert()
        .success();
    let first = fs::read(&output).unwrap();

    extract_cmd()
        .arg("--file-path")
        .arg(&input)
        .arg("--output-file")
        .arg(&output)
        .assert()
        .success();
    let second = fs::read(&output).unwrap();

    assert_eq!(first, second);
    let markdown = String::from_utf8(second).unwrap();
    assert_eq!(markdown.matches("## Docstring").count(), 2);
    assert!(!markdown.contains("unterminated"));
}

#[test]
fn test_missing_input_exits_with_error() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("missing.py");
    let output = temp_dir.path().join("docs.md");

    extract_cmd()
        .arg("--file-path")
        .arg(&input)
        .arg("--output-file")
        .arg(&output)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("The specified file does not exist"));

    assert!(!output.exists());
}

#[test]
fn test_unwritable_output_exits_with_error() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("sample.py");
    fs::write(&input, "\"\"\"\ndoc\n\"\"\"\n").unwrap();
    let output = temp_dir.path().join("missing_dir").join("docs.md");

    extract_cmd()
        .arg("--file-path")
        .arg(&input)
        .arg("--output-file")
        .arg(&output)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("An error occurred while saving docstrings"));
}

#[test]
fn test_verbose_enables_debug_output() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("sample.py");
    let output = temp_dir.path().join("docs.md");
    fs::write(&input, "\"\"\"\ndoc\n\"\"\"\n").unwrap();

    extract_cmd()
        .arg("--file-path")
        .arg(&input)
        .arg("--output-file")
        .arg(&output)
        .arg("--verbose")
        .assert()
        .success()
        .stderr(predicate::str::contains("Docstring 1 spans lines 1-3"));

    extract_cmd()
        .arg("--file-path")
        .arg(&input)
        .arg("--output-file")
        .arg(&output)
        .assert()
        .success()
        .stderr(predicate::str::contains("spans lines").not());
}

#[test]
fn test_version_flag_prints_version() {
    extract_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("1.0"));
}

#[test]
fn test_missing_required_arguments_fail() {
    extract_cmd()
        .arg("--file-path")
        .arg("whatever.py")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--output-file"));
}
