//! CLI smoke tests for the `faxc` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn prints_the_parsed_module_for_a_valid_source_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("main.ao");
    std::fs::write(&path, "let x: i32 = 1 + 2\n").unwrap();

    let mut cmd = Command::cargo_bin("faxc").unwrap();
    cmd.arg(&path);

    cmd.assert().success().stdout(predicate::str::contains("ModuleDefinition"));
}

#[test]
fn rejects_a_non_ao_input_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("main.rs");
    std::fs::write(&path, "let x = 1\n").unwrap();

    let mut cmd = Command::cargo_bin("faxc").unwrap();
    cmd.arg(&path);

    cmd.assert().failure().stderr(predicate::str::contains(".ao"));
}
