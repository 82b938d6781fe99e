use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

mod common;

#[test]
fn test_cli_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let output = Command::new(cargo_bin!("funds-check"))
        .arg("tests/fixtures/calls.jsonl")
        .output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![common::SUFFICIENT, common::INSUFFICIENT, common::INSUFFICIENT]
    );

    Ok(())
}

#[test]
fn test_cli_reads_stdin() {
    let input = format!("{}\n", common::funds_call("999.99".into()));

    let mut cmd = assert_cmd::Command::new(cargo_bin!("funds-check"));
    cmd.write_stdin(input);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(common::SUFFICIENT));
}

#[test]
fn test_cli_list_actions() {
    let mut cmd = Command::new(cargo_bin!("funds-check"));
    cmd.arg("--list-actions");

    cmd.assert()
        .success()
        .stdout(predicate::eq("[\"action_check_sufficient_funds\"]\n"));
}

#[test]
fn test_cli_missing_input_file() {
    let mut cmd = Command::new(cargo_bin!("funds-check"));
    cmd.arg("tests/fixtures/does_not_exist.jsonl");

    cmd.assert().failure();
}
