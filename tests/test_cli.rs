//! End-to-end tests for the squared binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("squared").unwrap();
    cmd.env_clear();
    cmd
}

#[test]
fn test_plain_output() {
    cmd()
        .args(["5", "-1.5"])
        .assert()
        .success()
        .stdout("5^2 = 25\n-1.5^2 = 2.25\n");
}

#[test]
fn test_json_output() {
    cmd()
        .args(["--json", "5"])
        .assert()
        .success()
        .stdout("{\"input\":5.0,\"output\":25.0}\n");
}

#[test]
fn test_json_from_env() {
    cmd()
        .env("SQUARED_OUTPUT", "json")
        .arg("3")
        .assert()
        .success()
        .stdout("{\"input\":3.0,\"output\":9.0}\n");
}

#[test]
fn test_plain_flag_overrides_env() {
    cmd()
        .env("SQUARED_OUTPUT", "json")
        .args(["--plain", "3"])
        .assert()
        .success()
        .stdout("3^2 = 9\n");
}

#[test]
fn test_json_keeps_non_finite_values() {
    cmd()
        .args(["--json", "NaN", "inf"])
        .assert()
        .success()
        .stdout(
            "{\"input\":\"NaN\",\"output\":\"NaN\"}\n{\"input\":\"inf\",\"output\":\"inf\"}\n",
        );

    cmd()
        .args(["--json", "--", "-inf"])
        .assert()
        .success()
        .stdout("{\"input\":\"-inf\",\"output\":\"inf\"}\n");
}

#[test]
fn test_invalid_operand_fails() {
    cmd()
        .arg("five")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Invalid operand \"five\""));
}

#[test]
fn test_strict_rejects_infinity() {
    cmd().arg("inf").assert().success().stdout("inf^2 = inf\n");

    cmd()
        .args(["--strict", "inf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Non-finite operand rejected"));
}

#[test]
fn test_no_strict_overrides_env() {
    cmd()
        .env("SQUARED_STRICT", "1")
        .arg("inf")
        .assert()
        .failure();

    cmd()
        .env("SQUARED_STRICT", "1")
        .args(["--no-strict", "inf"])
        .assert()
        .success()
        .stdout("inf^2 = inf\n");
}

#[test]
fn test_last_strict_flag_wins() {
    cmd()
        .args(["--no-strict", "--strict", "inf"])
        .assert()
        .failure();

    cmd()
        .args(["--strict", "--no-strict", "inf"])
        .assert()
        .success();
}

#[test]
fn test_invalid_env_config_fails() {
    cmd()
        .env("SQUARED_OUTPUT", "xml")
        .arg("5")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn test_missing_values_is_usage_error() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
