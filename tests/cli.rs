#![cfg(feature = "cli")]

use assert_cmd::Command;
use predicates::str::contains;

// Tuesday, Jan 2, 2024 12:30 UTC
const TEST_TIME: &str = "2024-01-02T12:30:00Z";
// Sunday, Jan 7, 2024 12:30 UTC
const SUNDAY_TEST_TIME: &str = "2024-01-07T12:30:00Z";

fn cronrange() -> Command {
    Command::cargo_bin("cronrange").unwrap()
}

#[test]
fn no_arguments_is_a_usage_error() {
    cronrange().assert().code(2).stderr(contains("Usage"));
}

#[test]
fn invalid_expression_exits_2() {
    cronrange()
        .arg("invalid")
        .env("CRONRANGE_TEST_TIME", TEST_TIME)
        .assert()
        .code(2)
        .stderr(contains("Error parsing cronrange"));
}

#[test]
fn invalid_test_time_exits_2() {
    cronrange()
        .arg("* * * *")
        .env("CRONRANGE_TEST_TIME", "not-a-time")
        .assert()
        .code(2)
        .stderr(contains("Error parsing test time"));
}

#[test]
fn matching_range_without_command_exits_0() {
    cronrange()
        .arg("* * * *")
        .env("CRONRANGE_TEST_TIME", TEST_TIME)
        .assert()
        .success();
}

#[test]
fn outside_time_range_exits_1() {
    cronrange()
        .arg("00:00-00:01 * * *")
        .env("CRONRANGE_TEST_TIME", TEST_TIME)
        .assert()
        .code(1);
}

#[test]
fn outside_day_range_exits_1() {
    cronrange()
        .arg("* 1-5 * *")
        .env("CRONRANGE_TEST_TIME", SUNDAY_TEST_TIME)
        .assert()
        .code(1);
}

#[test]
fn matching_specific_time_and_weekday() {
    cronrange()
        .arg("12:00-13:00 * * *")
        .env("CRONRANGE_TEST_TIME", TEST_TIME)
        .assert()
        .success();

    cronrange()
        .arg("* 1-5 * *")
        .env("CRONRANGE_TEST_TIME", TEST_TIME)
        .assert()
        .success();
}

#[test]
fn runs_command_and_passes_output_through() {
    cronrange()
        .args(["* * * *", "echo", "test output"])
        .env("CRONRANGE_TEST_TIME", TEST_TIME)
        .assert()
        .success()
        .stdout(contains("test output"));
}

#[test]
fn command_is_skipped_when_range_does_not_match() {
    cronrange()
        .args(["00:00-00:01 * * *", "echo", "should not run"])
        .env("CRONRANGE_TEST_TIME", TEST_TIME)
        .assert()
        .code(1)
        .stdout(predicates::str::is_empty());
}

#[test]
fn propagates_command_exit_code() {
    cronrange()
        .args(["* * * *", "sh", "-c", "exit 42"])
        .env("CRONRANGE_TEST_TIME", TEST_TIME)
        .assert()
        .code(42);
}

#[test]
fn missing_command_exits_1() {
    cronrange()
        .args(["* * * *", "nonexistent-command-for-sure"])
        .env("CRONRANGE_TEST_TIME", TEST_TIME)
        .assert()
        .code(1)
        .stderr(contains("Error executing command"));
}
