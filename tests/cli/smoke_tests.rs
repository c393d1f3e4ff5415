use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn robotict() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_robotict"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn shows_help() {
    robotict()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("robotict").and(predicate::str::contains("--probe")));
}

#[test]
fn default_run_prints_probe_and_statistics() {
    robotict()
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Probe 15: RobotICT")
                .and(predicate::str::contains("       27     Robot\n"))
                .and(predicate::str::contains("      100     TOTAL\n"))
                .and(predicate::str::contains("[robotict] 100 numbers classified.")),
        );
}

#[test]
fn csv_format_writes_the_document_to_stdout() {
    robotict()
        .args(["--max", "15", "--format", "csv"])
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with("RobotICT Validator - Range 1-15\n")
                .and(predicate::str::ends_with("15,Yes,Yes,Yes,RobotICT\n")),
        );
}

#[test]
fn inverted_range_fails_with_message_on_stderr() {
    robotict()
        .args(["--min", "5", "--max", "1"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Minimum value cannot be greater than maximum value"));
}

#[test]
fn zero_divisor_fails() {
    robotict()
        .args(["--second", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid second divisor 0"));
}

#[test]
fn oversized_range_is_refused() {
    robotict()
        .args(["--max", "500", "--max-len", "100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn probe_outside_range_asks_for_a_number_in_range() {
    robotict()
        .args(["--min", "10", "--max", "20", "--probe", "-3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Probe -3: enter a number in range 10 to 20"));
}

#[test]
fn save_writes_the_named_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    robotict()
        .args(["--save", "text", "--out-dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("robotict_numbers_1-100.txt"));

    let text = fs::read_to_string(dir.path().join("robotict_numbers_1-100.txt")).expect("saved file");
    assert!(text.starts_with("RobotICT Validator - Range 1-100\nDivisors: 3 and 5\n"));
}

#[test]
fn settings_file_supplies_defaults_and_flags_win() {
    let dir = tempfile::tempdir().expect("tempdir");
    let settings = dir.path().join("robotict.json");
    fs::write(&settings, r#"{ "min": 1, "max": 6, "first": 2, "second": 3 }"#).expect("write settings");

    robotict()
        .arg("--config")
        .arg(&settings)
        .args(["--format", "json", "--second", "4"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"first\": 2")
                .and(predicate::str::contains("\"second\": 4"))
                .and(predicate::str::contains("\"max\": 6")),
        );
}

#[test]
fn output_flag_redirects_the_document() {
    let dir = tempfile::tempdir().expect("tempdir");
    let target = dir.path().join("numbers.csv");
    robotict()
        .args(["--max", "3", "--format", "csv", "--output"])
        .arg(&target)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let csv = fs::read_to_string(&target).expect("csv written");
    assert!(csv.ends_with("3,Yes,No,No,Robot"), "{csv}");
}
