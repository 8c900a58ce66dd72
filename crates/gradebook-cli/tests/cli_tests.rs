//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn gradebook() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("gradebook").unwrap();
    cmd.env_remove("GRADEBOOK_FORMAT");
    cmd
}

#[test]
fn evaluate_all_fives() {
    gradebook()
        .args(["evaluate", "5", "5", "5", "5", "5", "5", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Final Grade: 5.00 - PASSED"));
}

#[test]
fn evaluate_failing_grade() {
    gradebook()
        .args(["evaluate", "3", "3.5", "2", "4", "3", "3", "2.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Final Grade: 2.78 - FAILED"));
}

#[test]
fn evaluate_empty_entry_exits_with_2() {
    gradebook()
        .args(["evaluate", "", "5", "5", "5", "5", "5", "5"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "please enter the grade for Evaluation 1",
        ));
}

#[test]
fn evaluate_reports_first_failure_only() {
    gradebook()
        .args(["evaluate", "5", "5", "abc", "5", "5", "9", "5"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid format for Evaluation 3"))
        .stderr(predicate::str::contains("Evaluation 6").not());
}

#[test]
fn evaluate_negative_score_is_out_of_range() {
    gradebook()
        .args(["evaluate", "5", "5", "5", "5", "5", "5", "-1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "the grade must be between 0.0 and 7.0 for Final Exam",
        ));
}

#[test]
fn evaluate_wrong_count() {
    gradebook()
        .args(["evaluate", "5", "5", "5"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("expected 7 scores, got 3"));
}

#[test]
fn evaluate_json_output() {
    gradebook()
        .args(["evaluate", "7", "7", "7", "7", "7", "7", "0", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"final_grade\": 4.9"))
        .stdout(predicate::str::contains("\"verdict\": \"PASSED\""));
}

#[test]
fn evaluate_json_failure() {
    gradebook()
        .args(["evaluate", "8", "5", "5", "5", "5", "5", "5", "--format", "json"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("\"reason\": \"OUT_OF_RANGE\""))
        .stdout(predicate::str::contains("\"slot_index\": 0"));
}

#[test]
fn evaluate_breakdown() {
    gradebook()
        .args(["evaluate", "5", "5", "5", "5", "5", "5", "5", "--breakdown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contribution"))
        .stdout(predicate::str::contains("Evaluation 3 (21%)"))
        .stdout(predicate::str::contains("Final Exam (30%)"))
        .stdout(predicate::str::contains("1.500"));
}

#[test]
fn breakdown_from_config_file() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("gradebook.toml");
    std::fs::write(&config, "breakdown = true\n").unwrap();

    gradebook()
        .arg("--config")
        .arg(&config)
        .args(["evaluate", "5", "5", "5", "5", "5", "5", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contribution"));
}

#[test]
fn missing_config_file_fails_commands_that_read_it() {
    gradebook()
        .args(["--config", "no_such_config.toml", "slots"])
        .assert()
        .success();

    gradebook()
        .args(["--config", "no_such_config.toml", "evaluate"])
        .args(["5", "5", "5", "5", "5", "5", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn env_format_override() {
    gradebook()
        .env("GRADEBOOK_FORMAT", "json")
        .args(["evaluate", "5", "5", "5", "5", "5", "5", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"verdict\": \"PASSED\""));
}

#[test]
fn rust_log_enables_debug_events() {
    gradebook()
        .env("RUST_LOG", "gradebook=debug")
        .args(["evaluate", "5", "5", "5", "5", "5", "5", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Final Grade: 5.00 - PASSED"))
        .stderr(predicate::str::contains("evaluated grades"));
}

#[test]
fn default_log_level_hides_debug_events() {
    gradebook()
        .env_remove("RUST_LOG")
        .args(["evaluate", "5", "5", "5", "5", "5", "5", "5"])
        .assert()
        .success()
        .stderr(predicate::str::contains("evaluated grades").not());
}

#[test]
fn evaluate_negative_zero_prints_plain_zero() {
    gradebook()
        .args(["evaluate", "-0", "-0", "-0", "-0", "-0", "-0", "-0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Final Grade: 0.00 - FAILED"))
        .stdout(predicate::str::contains("-0.00").not());
}

#[test]
fn sheet_sample() {
    gradebook()
        .arg("sheet")
        .arg("--path")
        .arg("../../sheets/course-2024.toml")
        .assert()
        .success()
        .stdout(predicate::str::contains("Programming 101 (4 students)"))
        .stdout(predicate::str::contains("[Tom] WARNING: expected 7 scores, found 5"))
        .stdout(predicate::str::contains("5.30"))
        .stdout(predicate::str::contains("please enter the grade for Evaluation 2"))
        .stdout(predicate::str::contains("Passed: 1  Failed: 1  Invalid: 2"));
}

#[test]
fn sheet_directory_json() {
    gradebook()
        .args(["sheet", "--path", "../../sheets", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"sheet\": \"Programming 101\""))
        .stdout(predicate::str::contains("\"status\": \"malformed\""))
        .stdout(predicate::str::contains("\"passed\": 1"));
}

#[test]
fn sheet_nonexistent_file() {
    gradebook()
        .args(["sheet", "--path", "nonexistent.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn slots_table() {
    gradebook()
        .arg("slots")
        .assert()
        .success()
        .stdout(predicate::str::contains("Evaluation 3"))
        .stdout(predicate::str::contains("21%"))
        .stdout(predicate::str::contains("Final Exam"));
}

#[test]
fn todo_session() {
    gradebook()
        .arg("todo")
        .write_stdin("add buy milk\nadd write report\ntoggle 1\nlist completed\nremove 2\nlist\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("added #2"))
        .stdout(predicate::str::contains("#1 [✔] buy milk"))
        .stdout(predicate::str::contains("removed #2: write report"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    gradebook()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created gradebook.toml"))
        .stdout(predicate::str::contains("Created sheets/example.toml"));

    assert!(dir.path().join("gradebook.toml").exists());
    assert!(dir.path().join("sheets/example.toml").exists());

    // The generated sheet is usable as-is.
    gradebook()
        .current_dir(dir.path())
        .args(["sheet", "--path", "sheets/example.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Example Course"));
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    gradebook()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    gradebook()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn help_output() {
    gradebook()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Weighted course grade evaluator"));
}

#[test]
fn version_output() {
    gradebook()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("gradebook"));
}
