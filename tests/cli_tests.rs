//! End-to-end tests driving the `tcf-runner` binary with `sh` as the program
//! under test.
//!
//! 以 `sh` 作为被测程序，端到端驱动 `tcf-runner` 二进制文件的测试。

#![cfg(unix)]

mod common;

use common::{harness, harness_sh, scratch_dir, write_tcf};
use predicates::prelude::*;
use std::fs;

/// A test case without directives passes when the program exits 0, and the
/// program's output is echoed.
#[test]
fn test_no_directives_passes() {
    let dir = scratch_dir();
    let tcf = write_tcf(&dir, "plain.tcf", "nothing to see here\n");

    harness_sh("echo hello from child", &tcf)
        .assert()
        .success()
        .stdout(predicate::str::contains("hello from child"))
        .stdout(predicate::str::contains("PASS: plain.tcf"));
}

#[test]
fn test_missing_check_reports_line_number() {
    let dir = scratch_dir();
    let tcf = write_tcf(&dir, "missing.tcf", "intro\n# CHECK: foo\n");

    harness_sh("echo bar", &tcf)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("CHECK on line 2 not found: foo"))
        .stdout(predicate::str::contains("FAIL: missing.tcf"));
}

#[test]
fn test_all_missing_checks_are_reported() {
    let dir = scratch_dir();
    let tcf = write_tcf(&dir, "many.tcf", "# CHECK: one\n# CHECK: two\n# CHECK: three\n");

    harness_sh("echo two", &tcf)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("CHECK on line 1 not found: one"))
        .stdout(predicate::str::contains("CHECK on line 3 not found: three"))
        .stdout(predicate::str::contains("CHECK on line 2").not());
}

/// Both patterns exist, but in the opposite order from the test case.
#[test]
fn test_check_order_is_enforced() {
    let dir = scratch_dir();
    let tcf = write_tcf(&dir, "order.tcf", "# CHECK: alpha\n# CHECK: beta\n");

    harness_sh("echo beta; echo alpha", &tcf)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("CHECK on line 2 not found: beta"));

    harness_sh("echo alpha; echo gap; echo beta", &tcf)
        .assert()
        .success();
}

#[test]
fn test_stderr_is_checked_too() {
    let dir = scratch_dir();
    let tcf = write_tcf(&dir, "stderr.tcf", "# CHECK: went to stderr\n");

    harness_sh("echo went to stderr 1>&2", &tcf)
        .assert()
        .success()
        .stdout(predicate::str::contains("went to stderr"));
}

#[test]
fn test_expected_exit_code() {
    let dir = scratch_dir();
    let tcf = write_tcf(&dir, "exit.tcf", "# EXIT 2\n");

    harness_sh("exit 2", &tcf).assert().success();

    harness_sh("exit 3", &tcf)
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Exit code 3 does not match expected value of 2",
        ));
}

#[test]
fn test_unexpected_non_zero_exit_prints_output_again() {
    let dir = scratch_dir();
    let tcf = write_tcf(&dir, "crash.tcf", "# CHECK: never reached\n");

    harness_sh("echo diagnostic-line; exit 4", &tcf)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("non-zero exit code (4)"))
        .stdout(predicate::str::contains("diagnostic-line").count(2))
        .stdout(predicate::str::contains("CHECK on line").not());
}

#[test]
fn test_abort_expectation() {
    let dir = scratch_dir();
    let tcf = write_tcf(&dir, "abort.tcf", "# ABORT\n");

    harness_sh("exit 1", &tcf).assert().success();
    harness_sh("kill -ABRT $$", &tcf).assert().success();

    harness_sh("exit 0", &tcf)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("expected to abort"));
}

#[test]
fn test_child_runs_in_test_case_directory() {
    let dir = scratch_dir();
    fs::write(dir.path().join("data.txt"), "sibling data\n").unwrap();
    let tcf = write_tcf(&dir, "cwd.tcf", "# CHECK: sibling data\n# CHECK: arg=cwd.tcf\n");

    harness_sh("cat data.txt; echo \"arg=$1\"", &tcf)
        .assert()
        .success();
}

#[test]
fn test_relative_program_path() {
    use std::os::unix::fs::PermissionsExt;

    let dir = scratch_dir();
    fs::create_dir_all(dir.path().join("bin")).unwrap();
    fs::create_dir_all(dir.path().join("cases")).unwrap();

    let program = dir.path().join("bin").join("tool.sh");
    fs::write(&program, "#!/bin/sh\necho \"tool saw $1\"\n").unwrap();
    fs::set_permissions(&program, fs::Permissions::from_mode(0o755)).unwrap();
    fs::write(dir.path().join("cases").join("t.tcf"), "# CHECK: tool saw t.tcf\n").unwrap();

    harness()
        .current_dir(dir.path())
        .arg("bin/tool.sh")
        .arg("cases/t.tcf")
        .assert()
        .success();
}

#[test]
fn test_missing_test_case_is_fatal() {
    let dir = scratch_dir();
    let marker = dir.path().join("ran");

    harness()
        .arg("touch")
        .arg(&marker)
        .arg(dir.path().join("absent.tcf"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TCF file not found"));

    assert!(!marker.exists());
}

#[test]
fn test_malformed_exit_directive_is_fatal() {
    let dir = scratch_dir();
    let tcf = write_tcf(&dir, "bad.tcf", "# EXIT soon\n");

    harness_sh("exit 0", &tcf)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid exit code on line 1"));
}

#[test]
fn test_spawn_failure_is_fatal() {
    let dir = scratch_dir();
    let tcf = write_tcf(&dir, "spawn.tcf", "");

    harness()
        .arg("this_command_definitely_does_not_exist_12345")
        .arg(&tcf)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to run"));
}

#[test]
fn test_usage_error() {
    harness()
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage:"));

    harness()
        .arg("only-one.tcf")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_help_exits_zero() {
    harness()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--timeout"));
}

#[test]
fn test_timeout() {
    let dir = scratch_dir();
    let tcf = write_tcf(&dir, "hang.tcf", "");

    harness()
        .arg("--timeout")
        .arg("1")
        .arg("sh")
        .arg("-c")
        .arg("exec sleep 30")
        .arg("sh")
        .arg(&tcf)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("timed out"));
}

#[test]
fn test_json_report() {
    let dir = scratch_dir();
    let tcf = write_tcf(&dir, "report.tcf", "# CHECK: ready\n# EXIT 3\n");
    let report_path = dir.path().join("report.json");

    harness()
        .arg("--report")
        .arg(&report_path)
        .arg("sh")
        .arg("-c")
        .arg("echo ready; exit 3")
        .arg("sh")
        .arg(&tcf)
        .assert()
        .success();

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(report["passed"], true);
    assert_eq!(report["exit_code"], 3);
    assert_eq!(report["termination"]["kind"], "exited");
    assert_eq!(report["expectations"]["exit_code"], 3);
    assert_eq!(report["command"].as_array().unwrap().last().unwrap(), "report.tcf");
    assert!(report["failures"].as_array().unwrap().is_empty());
}

#[test]
fn test_json_report_lists_failures() {
    let dir = scratch_dir();
    let tcf = write_tcf(&dir, "failing.tcf", "# CHECK: absent\n");
    let report_path = dir.path().join("failing.json");

    harness()
        .arg("--report")
        .arg(&report_path)
        .arg("true")
        .arg(&tcf)
        .assert()
        .code(1);

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(report["passed"], false);
    assert_eq!(report["failures"][0]["kind"], "check_not_found");
    assert_eq!(report["failures"][0]["line"], 1);
    assert_eq!(report["failures"][0]["pattern"], "absent");
}

#[test]
fn test_config_file_sets_language() {
    let dir = scratch_dir();
    let tcf = write_tcf(&dir, "zh.tcf", "");
    let config = dir.path().join("harness.toml");
    fs::write(&config, "language = \"zh-CN\"\n").unwrap();

    assert_cmd::Command::cargo_bin("tcf-runner")
        .unwrap()
        .arg("--config")
        .arg(&config)
        .arg("true")
        .arg(&tcf)
        .assert()
        .success()
        .stdout(predicate::str::contains("通过: zh.tcf"));
}

#[test]
fn test_verbose_prints_command_line() {
    let dir = scratch_dir();
    let tcf = write_tcf(&dir, "verbose.tcf", "");

    harness()
        .arg("-v")
        .arg("true")
        .arg(&tcf)
        .assert()
        .success()
        .stdout(predicate::str::contains("Command: true verbose.tcf"));
}

/// Identical inputs with a deterministic program give identical results.
#[test]
fn test_runs_are_repeatable() {
    let dir = scratch_dir();
    let tcf = write_tcf(&dir, "same.tcf", "# CHECK: x\n# CHECK: missing\n");

    let first = harness_sh("echo x; echo y", &tcf).output().unwrap();
    let second = harness_sh("echo x; echo y", &tcf).output().unwrap();

    assert_eq!(first.status.code(), Some(1));
    assert_eq!(first.status.code(), second.status.code());
    assert_eq!(first.stdout, second.stdout);
}
