// Shared test helpers for integration tests
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};
use tcf_runner::models::TestCase;

pub fn scratch_dir() -> TempDir {
    tempdir().expect("Failed to create temporary directory")
}

/// Writes a test-case file into `dir` and returns its path.
pub fn write_tcf(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write test case file");
    path
}

/// An in-memory test case, for tests that never touch the file system.
pub fn case_from(source: &str) -> TestCase {
    TestCase::from_source("/tmp", "case.tcf", source)
}

/// The harness binary, pinned to English messages.
pub fn harness() -> Command {
    let mut cmd = Command::cargo_bin("tcf-runner").expect("binary should be built");
    cmd.arg("--lang").arg("en");
    cmd
}

/// The harness invoking `sh -c <script>` against `tcf`. Inside the script,
/// `$1` is the test case's base name.
pub fn harness_sh(script: &str, tcf: &Path) -> Command {
    let mut cmd = harness();
    cmd.arg("sh").arg("-c").arg(script).arg("sh").arg(tcf);
    cmd
}

/// Builds the `[program, args...]` vector for `sh -c <script>`.
pub fn sh_command(script: &str) -> Vec<String> {
    vec![
        "sh".to_string(),
        "-c".to_string(),
        script.to_string(),
        "sh".to_string(),
    ]
}
