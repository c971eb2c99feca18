//! # Data Models Module / 数据模型模块
//!
//! This module defines the core data structures used throughout the harness:
//! the test-case file, the captured execution result, verification failures
//! and the final outcome.
//!
//! 此模块定义了整个测试工具中使用的核心数据结构：
//! 测试用例文件、捕获的执行结果、验证失败以及最终结果。

use crate::infra::t;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// A test-case file (TCF), read fully into memory.
/// 一个测试用例文件（TCF），完整读入内存。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    /// The canonical directory containing the file. The target program runs here.
    /// 包含该文件的规范化目录。目标程序在此目录中运行。
    pub dir: PathBuf,
    /// The file's base name, as passed to the target program.
    /// 文件的基本名称，会作为参数传给目标程序。
    pub file_name: String,
    /// The file's lines, in order.
    /// 文件的各行，按顺序排列。
    pub lines: Vec<String>,
}

impl TestCase {
    /// Builds a test case from in-memory text. Used by tests and benches.
    pub fn from_source(dir: impl Into<PathBuf>, file_name: &str, source: &str) -> Self {
        Self {
            dir: dir.into(),
            file_name: file_name.to_string(),
            lines: source.lines().map(str::to_string).collect(),
        }
    }

    /// The full path of the test case.
    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

/// How the target process ended.
/// 目标进程的结束方式。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Termination {
    /// The process exited on its own with a status code.
    /// 进程自行退出并返回状态码。
    Exited { code: i32 },
    /// The process was terminated by a signal (Unix only).
    /// 进程被信号终止（仅限 Unix）。
    Signaled { signal: i32 },
    /// The process outlived the configured timeout and was killed.
    /// 进程运行超过配置的超时时间并被终止。
    TimedOut { after_ms: u64 },
}

impl Termination {
    /// The exit code used for comparisons. A signal `n` maps to `-n`;
    /// a timed-out process has no exit code.
    ///
    /// 用于比较的退出码。信号 `n` 映射为 `-n`；超时的进程没有退出码。
    pub fn effective_code(&self) -> Option<i32> {
        match self {
            Termination::Exited { code } => Some(*code),
            Termination::Signaled { signal } => Some(-signal),
            Termination::TimedOut { .. } => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Termination::TimedOut { .. })
    }
}

/// Everything captured from one run of the target program.
/// 目标程序一次运行所捕获的全部信息。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Merged stdout and stderr, decoded as UTF-8 (lossy).
    /// 合并后的 stdout 和 stderr，以 UTF-8（有损）解码。
    pub output: String,
    pub termination: Termination,
    pub duration: Duration,
}

impl ExecutionResult {
    /// Convenience constructor for a process that exited normally.
    pub fn exited(output: impl Into<String>, code: i32) -> Self {
        Self {
            output: output.into(),
            termination: Termination::Exited { code },
            duration: Duration::default(),
        }
    }

    /// The captured output split into lines.
    pub fn output_lines(&self) -> Vec<&str> {
        self.output.lines().collect()
    }
}

/// A single verification failure.
/// 单个验证失败。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Failure {
    /// A `# CHECK:` pattern was not found at or after the search cursor.
    /// `# CHECK:` 模式在搜索游标处或之后未找到。
    CheckNotFound { line: usize, pattern: String },
    /// The program exited non-zero while a zero exit code was expected.
    /// 预期退出码为零，但程序以非零退出码退出。
    NonZeroExit { actual: i32 },
    /// The program's exit code differs from a non-zero expected code.
    /// 程序的退出码与非零的预期退出码不同。
    ExitCodeMismatch { actual: i32, expected: i32 },
    /// `# ABORT` was declared but the program exited with code 0.
    /// 声明了 `# ABORT`，但程序以退出码 0 退出。
    UnexpectedSuccess,
    /// The program was killed after the timeout.
    /// 程序在超时后被终止。
    TimedOut { after_ms: u64 },
}

impl Failure {
    /// Renders the failure as a localized, single-line diagnostic.
    ///
    /// 将失败渲染为本地化的单行诊断信息。
    pub fn message(&self, locale: &str) -> String {
        match self {
            Failure::CheckNotFound { line, pattern } => {
                t!("verify.check_not_found", locale = locale, line = line, pattern = pattern)
                    .to_string()
            }
            Failure::NonZeroExit { actual } => {
                t!("verify.nonzero_exit", locale = locale, code = actual).to_string()
            }
            Failure::ExitCodeMismatch { actual, expected } => t!(
                "verify.exit_mismatch",
                locale = locale,
                actual = actual,
                expected = expected
            )
            .to_string(),
            Failure::UnexpectedSuccess => t!("verify.unexpected_success", locale = locale).to_string(),
            Failure::TimedOut { after_ms } => {
                let secs = *after_ms as f64 / 1000.0;
                t!("verify.timed_out", locale = locale, secs = secs).to_string()
            }
        }
    }

    /// Whether the reporter should print the full captured output again.
    pub fn wants_full_output(&self) -> bool {
        matches!(self, Failure::NonZeroExit { .. })
    }
}

/// The result of verifying one execution against a test case.
/// 针对一个测试用例验证一次执行的结果。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VerificationOutcome {
    pub failures: Vec<Failure>,
}

impl VerificationOutcome {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }

    /// The harness's own exit status: 0 on pass, 1 on any failure.
    /// 测试工具自身的退出状态：通过为 0，任何失败为 1。
    pub fn exit_code(&self) -> u8 {
        if self.passed() { 0 } else { 1 }
    }
}
