//! # Console Reporting Module / 控制台报告模块
//!
//! Prints the target's captured output, the verification diagnostics and a
//! final colored summary line.
//!
//! 打印目标程序捕获的输出、验证诊断信息以及最后的彩色摘要行。

use colored::*;
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use crate::core::models::{ExecutionResult, VerificationOutcome};
use crate::infra::t;

/// Writes the captured output verbatim to stdout. Always called before
/// verification, so the output is visible whether the test passes or not.
///
/// 将捕获的输出原样写入 stdout。总是在验证之前调用，
/// 因此无论测试是否通过，输出都可见。
pub fn echo_output(output: &str) {
    let mut stdout = io::stdout().lock();
    let _ = stdout.write_all(output.as_bytes());
    if !output.is_empty() && !output.ends_with('\n') {
        let _ = stdout.write_all(b"\n");
    }
    let _ = stdout.flush();
}

/// Prints the resolved command line, working directory and timeout.
pub fn print_run_header(command_line: &str, dir: &Path, timeout: Option<Duration>, locale: &str) {
    println!(
        "{}",
        t!("run.command", locale = locale, command = command_line).dimmed()
    );
    println!(
        "{}",
        t!("run.working_dir", locale = locale, path = dir.display()).dimmed()
    );
    if let Some(limit) = timeout {
        println!(
            "{}",
            t!("run.timeout", locale = locale, secs = limit.as_secs_f64()).dimmed()
        );
    }
}

/// Prints every failure of the outcome followed by a summary line.
///
/// A non-zero exit where zero was expected also prints the full output again,
/// separated by a blank line, to aid debugging.
///
/// 打印结果中的每个失败，然后打印摘要行。
/// 当预期为零却以非零退出时，还会再次打印完整输出（以空行分隔）以便调试。
///
/// # Output Format / 输出格式
/// ```text
/// CHECK on line 3 not found: expected text
/// CHECK on line 7 not found: other text
/// FAIL: simple.tcf (2 failure(s))
/// ```
pub fn print_outcome(
    case_name: &str,
    outcome: &VerificationOutcome,
    result: &ExecutionResult,
    locale: &str,
) {
    for failure in &outcome.failures {
        println!("{}", failure.message(locale).red());
        if failure.wants_full_output() {
            println!();
            echo_output(&result.output);
        }
    }

    if outcome.passed() {
        println!(
            "{}",
            t!("summary.passed", locale = locale, name = case_name).green().bold()
        );
    } else {
        println!(
            "{}",
            t!(
                "summary.failed",
                locale = locale,
                name = case_name,
                count = outcome.failures.len()
            )
            .red()
            .bold()
        );
    }
}
