//! # Verification Module / 验证模块
//!
//! Pure verification of one execution against a test case's expectations.
//! Nothing here performs I/O; the caller decides how to report and exit.
//!
//! 针对测试用例预期对一次执行进行纯验证。
//! 此处不执行任何 I/O；由调用方决定如何报告和退出。

use crate::core::directive::{Check, Expectations};
use crate::core::models::{ExecutionResult, Failure, Termination, VerificationOutcome};

/// Matches CHECK directives against output lines with a monotonic cursor.
///
/// Each CHECK searches from the cursor onwards. A match at line `k` moves the
/// cursor to `k + 1`; a miss is recorded and leaves the cursor unchanged, so
/// every unmatched CHECK is reported.
///
/// 使用单调游标将 CHECK 指令与输出行进行匹配。
/// 每个 CHECK 从游标位置开始向后搜索。在第 `k` 行匹配后游标移至 `k + 1`；
/// 未匹配会被记录且游标保持不变，因此每个未匹配的 CHECK 都会被报告。
pub fn scan_checks(checks: &[Check], output_lines: &[&str]) -> Vec<Failure> {
    let mut cursor = 0;
    let mut misses = Vec::new();

    for check in checks {
        let found = output_lines
            .iter()
            .skip(cursor)
            .position(|line| line.contains(check.pattern.as_str()));

        match found {
            Some(offset) => cursor += offset + 1,
            None => misses.push(Failure::CheckNotFound {
                line: check.line,
                pattern: check.pattern.clone(),
            }),
        }
    }

    misses
}

/// Verifies an execution result against the expectations.
///
/// Exit-status problems (timeout, unexpected success under `# ABORT`, exit
/// code mismatch) short-circuit: only that single failure is reported.
/// Otherwise all CHECK misses are reported.
///
/// 根据预期验证执行结果。
/// 退出状态问题（超时、`# ABORT` 下意外成功、退出码不匹配）会短路：
/// 只报告该单个失败。否则报告所有 CHECK 未匹配项。
pub fn verify(expectations: &Expectations, result: &ExecutionResult) -> VerificationOutcome {
    let output_lines = result.output_lines();
    let check_misses = scan_checks(&expectations.checks, &output_lines);

    let actual = match result.termination {
        Termination::TimedOut { after_ms } => {
            return VerificationOutcome {
                failures: vec![Failure::TimedOut { after_ms }],
            };
        }
        termination => termination.effective_code().unwrap_or_default(),
    };

    let exit_failure = if expectations.expect_abort {
        (actual == 0).then_some(Failure::UnexpectedSuccess)
    } else if actual != expectations.exit_code {
        Some(if expectations.exit_code == 0 {
            Failure::NonZeroExit { actual }
        } else {
            Failure::ExitCodeMismatch {
                actual,
                expected: expectations.exit_code,
            }
        })
    } else {
        None
    };

    let failures = match exit_failure {
        Some(failure) => vec![failure],
        None => check_misses,
    };

    VerificationOutcome { failures }
}
