//! # Directive Parsing Module / 指令解析模块
//!
//! Classifies test-case lines into directives by prefix and folds them into
//! the set of expectations a run is verified against.
//!
//! 按前缀将测试用例的各行分类为指令，并将其汇总为用于验证一次运行的预期集合。
//!
//! | Prefix | Directive |
//! |---|---|
//! | `# CHECK: <text>` | output must contain a line with `<text>`, in order |
//! | `# EXIT <int>` | expected exit code (default 0, last one wins) |
//! | `# ABORT` | expect abnormal termination |

use anyhow::{bail, Result};
use serde::Serialize;

use crate::core::models::TestCase;
use crate::infra::t;

const CHECK_PREFIX: &str = "# CHECK: ";
const EXIT_PREFIX: &str = "# EXIT ";
const ABORT_PREFIX: &str = "# ABORT";

/// A directive parsed from a single test-case line.
/// 从单行测试用例中解析出的指令。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// Output must contain a line including `pattern`, at or after the search cursor.
    /// 输出中在搜索游标处或之后必须存在包含 `pattern` 的行。
    CheckLine { pattern: String },
    /// Expected exit code of the target program.
    /// 目标程序的预期退出码。
    ExpectExitCode { code: i32 },
    /// The target program is expected to terminate abnormally.
    /// 目标程序预期会异常终止。
    ExpectAbort,
}

/// A `# CHECK:` directive together with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Check {
    pub line: usize,
    pub pattern: String,
}

/// The folded directives of one test case.
/// 一个测试用例汇总后的指令。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Expectations {
    /// CHECK directives in file order.
    pub checks: Vec<Check>,
    pub exit_code: i32,
    pub expect_abort: bool,
}

impl Default for Expectations {
    fn default() -> Self {
        Self {
            checks: Vec::new(),
            exit_code: 0,
            expect_abort: false,
        }
    }
}

/// Error raised for an `# EXIT` directive whose value is not an integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidExitCode {
    pub value: String,
}

/// Classifies one line. Returns `Ok(None)` for inert text.
///
/// 对单行进行分类。对于普通文本返回 `Ok(None)`。
pub fn parse_line(line: &str) -> Result<Option<Directive>, InvalidExitCode> {
    if let Some(pattern) = line.strip_prefix(CHECK_PREFIX) {
        return Ok(Some(Directive::CheckLine {
            pattern: pattern.to_string(),
        }));
    }

    if let Some(value) = line.strip_prefix(EXIT_PREFIX) {
        let value = value.trim();
        return value
            .parse::<i32>()
            .map(|code| Some(Directive::ExpectExitCode { code }))
            .map_err(|_| InvalidExitCode {
                value: value.to_string(),
            });
    }

    if line.starts_with(ABORT_PREFIX) {
        return Ok(Some(Directive::ExpectAbort));
    }

    Ok(None)
}

/// Scans every line of the test case, in order, and folds the directives.
/// A malformed `# EXIT` value is fatal and names the offending line.
///
/// 按顺序扫描测试用例的每一行并汇总指令。
/// 格式错误的 `# EXIT` 值是致命错误，并会指出出错的行号。
pub fn parse_test_case(case: &TestCase) -> Result<Expectations> {
    let mut expectations = Expectations::default();

    for (index, line) in case.lines.iter().enumerate() {
        let line_number = index + 1;
        match parse_line(line) {
            Ok(Some(Directive::CheckLine { pattern })) => expectations.checks.push(Check {
                line: line_number,
                pattern,
            }),
            Ok(Some(Directive::ExpectExitCode { code })) => expectations.exit_code = code,
            Ok(Some(Directive::ExpectAbort)) => expectations.expect_abort = true,
            Ok(None) => {}
            Err(InvalidExitCode { value }) => bail!(
                "{}",
                t!("error.invalid_exit_code", line = line_number, value = value)
            ),
        }
    }

    Ok(expectations)
}
