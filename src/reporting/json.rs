//! # JSON Reporting Module / JSON 报告模块
//!
//! Serializes a verification run into a JSON document for CI tooling.
//!
//! 将一次验证运行序列化为 JSON 文档，供 CI 工具使用。

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::core::{
    directive::Expectations,
    execution::child_argv,
    models::{ExecutionResult, Failure, Termination, TestCase, VerificationOutcome},
};
use crate::infra::t;

/// The JSON shape of one verification run.
/// 一次验证运行的 JSON 结构。
#[derive(Debug, Serialize)]
pub struct VerificationReport<'a> {
    pub test_case: String,
    pub command: Vec<String>,
    pub passed: bool,
    pub expectations: &'a Expectations,
    pub termination: Termination,
    pub exit_code: Option<i32>,
    pub duration_ms: u64,
    pub failures: &'a [Failure],
}

impl<'a> VerificationReport<'a> {
    pub fn new(
        case: &TestCase,
        command: &[String],
        expectations: &'a Expectations,
        result: &ExecutionResult,
        outcome: &'a VerificationOutcome,
    ) -> Self {
        Self {
            test_case: case.path().display().to_string(),
            command: child_argv(case, command),
            passed: outcome.passed(),
            expectations,
            termination: result.termination,
            exit_code: result.termination.effective_code(),
            duration_ms: result.duration.as_millis() as u64,
            failures: &outcome.failures,
        }
    }
}

/// Writes the report as pretty-printed JSON.
///
/// 以美化格式的 JSON 写入报告。
pub fn write_report(report: &VerificationReport<'_>, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json)
        .with_context(|| t!("error.report_write_failed", path = path.display()).to_string())?;
    Ok(())
}
