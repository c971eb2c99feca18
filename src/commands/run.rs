//! # Run Command Module / 运行命令模块
//!
//! Runs one program against one test-case file and verifies the result.
//!
//! 针对一个测试用例文件运行一个程序并验证结果。

use anyhow::Result;
use colored::*;
use std::path::PathBuf;
use std::time::Duration;

use crate::{
    core::{
        directive::parse_test_case,
        execution::{command_line, load_test_case, run_target},
        models::VerificationOutcome,
        verifier::verify,
    },
    infra::t,
    reporting::{
        console::{echo_output, print_outcome, print_run_header},
        json::{write_report, VerificationReport},
    },
};

/// Everything needed for a single harness run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// The program followed by its arguments.
    pub command: Vec<String>,
    /// Path to the test-case file.
    pub test_case: PathBuf,
    pub timeout: Option<Duration>,
    /// Optional path for the JSON report.
    pub report: Option<PathBuf>,
    pub verbose: bool,
    pub locale: String,
}

/// Executes the run command.
///
/// The captured output is echoed before verification so it is visible on
/// success too. Fatal problems (missing test case, malformed directive, spawn
/// failure) are returned as errors; verification failures are part of the
/// returned outcome.
///
/// # Arguments
/// * `options` - The resolved run options
///
/// # Returns
/// The `VerificationOutcome` of the run
pub async fn execute(options: RunOptions) -> Result<VerificationOutcome> {
    let locale = options.locale.as_str();

    let case = load_test_case(&options.test_case)?;
    let expectations = parse_test_case(&case)?;

    if options.verbose {
        print_run_header(
            &command_line(&case, &options.command),
            case.dir(),
            options.timeout,
            locale,
        );
    }

    let result = run_target(&case, &options.command, options.timeout).await?;

    echo_output(&result.output);

    let outcome = verify(&expectations, &result);
    print_outcome(&case.file_name, &outcome, &result, locale);

    if let Some(report_path) = &options.report {
        let report =
            VerificationReport::new(&case, &options.command, &expectations, &result, &outcome);
        write_report(&report, report_path)?;
        if options.verbose {
            println!(
                "{}",
                t!("summary.report_written", locale = locale, path = report_path.display()).dimmed()
            );
        }
    }

    Ok(outcome)
}
