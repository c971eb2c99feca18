//! # Target Execution Module / 目标执行模块
//!
//! Loads the test-case file and runs the target program against it.
//! The program runs inside the test case's directory and receives the test
//! case's base name as its last argument, so relative paths written in the
//! test case resolve against the test case itself.
//!
//! 加载测试用例文件并针对它运行目标程序。
//! 程序在测试用例所在目录中运行，并以测试用例的基本名称作为最后一个参数，
//! 因此测试用例中写的相对路径会相对于测试用例本身解析。

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;
use std::process::ExitStatus;
use std::time::{Duration, Instant};

use crate::{
    core::models::{ExecutionResult, Termination, TestCase},
    infra::{
        command::spawn_and_capture,
        fs::{locate_test_case, resolve_program},
        t,
    },
};

/// Reads a test-case file fully into memory.
/// Fails before anything runs if the file does not exist.
///
/// 将测试用例文件完整读入内存。如果文件不存在，则在运行任何内容之前失败。
pub fn load_test_case(path: &Path) -> Result<TestCase> {
    let (dir, file_name) = locate_test_case(path)?;
    let bytes = fs::read(dir.join(&file_name))
        .with_context(|| t!("error.tcf_read_failed", path = path.display()).to_string())?;
    let source = String::from_utf8_lossy(&bytes);

    Ok(TestCase::from_source(dir, &file_name, &source))
}

/// The full argument vector handed to the child: the command followed by the
/// test case's base name.
///
/// 传递给子进程的完整参数向量：命令后接测试用例的基本名称。
pub fn child_argv(case: &TestCase, command: &[String]) -> Vec<String> {
    command
        .iter()
        .cloned()
        .chain(std::iter::once(case.file_name.clone()))
        .collect()
}

/// A shell-quoted rendering of the child's command line, for display.
pub fn command_line(case: &TestCase, command: &[String]) -> String {
    let argv = child_argv(case, command);
    shlex::try_join(argv.iter().map(String::as_str)).unwrap_or_else(|_| argv.join(" "))
}

fn termination_of(status: ExitStatus) -> Termination {
    if let Some(code) = status.code() {
        return Termination::Exited { code };
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return Termination::Signaled { signal };
        }
    }

    Termination::Exited { code: -1 }
}

/// Runs `command` with the test case's base name appended, inside the test
/// case's directory, and captures the merged output.
///
/// # Arguments
/// * `case` - The loaded test case
/// * `command` - The program followed by its arguments
/// * `timeout` - Optional limit; the child is killed when it elapses
///
/// # Returns
/// The captured `ExecutionResult`. Failing to spawn the program is an error.
///
/// 在测试用例目录中运行附加了测试用例基本名称的 `command`，并捕获合并后的输出。
/// 无法派生程序时返回错误。
pub async fn run_target(
    case: &TestCase,
    command: &[String],
    timeout: Option<Duration>,
) -> Result<ExecutionResult> {
    let Some((program, args)) = command.split_first() else {
        bail!("{}", t!("usage"));
    };

    let program_path = resolve_program(program)?;

    let mut cmd = tokio::process::Command::new(&program_path);
    cmd.args(args)
        .arg(&case.file_name)
        .current_dir(&case.dir)
        .kill_on_drop(true);

    let start_time = Instant::now();
    let captured = spawn_and_capture(cmd, timeout)
        .await
        .with_context(|| t!("error.spawn_failed", program = program).to_string())?;
    let duration = start_time.elapsed();

    let termination = match captured.status {
        Some(status) => termination_of(status),
        None => Termination::TimedOut {
            after_ms: timeout.unwrap_or(duration).as_millis() as u64,
        },
    };

    Ok(ExecutionResult {
        output: captured.output,
        termination,
        duration,
    })
}
