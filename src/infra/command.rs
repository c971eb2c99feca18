//! # Command Execution Module / 命令执行模块
//!
//! Spawns a child process and captures its stdout and stderr merged into a
//! single buffer.
//!
//! 派生子进程，并将其 stdout 和 stderr 合并捕获到单个缓冲区中。

use std::io;
use std::process::{ExitStatus, Stdio};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::infra::t;

/// Minimum time left for draining the pipes once the child has exited or
/// been killed under a timeout. Grandchildren can hold the pipes open long
/// after the child is gone.
const DRAIN_GRACE: Duration = Duration::from_millis(500);

/// The raw result of running a child process.
/// 运行子进程的原始结果。
#[derive(Debug)]
pub struct CapturedOutput {
    /// `None` if the child was killed after the timeout.
    /// 如果子进程因超时被终止，则为 `None`。
    pub status: Option<ExitStatus>,
    /// Merged stdout and stderr bytes in arrival order, decoded lossily as UTF-8.
    /// 按到达顺序合并的 stdout 和 stderr 字节，以有损方式解码为 UTF-8。
    pub output: String,
}

/// Spawns a task that copies a pipe into the shared buffer, one line at a time.
/// Working at line granularity keeps lines from stdout and stderr intact when
/// they interleave.
fn spawn_reader<R>(pipe: R, sink: Arc<Mutex<Vec<u8>>>) -> JoinHandle<io::Result<()>>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut reader = BufReader::new(pipe);
        let mut line = Vec::new();
        loop {
            line.clear();
            if reader.read_until(b'\n', &mut line).await? == 0 {
                return Ok(());
            }
            sink.lock().await.extend_from_slice(&line);
        }
    })
}

/// Waits for every reader task, surfacing a read error or a panicked task
/// as an `io::Error` instead of a silently truncated buffer.
///
/// 等待所有读取任务完成；读取错误或任务 panic 会作为 `io::Error` 返回，
/// 而不是静默地截断缓冲区。
pub async fn join_readers(readers: &mut [JoinHandle<io::Result<()>>]) -> io::Result<()> {
    for reader in readers.iter_mut() {
        reader.await.map_err(io::Error::other)??;
    }
    Ok(())
}

/// Spawns a command and captures its stdout and stderr into one buffer.
/// The child inherits the harness's stdin. If `timeout` elapses first, the
/// child is killed and whatever it printed so far is returned. The same
/// deadline bounds reading the pipes, so a grandchild holding them open
/// cannot outlast the timeout.
///
/// # Arguments
/// * `cmd` - The `tokio::process::Command` to execute.
/// * `timeout` - Optional limit on how long to wait for the child.
///
/// # Returns
/// The exit status (or `None` on timeout) and the merged output.
///
/// 派生一个命令，并将其 stdout 和 stderr 捕获到一个缓冲区中。
/// 子进程继承测试工具的 stdin。如果先到达 `timeout`，子进程会被终止，
/// 并返回其到目前为止的输出。
pub async fn spawn_and_capture(
    mut cmd: tokio::process::Command,
    timeout: Option<Duration>,
) -> io::Result<CapturedOutput> {
    let mut child = cmd
        .stdin(Stdio::inherit())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| io::Error::other(t!("error.capture_stdout_failed").to_string()))?;
    let stderr = child
        .stderr
        .take()
        .ok_or_else(|| io::Error::other(t!("error.capture_stderr_failed").to_string()))?;

    let buffer = Arc::new(Mutex::new(Vec::new()));
    let mut readers = [
        spawn_reader(stdout, Arc::clone(&buffer)),
        spawn_reader(stderr, Arc::clone(&buffer)),
    ];

    let Some(limit) = timeout else {
        let status = child.wait().await?;
        join_readers(&mut readers).await?;
        return Ok(captured(Some(status), &buffer).await);
    };

    // One deadline covers the child and the pipes: a background grandchild
    // may keep stdout/stderr open after the child itself has exited.
    // 同一个截止时间同时约束子进程和管道。
    let deadline = Instant::now() + limit;
    let status = match tokio::time::timeout_at(deadline, child.wait()).await {
        Ok(status) => Some(status?),
        Err(_) => {
            child.kill().await?;
            None
        }
    };

    let drain_until = deadline.max(Instant::now() + DRAIN_GRACE);
    let drained = tokio::time::timeout_at(drain_until, join_readers(&mut readers)).await;
    match drained {
        Ok(joined) => joined?,
        Err(_) => readers.iter().for_each(JoinHandle::abort),
    }

    Ok(captured(status, &buffer).await)
}

async fn captured(status: Option<ExitStatus>, buffer: &Mutex<Vec<u8>>) -> CapturedOutput {
    let bytes = buffer.lock().await;
    CapturedOutput {
        status,
        output: String::from_utf8_lossy(&bytes).into_owned(),
    }
}
