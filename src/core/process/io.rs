// adhd-rs: ADHD Framework Project Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! I/O streaming and output capture for processes.
//!
//! ```text
//! run_child()
//!   stdout/stderr reader tasks
//!     read_until('\n') --> lossy UTF-8 --> trace! / accumulate
//!   wait (or timeout --> kill)
//!   join readers
//!   --> ProcessOutput { exit_code, stdout, stderr }
//! ```

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Child;
use tokio::task::JoinHandle;
use tracing::{trace, warn};

use super::builder::{ProcessBuilder, ProcessOutput, StreamFlags};
use crate::error::{AdhdResult, ProcessError};

/// Spawns a reader task that drains `stream` and returns what it kept.
fn spawn_reader<R>(
    stream: Option<R>,
    flags: StreamFlags,
    process_name: &str,
    stream_name: &'static str,
) -> Option<JoinHandle<String>>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    let stream = stream?;
    let name = process_name.to_string();
    Some(tokio::spawn(async move {
        read_stream(stream, flags, &name, stream_name).await
    }))
}

/// Waits for a reader task, yielding an empty string when there was none.
async fn join_reader(handle: Option<JoinHandle<String>>) -> String {
    match handle {
        Some(handle) => handle.await.unwrap_or_default(),
        None => String::new(),
    }
}

impl ProcessBuilder {
    /// Runs the child process, draining its output while waiting for completion.
    pub(super) async fn run_child(
        &self,
        name: &str,
        cmd_line: &str,
        child: &mut Child,
    ) -> AdhdResult<ProcessOutput> {
        let stdout_handle = spawn_reader(child.stdout.take(), self.stdout_flags(), name, "stdout");
        let stderr_handle = spawn_reader(child.stderr.take(), self.stderr_flags(), name, "stderr");

        let wait_error = |e: std::io::Error| ProcessError::OutputError {
            command: cmd_line.to_string(),
            message: e.to_string(),
        };

        let exit_status = if let Some(timeout) = self.timeout_duration() {
            tokio::select! {
                status = child.wait() => status.map_err(wait_error)?,
                () = tokio::time::sleep(timeout) => {
                    warn!(process = %name, timeout = ?timeout, "process timed out");
                    child.kill().await.ok();
                    return Err(ProcessError::Timeout {
                        command: cmd_line.to_string(),
                        timeout_secs: timeout.as_secs(),
                    }
                    .into());
                }
            }
        } else {
            child.wait().await.map_err(wait_error)?
        };

        let stdout = join_reader(stdout_handle).await;
        let stderr = join_reader(stderr_handle).await;

        Ok(ProcessOutput::new(
            exit_status.code().unwrap_or(-1),
            stdout,
            stderr,
        ))
    }
}

/// Reads a stream line by line, decoding lossily.
///
/// Lines are joined with `\n`; the final newline is not kept.
async fn read_stream<R>(
    reader: R,
    flags: StreamFlags,
    process_name: &str,
    stream_name: &str,
) -> String
where
    R: AsyncRead + Unpin,
{
    let mut reader = BufReader::new(reader);
    let mut output = String::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf).await {
            Ok(0) => break,
            Ok(_) => {
                if buf.last() == Some(&b'\n') {
                    buf.pop();
                    if buf.last() == Some(&b'\r') {
                        buf.pop();
                    }
                }
                let line = String::from_utf8_lossy(&buf);
                if flags.contains(StreamFlags::FORWARD_TO_LOG) {
                    trace!(process = %process_name, stream = %stream_name, line = %line, "output");
                }
                if flags.contains(StreamFlags::KEEP_IN_STRING) {
                    if !output.is_empty() {
                        output.push('\n');
                    }
                    output.push_str(&line);
                }
            }
            Err(e) => {
                warn!(
                    process = %process_name,
                    stream = %stream_name,
                    error = %e,
                    "error reading stream"
                );
                break;
            }
        }
    }

    output
}
