// adhd-rs: ADHD Framework Project Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git command execution layer.
//!
//! ```text
//! GitRunner::run(args, cwd) --> GitOutput { exit_code, stdout, stderr }
//!        |
//!        '--> ShellBackend: git CLI through ProcessBuilder
//!             GCM_INTERACTIVE=never, GIT_TERMINAL_PROMPT=0, LC_ALL=C
//!             ALLOW_FAILURE, timeout per command
//! ```
//!
//! A non-zero exit is returned as output, never as an error. Only spawn
//! failures and timeouts surface as `Err`.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::process::builder::{ProcessBuilder, ProcessFlags};
use crate::error::AdhdResult;

/// Captured result of one git invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitOutput {
    exit_code: i32,
    stdout: String,
    stderr: String,
}

impl GitOutput {
    #[must_use]
    pub fn new(exit_code: i32, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            exit_code,
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.exit_code
    }

    #[must_use]
    pub const fn success(&self) -> bool {
        self.exit_code == 0
    }

    #[must_use]
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    #[must_use]
    pub fn stderr(&self) -> &str {
        &self.stderr
    }

    /// Stdout and stderr joined by a newline, for text matching.
    #[must_use]
    pub fn combined(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Runs git subcommands in a working directory.
///
/// Implementations must not treat a non-zero exit as an error.
pub trait GitRunner: Send + Sync {
    /// Run `git <args>` in `cwd`.
    ///
    /// # Errors
    ///
    /// Returns an `AdhdError` if git cannot be spawned or exceeds its timeout.
    fn run(&self, args: &[&str], cwd: &Path) -> impl Future<Output = AdhdResult<GitOutput>> + Send;
}

/// Shell-based git backend using the git CLI.
#[derive(Debug, Clone)]
pub struct ShellBackend {
    program: PathBuf,
    timeout: Duration,
}

impl ShellBackend {
    /// Creates a backend that resolves `git` once through PATH.
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        let program = ProcessBuilder::find("git").unwrap_or_else(|| PathBuf::from("git"));
        Self { program, timeout }
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for ShellBackend {
    fn default() -> Self {
        Self::new(Duration::from_secs(30))
    }
}

impl GitRunner for ShellBackend {
    fn run(&self, args: &[&str], cwd: &Path) -> impl Future<Output = AdhdResult<GitOutput>> + Send {
        let builder = ProcessBuilder::new(&self.program)
            .args(args)
            .cwd(cwd)
            .env("GCM_INTERACTIVE", "never")
            .env("GIT_TERMINAL_PROMPT", "0")
            .env("LC_ALL", "C")
            .flag(ProcessFlags::ALLOW_FAILURE)
            .capture_output()
            .name("git")
            .timeout(self.timeout);

        async move {
            let (exit_code, stdout, stderr) = builder.run().await?.into_parts();
            Ok(GitOutput::new(exit_code, stdout, stderr))
        }
    }
}
