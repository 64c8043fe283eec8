// adhd-rs: ADHD Framework Project Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Scripted `GitRunner` replaying captured git output.

use std::collections::HashMap;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::backend::{GitOutput, GitRunner};
use crate::error::{AdhdResult, ProcessError};

/// Replays canned output keyed by working directory and argument line.
///
/// Unscripted calls exit with 128 like git outside a repository.
#[derive(Debug, Default)]
pub(crate) struct ScriptedRunner {
    script: HashMap<(PathBuf, String), Result<GitOutput, String>>,
    calls: Mutex<Vec<(PathBuf, String)>>,
}

impl ScriptedRunner {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Scripts `git <args>` in `cwd` to exit with `code`.
    pub(crate) fn on(
        mut self,
        cwd: &Path,
        args: &str,
        code: i32,
        stdout: &str,
        stderr: &str,
    ) -> Self {
        self.script.insert(
            (cwd.to_path_buf(), args.to_string()),
            Ok(GitOutput::new(code, stdout, stderr)),
        );
        self
    }

    /// Scripts `git <args>` in `cwd` to time out.
    pub(crate) fn timeout(mut self, cwd: &Path, args: &str) -> Self {
        self.script
            .insert((cwd.to_path_buf(), args.to_string()), Err(args.to_string()));
        self
    }

    /// Scripts a clean probe: branch, empty status, no upstream difference.
    pub(crate) fn clean(self, cwd: &Path, branch: &str) -> Self {
        self.on(cwd, "rev-parse --abbrev-ref HEAD", 0, branch, "")
            .on(cwd, "status --porcelain", 0, "", "")
            .on(cwd, "rev-list --count @{u}..HEAD", 0, "0", "")
            .on(cwd, "rev-list --count HEAD..@{u}", 0, "0", "")
    }

    /// Scripts a dirty probe with the given porcelain listing.
    pub(crate) fn dirty(self, cwd: &Path, branch: &str, porcelain: &str) -> Self {
        self.on(cwd, "rev-parse --abbrev-ref HEAD", 0, branch, "")
            .on(cwd, "status --porcelain", 0, porcelain, "")
    }

    /// Argument lines run in `cwd`, in call order.
    pub(crate) fn calls_in(&self, cwd: &Path) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(dir, _)| dir == cwd)
            .map(|(_, args)| args.clone())
            .collect()
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl GitRunner for ScriptedRunner {
    fn run(&self, args: &[&str], cwd: &Path) -> impl Future<Output = AdhdResult<GitOutput>> + Send {
        let key = (cwd.to_path_buf(), args.join(" "));
        self.calls.lock().unwrap().push(key.clone());
        let result = match self.script.get(&key) {
            Some(Ok(output)) => Ok(output.clone()),
            Some(Err(command)) => Err(ProcessError::Timeout {
                command: format!("git {command}"),
                timeout_secs: 30,
            }
            .into()),
            None => Ok(GitOutput::new(128, "", "fatal: unscripted command")),
        };
        std::future::ready(result)
    }
}
