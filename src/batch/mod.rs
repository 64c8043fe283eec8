// adhd-rs: ADHD Framework Project Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Batch git orchestrator.
//!
//! ```text
//! action   per module                                  result lists
//! ------   ----------                                  ------------
//! status   probe                                       modules, count
//! diff     probe -> dirty only -> diff_stat            modules, count
//! pull     probe -> dirty      -> skip                 pulled / failed / skipped
//!                   not a repo -> skip
//!                   else       -> pull
//! push     probe -> not dirty  -> skip                 pushed / failed / skipped
//!                   else       -> commit_and_push
//!                                 nothing to commit -> skip
//! ```
//!
//! Modules run one after another. A failing module becomes a `failed` entry
//! and the loop moves on.

#[cfg(test)]
mod tests;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use serde::Serialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::{debug, info, warn};

use crate::config::types::GitConfig;
use crate::error::ModuleError;
use crate::git::backend::GitRunner;
use crate::git::diff::{DiffChange, DiffSummary, diff_stat};
use crate::git::ops::{PullOutcome, PushOutcome, commit_and_push, pull};
use crate::git::query::remote_url;
use crate::git::status::{GitState, GitStatus, probe};
use crate::module::record::ModuleRecord;

/// Skip reason for pulls over local changes.
pub const SKIP_UNCOMMITTED: &str = "has uncommitted changes";
/// Skip reason for modules without a repository.
pub const SKIP_NOT_A_REPO: &str = "not a repository";
/// Skip reason for pushes with nothing staged.
pub const SKIP_NOTHING_TO_COMMIT: &str = "no changes to commit";

/// Git action applied across modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GitAction {
    Status,
    Diff,
    Pull,
    Push,
}

impl GitAction {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::Diff => "diff",
            Self::Pull => "pull",
            Self::Push => "push",
        }
    }
}

impl fmt::Display for GitAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GitAction {
    type Err = ModuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "status" => Ok(Self::Status),
            "diff" => Ok(Self::Diff),
            "pull" => Ok(Self::Pull),
            "push" => Ok(Self::Push),
            _ => Err(ModuleError::InvalidAction {
                action: s.to_string(),
            }),
        }
    }
}

/// One module in a `status` report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusEntry {
    pub name: String,
    pub repo_url: Option<String>,
    pub remote_url: Option<String>,
    #[serde(flatten)]
    pub state: GitState,
}

/// One dirty module in a `diff` report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffEntry {
    pub name: String,
    pub branch: String,
    pub changes: Vec<DiffChange>,
    pub diff_summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PulledEntry {
    pub name: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PushedEntry {
    pub name: String,
    pub commit: String,
    pub message: String,
    pub branch: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedEntry {
    pub name: String,
    pub error: String,
    /// Commit recorded before a failed push.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedEntry {
    pub name: String,
    pub reason: String,
}

impl SkippedEntry {
    fn new(name: &str, reason: &str) -> Self {
        Self {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Aggregate result of one batch action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum BatchReport {
    Status {
        modules: Vec<StatusEntry>,
        count: usize,
    },
    Diff {
        modules: Vec<DiffEntry>,
        count: usize,
    },
    Pull {
        pulled: Vec<PulledEntry>,
        failed: Vec<FailedEntry>,
        skipped: Vec<SkippedEntry>,
    },
    Push {
        pushed: Vec<PushedEntry>,
        failed: Vec<FailedEntry>,
        skipped: Vec<SkippedEntry>,
    },
}

impl BatchReport {
    /// Status and diff always succeed; pull and push succeed when nothing failed.
    #[must_use]
    pub fn success(&self) -> bool {
        match self {
            Self::Status { .. } | Self::Diff { .. } => true,
            Self::Pull { failed, .. } | Self::Push { failed, .. } => failed.is_empty(),
        }
    }

    /// Modules accounted for across the partition lists, `None` for status and diff.
    #[must_use]
    pub fn partitioned(&self) -> Option<usize> {
        match self {
            Self::Status { .. } | Self::Diff { .. } => None,
            Self::Pull {
                pulled,
                failed,
                skipped,
            } => Some(pulled.len() + failed.len() + skipped.len()),
            Self::Push {
                pushed,
                failed,
                skipped,
            } => Some(pushed.len() + failed.len() + skipped.len()),
        }
    }
}

fn progress_style() -> ProgressStyle {
    static STYLE: OnceLock<ProgressStyle> = OnceLock::new();
    STYLE
        .get_or_init(|| {
            ProgressStyle::with_template("{spinner:.green} [{pos}/{len}] {wide_msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
        })
        .clone()
}

/// Runs one git action over a list of modules.
#[derive(Debug)]
pub struct BatchRunner<'a, R: GitRunner> {
    runner: &'a R,
    remote: String,
    default_branch: String,
    progress: ProgressBar,
}

impl<'a, R: GitRunner> BatchRunner<'a, R> {
    #[must_use]
    pub fn new(runner: &'a R, config: &GitConfig) -> Self {
        Self {
            runner,
            remote: config.remote.clone(),
            default_branch: config.default_branch.clone(),
            progress: ProgressBar::hidden(),
        }
    }

    /// Draws a progress bar on stderr while the batch runs.
    #[must_use]
    pub fn with_progress(mut self, enabled: bool) -> Self {
        self.progress = if enabled {
            let pb = ProgressBar::with_draw_target(Some(0), ProgressDrawTarget::stderr());
            pb.set_style(progress_style());
            pb
        } else {
            ProgressBar::hidden()
        };
        self
    }

    /// Applies `action` to every module.
    ///
    /// # Errors
    ///
    /// `ModuleError::CommitMessageRequired` for a push without a non-blank
    /// message, before any module is touched. Per-module failures never
    /// error; they are reported in the result lists.
    pub async fn run(
        &self,
        action: GitAction,
        modules: &[&ModuleRecord],
        commit_message: Option<&str>,
    ) -> Result<BatchReport, ModuleError> {
        let message = match (action, commit_message.map(str::trim)) {
            (GitAction::Push, None | Some("")) => return Err(ModuleError::CommitMessageRequired),
            (_, message) => message.unwrap_or_default(),
        };

        info!(action = %action, modules = modules.len(), "running batch git action");
        self.progress.set_length(modules.len() as u64);
        self.progress.set_position(0);

        let report = match action {
            GitAction::Status => self.status(modules).await,
            GitAction::Diff => self.diff(modules).await,
            GitAction::Pull => self.pull(modules).await,
            GitAction::Push => self.push(modules, message).await,
        };

        self.progress.finish_and_clear();
        Ok(report)
    }

    async fn probe_next(&self, module: &ModuleRecord) -> GitState {
        self.progress.set_message(module.name().to_string());
        let state = probe(self.runner, module.path()).await;
        debug!(module = module.name(), status = %state.status(), branch = state.branch(), "probed");
        state
    }

    async fn status(&self, modules: &[&ModuleRecord]) -> BatchReport {
        let mut entries = Vec::with_capacity(modules.len());
        for module in modules {
            let state = self.probe_next(module).await;
            entries.push(StatusEntry {
                name: module.name().to_string(),
                repo_url: module.repo_url().map(String::from),
                remote_url: self.remote_url_of(module.path()),
                state,
            });
            self.progress.inc(1);
        }
        let count = entries.len();
        BatchReport::Status {
            modules: entries,
            count,
        }
    }

    async fn diff(&self, modules: &[&ModuleRecord]) -> BatchReport {
        let mut entries = Vec::new();
        for module in modules {
            let state = self.probe_next(module).await;
            if state.status().is_dirty() {
                let changes = diff_stat(self.runner, module.path()).await;
                let diff_summary = DiffSummary::of(&changes).to_string();
                entries.push(DiffEntry {
                    name: module.name().to_string(),
                    branch: state.branch().to_string(),
                    changes,
                    diff_summary,
                });
            }
            self.progress.inc(1);
        }
        let count = entries.len();
        BatchReport::Diff {
            modules: entries,
            count,
        }
    }

    async fn pull(&self, modules: &[&ModuleRecord]) -> BatchReport {
        let (mut pulled, mut failed, mut skipped) = (Vec::new(), Vec::new(), Vec::new());
        for module in modules {
            let name = module.name();
            let state = self.probe_next(module).await;
            match state.status() {
                GitStatus::Dirty { .. } => skipped.push(SkippedEntry::new(name, SKIP_UNCOMMITTED)),
                GitStatus::NotARepo => skipped.push(SkippedEntry::new(name, SKIP_NOT_A_REPO)),
                _ => match pull(self.runner, module.path()).await {
                    PullOutcome::Pulled { message } => {
                        info!(module = name, "pulled");
                        pulled.push(PulledEntry {
                            name: name.to_string(),
                            message,
                        });
                    }
                    PullOutcome::Failed { error } => {
                        warn!(module = name, error = %error, "pull failed");
                        failed.push(FailedEntry {
                            name: name.to_string(),
                            error,
                            commit: None,
                        });
                    }
                },
            }
            self.progress.inc(1);
        }
        BatchReport::Pull {
            pulled,
            failed,
            skipped,
        }
    }

    async fn push(&self, modules: &[&ModuleRecord], message: &str) -> BatchReport {
        let (mut pushed, mut failed, mut skipped) = (Vec::new(), Vec::new(), Vec::new());
        for module in modules {
            let name = module.name();
            let state = self.probe_next(module).await;
            if !state.status().is_dirty() {
                skipped.push(SkippedEntry::new(name, SKIP_NOTHING_TO_COMMIT));
                self.progress.inc(1);
                continue;
            }

            let branch = if state.has_known_branch() {
                state.branch()
            } else {
                &self.default_branch
            };
            match commit_and_push(self.runner, module.path(), message, branch, &self.remote).await
            {
                PushOutcome::Pushed { commit, message } => pushed.push(PushedEntry {
                    name: name.to_string(),
                    commit,
                    message,
                    branch: branch.to_string(),
                }),
                PushOutcome::NothingToCommit => {
                    skipped.push(SkippedEntry::new(name, SKIP_NOTHING_TO_COMMIT));
                }
                PushOutcome::Failed { error, commit } => {
                    warn!(module = name, error = %error, "push failed");
                    failed.push(FailedEntry {
                        name: name.to_string(),
                        error,
                        commit,
                    });
                }
            }
            self.progress.inc(1);
        }
        BatchReport::Push {
            pushed,
            failed,
            skipped,
        }
    }

    fn remote_url_of(&self, path: &Path) -> Option<String> {
        if !path.join(".git").exists() {
            return None;
        }
        remote_url(path, &self.remote).unwrap_or_else(|e| {
            debug!(path = %path.display(), error = %e, "remote url lookup failed");
            None
        })
    }
}
