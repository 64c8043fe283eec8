// adhd-rs: ADHD Framework Project Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Repository mutators.
//!
//! ```text
//! pull(path)            git pull --> Pulled { message } | Failed { error }
//!
//! commit_and_push(path, message, branch, remote)
//!   add --all           failed --> Failed { "Failed to stage changes: ..." }
//!   commit -m message   classify_commit()
//!                         NothingToCommit --> NothingToCommit
//!                         Failed ---------> Failed { "Failed to commit: ..." }
//!   rev-parse --short HEAD  (best effort, "unknown")
//!   push -u remote branch   failed --> Failed { "Failed to push: ...", commit }
//!                     --> Pushed { commit, message }
//! ```

use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};

use super::backend::GitRunner;
use super::outcome::{CommitStep, classify_commit, error_text};

/// Commit hash reported when `rev-parse` fails.
pub const UNKNOWN_COMMIT: &str = "unknown";

/// Outcome of [`pull`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PullOutcome {
    Pulled { message: String },
    Failed { error: String },
}

/// Outcome of [`commit_and_push`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PushOutcome {
    Pushed {
        commit: String,
        message: String,
    },
    NothingToCommit,
    Failed {
        error: String,
        /// Set when the commit was recorded before the push failed.
        #[serde(skip_serializing_if = "Option::is_none")]
        commit: Option<String>,
    },
}

/// Fetches and merges the upstream of the current branch.
///
/// Any failure carries git's error text verbatim.
pub async fn pull<R: GitRunner>(runner: &R, repo_path: &Path) -> PullOutcome {
    match runner.run(&["pull"], repo_path).await {
        Ok(out) if out.success() => {
            debug!(path = %repo_path.display(), "pulled");
            PullOutcome::Pulled {
                message: out.stdout().trim().to_string(),
            }
        }
        Ok(out) => PullOutcome::Failed {
            error: error_text(&out),
        },
        Err(e) => PullOutcome::Failed {
            error: e.to_string(),
        },
    }
}

/// Stages everything, commits with `message` and pushes `branch` to `remote`.
pub async fn commit_and_push<R: GitRunner>(
    runner: &R,
    repo_path: &Path,
    message: &str,
    branch: &str,
    remote: &str,
) -> PushOutcome {
    match runner.run(&["add", "--all"], repo_path).await {
        Ok(out) if out.success() => {}
        Ok(out) => return failed(format!("Failed to stage changes: {}", error_text(&out)), None),
        Err(e) => return failed(format!("Failed to stage changes: {e}"), None),
    }

    match runner.run(&["commit", "-m", message], repo_path).await {
        Ok(out) => match classify_commit(&out) {
            CommitStep::Committed => {}
            CommitStep::NothingToCommit => return PushOutcome::NothingToCommit,
            CommitStep::Failed(error) => return failed(format!("Failed to commit: {error}"), None),
        },
        Err(e) => return failed(format!("Failed to commit: {e}"), None),
    }

    let commit = match runner.run(&["rev-parse", "--short", "HEAD"], repo_path).await {
        Ok(out) if out.success() && !out.stdout().trim().is_empty() => {
            out.stdout().trim().to_string()
        }
        _ => UNKNOWN_COMMIT.to_string(),
    };

    match runner.run(&["push", "-u", remote, branch], repo_path).await {
        Ok(out) if out.success() => {
            info!(path = %repo_path.display(), commit = %commit, branch, "pushed");
            PushOutcome::Pushed {
                commit,
                message: message.to_string(),
            }
        }
        Ok(out) => failed(
            format!("Failed to push: {}", error_text(&out)),
            Some(commit),
        ),
        Err(e) => failed(format!("Failed to push: {e}"), Some(commit)),
    }
}

const fn failed(error: String, commit: Option<String>) -> PushOutcome {
    PushOutcome::Failed { error, commit }
}
