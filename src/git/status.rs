// adhd-rs: ADHD Framework Project Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Repository state probe.
//!
//! ```text
//! probe(path)
//!   no .git ------------------------------> NotARepo
//!   rev-parse --abbrev-ref HEAD ----------> branch ("unknown" on failure)
//!   status --porcelain
//!     failed -----------------------------> Unknown
//!     non-empty --> parse_porcelain ------> Dirty { changed, added, deleted }
//!     empty --> rev-list --count @{u}..HEAD / HEAD..@{u}
//!               (failure counts as 0)
//!               ahead>0 && behind>0 ------> Diverged
//!               ahead>0 ------------------> Ahead
//!               behind>0 -----------------> Behind
//!               else ---------------------> Clean
//! ```

use serde::Serialize;
use std::path::Path;
use tracing::debug;

use super::backend::{GitOutput, GitRunner};

/// Branch reported when it cannot be determined.
pub const UNKNOWN_BRANCH: &str = "unknown";

/// Synchronization state of one working directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GitStatus {
    NotARepo,
    Clean,
    Dirty {
        changed: u32,
        added: u32,
        deleted: u32,
    },
    Ahead {
        commits: u32,
    },
    Behind {
        commits: u32,
    },
    Diverged {
        ahead: u32,
        behind: u32,
    },
    Unknown,
}

impl GitStatus {
    /// Name used in results (`not_a_repo`, `clean`, `dirty`, ...).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NotARepo => "not_a_repo",
            Self::Clean => "clean",
            Self::Dirty { .. } => "dirty",
            Self::Ahead { .. } => "ahead",
            Self::Behind { .. } => "behind",
            Self::Diverged { .. } => "diverged",
            Self::Unknown => "unknown",
        }
    }

    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        matches!(self, Self::Dirty { .. })
    }

    /// Number of changed files for a dirty tree, `None` otherwise.
    #[must_use]
    pub const fn change_count(&self) -> Option<u32> {
        match self {
            Self::Dirty {
                changed,
                added,
                deleted,
            } => Some(*changed + *added + *deleted),
            _ => None,
        }
    }
}

impl std::fmt::Display for GitStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot produced by [`probe`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GitState {
    branch: String,
    #[serde(flatten)]
    status: GitStatus,
}

impl GitState {
    #[must_use]
    pub fn new(branch: impl Into<String>, status: GitStatus) -> Self {
        Self {
            branch: branch.into(),
            status,
        }
    }

    #[must_use]
    pub fn not_a_repo() -> Self {
        Self::new(UNKNOWN_BRANCH, GitStatus::NotARepo)
    }

    #[must_use]
    pub fn branch(&self) -> &str {
        &self.branch
    }

    #[must_use]
    pub const fn status(&self) -> GitStatus {
        self.status
    }

    #[must_use]
    pub fn has_known_branch(&self) -> bool {
        self.branch != UNKNOWN_BRANCH
    }
}

/// Queries the synchronization state of `repo_path`.
///
/// Never fails: command failures degrade to `unknown` fields.
pub async fn probe<R: GitRunner>(runner: &R, repo_path: &Path) -> GitState {
    if !repo_path.join(".git").exists() {
        return GitState::not_a_repo();
    }

    let branch = match runner
        .run(&["rev-parse", "--abbrev-ref", "HEAD"], repo_path)
        .await
    {
        Ok(out) if out.success() && !out.stdout().trim().is_empty() => {
            out.stdout().trim().to_string()
        }
        _ => UNKNOWN_BRANCH.to_string(),
    };

    let listing = match runner.run(&["status", "--porcelain"], repo_path).await {
        Ok(out) if out.success() => out,
        Ok(out) => {
            debug!(path = %repo_path.display(), stderr = %out.stderr(), "status failed");
            return GitState::new(branch, GitStatus::Unknown);
        }
        Err(e) => {
            debug!(path = %repo_path.display(), error = %e, "status failed");
            return GitState::new(branch, GitStatus::Unknown);
        }
    };

    if listing.stdout().trim().is_empty() {
        let ahead = count_commits(runner, repo_path, "@{u}..HEAD").await;
        let behind = count_commits(runner, repo_path, "HEAD..@{u}").await;
        return GitState::new(branch, classify_divergence(ahead, behind));
    }

    GitState::new(branch, parse_porcelain(listing.stdout()))
}

/// Classifies `status --porcelain` output of a dirty tree.
///
/// A code containing `?` is added, one containing `D` is deleted, anything
/// else is changed. Lines shorter than the two-character code are ignored.
#[must_use]
pub fn parse_porcelain(listing: &str) -> GitStatus {
    let (mut changed, mut added, mut deleted) = (0, 0, 0);
    for line in listing.lines() {
        let Some(code) = line.get(..2) else {
            continue;
        };
        if code.contains('?') {
            added += 1;
        } else if code.contains('D') {
            deleted += 1;
        } else {
            changed += 1;
        }
    }
    GitStatus::Dirty {
        changed,
        added,
        deleted,
    }
}

/// Maps ahead/behind counts of a clean tree onto a status.
#[must_use]
pub const fn classify_divergence(ahead: u32, behind: u32) -> GitStatus {
    match (ahead, behind) {
        (0, 0) => GitStatus::Clean,
        (a, 0) => GitStatus::Ahead { commits: a },
        (0, b) => GitStatus::Behind { commits: b },
        (a, b) => GitStatus::Diverged {
            ahead: a,
            behind: b,
        },
    }
}

/// `rev-list --count <range>`; a missing upstream counts as zero.
async fn count_commits<R: GitRunner>(runner: &R, repo_path: &Path, range: &str) -> u32 {
    match runner.run(&["rev-list", "--count", range], repo_path).await {
        Ok(out) => parse_count(&out).unwrap_or_else(|| {
            debug!(path = %repo_path.display(), range, "no upstream count");
            0
        }),
        Err(e) => {
            debug!(path = %repo_path.display(), range, error = %e, "rev-list failed");
            0
        }
    }
}

fn parse_count(out: &GitOutput) -> Option<u32> {
    if !out.success() {
        return None;
    }
    out.stdout().trim().parse().ok()
}
