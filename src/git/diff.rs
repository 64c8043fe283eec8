// adhd-rs: ADHD Framework Project Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Per-file diff statistics for uncommitted changes.
//!
//! ```text
//! diff --numstat            --> modified entries
//! diff --cached --numstat   --> merged by path (sums)
//! ls-files --others --exclude-standard -z
//!                           --> added entries, insertions = line count
//! ```

use serde::Serialize;
use std::fmt;
use std::path::Path;
use tracing::debug;

use super::backend::GitRunner;

/// How a file was touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Modified,
    Added,
}

/// One touched file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffChange {
    file: String,
    #[serde(rename = "type")]
    kind: ChangeKind,
    insertions: u64,
    /// Unknown for untracked files.
    #[serde(skip_serializing_if = "Option::is_none")]
    deletions: Option<u64>,
}

impl DiffChange {
    #[must_use]
    pub fn modified(file: impl Into<String>, insertions: u64, deletions: u64) -> Self {
        Self {
            file: file.into(),
            kind: ChangeKind::Modified,
            insertions,
            deletions: Some(deletions),
        }
    }

    #[must_use]
    pub fn added(file: impl Into<String>, insertions: u64) -> Self {
        Self {
            file: file.into(),
            kind: ChangeKind::Added,
            insertions,
            deletions: None,
        }
    }

    #[must_use]
    pub fn file(&self) -> &str {
        &self.file
    }

    #[must_use]
    pub const fn kind(&self) -> ChangeKind {
        self.kind
    }

    #[must_use]
    pub const fn insertions(&self) -> u64 {
        self.insertions
    }

    #[must_use]
    pub const fn deletions(&self) -> Option<u64> {
        self.deletions
    }
}

/// Totals over a change list, shown as `+<ins> -<del> in <n> files`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DiffSummary {
    pub insertions: u64,
    pub deletions: u64,
    pub files: usize,
}

impl DiffSummary {
    #[must_use]
    pub fn of(changes: &[DiffChange]) -> Self {
        Self {
            insertions: changes.iter().map(DiffChange::insertions).sum(),
            deletions: changes.iter().filter_map(DiffChange::deletions).sum(),
            files: changes.len(),
        }
    }
}

impl fmt::Display for DiffSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "+{} -{} in {} files",
            self.insertions, self.deletions, self.files
        )
    }
}

/// Collects unstaged, staged and untracked changes of `repo_path`.
///
/// Failing git commands contribute nothing. Unreadable untracked files are
/// reported with zero insertions.
pub async fn diff_stat<R: GitRunner>(runner: &R, repo_path: &Path) -> Vec<DiffChange> {
    let mut changes = Vec::new();

    for args in [
        &["diff", "--numstat"][..],
        &["diff", "--cached", "--numstat"][..],
    ] {
        match runner.run(args, repo_path).await {
            Ok(out) if out.success() => merge_numstat(&mut changes, out.stdout()),
            Ok(out) => debug!(path = %repo_path.display(), stderr = %out.stderr(), "numstat failed"),
            Err(e) => debug!(path = %repo_path.display(), error = %e, "numstat failed"),
        }
    }

    match runner
        .run(
            &["ls-files", "--others", "--exclude-standard", "-z"],
            repo_path,
        )
        .await
    {
        Ok(out) if out.success() => {
            for file in out.stdout().split('\0').filter(|f| !f.is_empty()) {
                let insertions = count_lines(&repo_path.join(file));
                changes.push(DiffChange::added(file, insertions));
            }
        }
        Ok(out) => debug!(path = %repo_path.display(), stderr = %out.stderr(), "ls-files failed"),
        Err(e) => debug!(path = %repo_path.display(), error = %e, "ls-files failed"),
    }

    changes
}

/// Merges `--numstat` output into `changes`, summing entries for the same path.
///
/// Binary files report `-` for both counts, which is read as zero.
pub fn merge_numstat(changes: &mut Vec<DiffChange>, numstat: &str) {
    for line in numstat.lines() {
        let mut parts = line.splitn(3, '\t');
        let (Some(ins), Some(del), Some(file)) = (parts.next(), parts.next(), parts.next()) else {
            continue;
        };
        let insertions = ins.parse().unwrap_or(0);
        let deletions = del.parse().unwrap_or(0);

        if let Some(existing) = changes.iter_mut().find(|c| c.file == file) {
            existing.insertions += insertions;
            existing.deletions = Some(existing.deletions.unwrap_or(0) + deletions);
        } else {
            changes.push(DiffChange::modified(file, insertions, deletions));
        }
    }
}

/// Number of lines in a file; a final line without newline still counts.
fn count_lines(path: &Path) -> u64 {
    match std::fs::read(path) {
        Ok(bytes) => count_lines_in(&bytes),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "cannot read untracked file");
            0
        }
    }
}

pub(crate) fn count_lines_in(bytes: &[u8]) -> u64 {
    let newlines = bytes.iter().filter(|&&b| b == b'\n').count() as u64;
    match bytes.last() {
        Some(b'\n') | None => newlines,
        Some(_) => newlines + 1,
    }
}
