// adhd-rs: ADHD Framework Project Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Classification of `git commit` output.
//!
//! ```text
//! exit 0                                     --> Committed
//! stdout+stderr contains a marker (any case) --> NothingToCommit
//! otherwise                                  --> Failed(stderr or stdout)
//! ```
//!
//! Markers are matched against output produced with `LC_ALL=C`.

use super::backend::GitOutput;

/// Substrings git prints when a commit has nothing to record.
///
/// | marker                         | printed when                              |
/// |--------------------------------|-------------------------------------------|
/// | `nothing to commit`            | tree is clean                             |
/// | `nothing added to commit`      | only untracked files are present          |
/// | `no changes added to commit`   | changes exist but none are staged         |
pub const NOTHING_TO_COMMIT_MARKERS: &[&str] = &[
    "nothing to commit",
    "nothing added to commit",
    "no changes added to commit",
];

/// Result of the commit step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitStep {
    Committed,
    NothingToCommit,
    Failed(String),
}

/// True if `text` carries one of [`NOTHING_TO_COMMIT_MARKERS`].
#[must_use]
pub fn is_nothing_to_commit(text: &str) -> bool {
    let lower = text.to_lowercase();
    NOTHING_TO_COMMIT_MARKERS
        .iter()
        .any(|marker| lower.contains(marker))
}

/// Classifies the output of `git commit`.
#[must_use]
pub fn classify_commit(output: &GitOutput) -> CommitStep {
    if output.success() {
        return CommitStep::Committed;
    }
    if is_nothing_to_commit(&output.combined()) {
        return CommitStep::NothingToCommit;
    }
    CommitStep::Failed(error_text(output))
}

/// Stderr if present, stdout otherwise, trimmed.
#[must_use]
pub fn error_text(output: &GitOutput) -> String {
    let stderr = output.stderr().trim();
    if stderr.is_empty() {
        output.stdout().trim().to_string()
    } else {
        stderr.to_string()
    }
}
