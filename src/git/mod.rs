// adhd-rs: ADHD Framework Project Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git operations module.
//!
//! ```text
//!        Public API
//!   status.rs  diff.rs  ops.rs      query.rs
//!   (probe)   (numstat) (pull/push)  (remote url)
//!        \       |       /              |
//!         v      v      v               v
//!      ,------------------,        gix::open
//!      | backend::GitRunner|        (pure Rust, read)
//!      '---------+--------'
//!                |
//!        ShellBackend (git CLI, timeout)
//!
//!   outcome.rs: commit output --> Committed | NothingToCommit | Failed
//! ```
//!
//! **`ShellBackend`** runs the git CLI through the process runner.
//! **`query`** reads repository configuration with gix, no subprocess.

pub mod backend;
pub mod diff;
pub mod ops;
pub mod outcome;
pub mod query;
pub mod status;

#[cfg(test)]
pub(crate) mod test_utils;
#[cfg(test)]
mod tests;

pub use backend::{GitOutput, GitRunner, ShellBackend};
pub use diff::{ChangeKind, DiffChange, DiffSummary, diff_stat};
pub use ops::{PullOutcome, PushOutcome, commit_and_push, pull};
pub use status::{GitState, GitStatus, probe};
