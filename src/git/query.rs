// adhd-rs: ADHD Framework Project Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Read-only repository queries using gix.
//!
//! ```text
//! query.rs --> gix::open(path) --> .git/config (no subprocess)
//! ```

use std::path::Path;

use crate::error::{AdhdResult, GitError, GixError};

/// Fetch URL of `remote` in the repository at `path`.
///
/// Returns `Ok(None)` when the remote is not configured or has no URL.
///
/// # Errors
///
/// Returns a `GitError` if the repository cannot be opened.
pub fn remote_url(path: &Path, remote: &str) -> AdhdResult<Option<String>> {
    let repo = gix::open(path).map_err(|e| GitError::Gix(GixError::Open(Box::new(e))))?;
    let Ok(found) = repo.find_remote(remote) else {
        return Ok(None);
    };
    Ok(found
        .url(gix::remote::Direction::Fetch)
        .map(|url| url.to_bstring().to_string()))
}
