// adhd-rs: ADHD Framework Project Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem utilities with parallel traversal.
//!
//! ```text
//! walk:  find_files()                wax glob on root-relative paths
//!        find_files_with_extension() source files of one language
//!        find_dirs_containing()      directories holding a marker file
//!        WalkOptions                 max_depth, hidden, gitignore, skip_dirs
//! ```

pub mod walk;

#[cfg(test)]
mod tests;
