// adhd-rs: ADHD Framework Project Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::Result;
use bon::Builder;
use flume::unbounded;
use ignore::{DirEntry, WalkBuilder};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::warn;

/// Options for parallel directory traversal.
#[derive(Debug, Clone, Builder)]
pub struct WalkOptions {
    /// Maximum depth to traverse (None = unlimited)
    #[builder(setters(name = with_max_depth))]
    max_depth: Option<usize>,
    /// Follow symbolic links
    #[builder(setters(name = with_follow_links), default = false)]
    follow_links: bool,
    /// Include hidden files/directories
    #[builder(setters(name = with_include_hidden), default = false)]
    include_hidden: bool,
    /// Respect .gitignore files
    #[builder(setters(name = with_respect_gitignore), default = false)]
    respect_gitignore: bool,
    /// Number of threads (None = auto-detect based on CPU count)
    #[builder(setters(name = with_threads))]
    threads: Option<usize>,
    /// Skip directories matching these names (exact match)
    #[builder(setters(name = with_skip_dirs), default)]
    skip_dirs: Vec<String>,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl WalkOptions {
    /// Returns the maximum depth to traverse.
    #[must_use]
    pub const fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Returns whether to follow symbolic links.
    #[must_use]
    pub const fn follow_links(&self) -> bool {
        self.follow_links
    }

    /// Returns whether to include hidden files/directories.
    #[must_use]
    pub const fn include_hidden(&self) -> bool {
        self.include_hidden
    }

    /// Returns whether to respect .gitignore files.
    #[must_use]
    pub const fn respect_gitignore(&self) -> bool {
        self.respect_gitignore
    }

    /// Returns the number of threads (None = auto-detect).
    #[must_use]
    pub const fn threads(&self) -> Option<usize> {
        self.threads
    }

    /// Returns the skip directories list.
    #[must_use]
    pub fn skip_dirs(&self) -> &[String] {
        &self.skip_dirs
    }

    /// Options for scanning Python sources inside one module.
    ///
    /// Hidden entries and `__pycache__` are skipped; `.gitignore` is not
    /// consulted since generated sources are still imports of the module.
    #[must_use]
    pub fn for_python_sources() -> Self {
        Self::builder()
            .with_skip_dirs(vec!["__pycache__".to_string()])
            .build()
    }

    /// Options for a single directory level, used for context files.
    #[must_use]
    pub fn flat() -> Self {
        Self::builder().with_max_depth(1).build()
    }
}

/// Builds a `WalkBuilder` with the given options, using `filter_entry` for directory skipping.
pub(super) fn build_walker(root: &Path, options: &WalkOptions) -> WalkBuilder {
    let mut builder = WalkBuilder::new(root);

    if let Some(depth) = options.max_depth() {
        builder.max_depth(Some(depth));
    }

    builder.follow_links(options.follow_links());
    builder.hidden(!options.include_hidden());

    builder.git_ignore(options.respect_gitignore());
    builder.git_global(options.respect_gitignore());
    builder.git_exclude(options.respect_gitignore());
    builder.ignore(options.respect_gitignore());
    builder.parents(options.respect_gitignore());

    if let Some(threads) = options.threads() {
        builder.threads(threads);
    }

    // Evaluated before descending, so skipped trees are never read.
    if !options.skip_dirs().is_empty() {
        let skip_dirs: Arc<Vec<String>> = Arc::new(options.skip_dirs().to_vec());
        builder.filter_entry(move |entry| {
            if entry.file_type().is_some_and(|ft| ft.is_dir())
                && let Some(name) = entry.file_name().to_str()
                && skip_dirs.iter().any(|skip| skip == name)
            {
                return false;
            }
            true
        });
    }

    builder
}

/// Walks `root` in parallel and collects what `select` returns, sorted.
fn collect_sorted<F>(root: &Path, options: &WalkOptions, select: F) -> Result<Vec<PathBuf>>
where
    F: Fn(&DirEntry) -> Option<PathBuf> + Send + Sync,
{
    if !root.is_dir() {
        anyhow::bail!("root directory does not exist: {}", root.display());
    }

    // Unbounded: results are drained only after the walk finishes.
    let (tx, rx) = unbounded::<PathBuf>();
    let select = &select;

    build_walker(root, options).build_parallel().run(|| {
        let tx = tx.clone();
        Box::new(move |entry_result| {
            match entry_result {
                Ok(entry) => {
                    if let Some(path) = select(&entry) {
                        let _ = tx.send(path);
                    }
                }
                Err(e) => warn!(error = %e, "walk error"),
            }
            ignore::WalkState::Continue
        })
    });

    drop(tx);
    let mut paths: Vec<PathBuf> = rx.iter().collect();
    paths.sort();
    paths.dedup();
    Ok(paths)
}

fn is_file(entry: &DirEntry) -> bool {
    entry.file_type().is_some_and(|ft| ft.is_file())
}

/// Finds files whose root-relative path matches a `wax` glob pattern.
///
/// # Errors
///
/// Returns an error if the root directory does not exist or the glob
/// pattern is invalid.
///
/// # Example
/// ```no_run
/// use adhd_rs::utility::fs::walk::{find_files, WalkOptions};
///
/// let agents = find_files(".github/agents", "*.agent.md", &WalkOptions::flat())?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn find_files<P: AsRef<Path>>(
    root: P,
    pattern: &str,
    options: &WalkOptions,
) -> Result<Vec<PathBuf>> {
    use wax::{Glob, Program};

    let root = root.as_ref();
    let glob =
        Glob::new(pattern).map_err(|e| anyhow::anyhow!("invalid glob pattern '{pattern}': {e}"))?;

    collect_sorted(root, options, |entry| {
        let rel_path = entry.path().strip_prefix(root).ok()?;
        (is_file(entry) && glob.is_match(rel_path)).then(|| entry.path().to_path_buf())
    })
}

/// Finds files with the given extension (without the dot).
///
/// # Errors
///
/// Returns an error if the root directory does not exist.
pub fn find_files_with_extension<P: AsRef<Path>>(
    root: P,
    extension: &str,
    options: &WalkOptions,
) -> Result<Vec<PathBuf>> {
    collect_sorted(root.as_ref(), options, |entry| {
        (is_file(entry) && entry.path().extension().is_some_and(|ext| ext == extension))
            .then(|| entry.path().to_path_buf())
    })
}

/// Finds directories that directly contain a file named `marker`.
///
/// # Errors
///
/// Returns an error if the root directory does not exist.
pub fn find_dirs_containing<P: AsRef<Path>>(
    root: P,
    marker: &str,
    options: &WalkOptions,
) -> Result<Vec<PathBuf>> {
    collect_sorted(root.as_ref(), options, |entry| {
        if is_file(entry) && entry.file_name() == marker {
            entry.path().parent().map(Path::to_path_buf)
        } else {
            None
        }
    })
}
