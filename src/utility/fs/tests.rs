// adhd-rs: ADHD Framework Project Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::walk::{WalkOptions, find_dirs_containing, find_files, find_files_with_extension};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn touch(root: &Path, rel: &str) {
    let path = root.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, "").unwrap();
}

fn relative(root: &Path, paths: &[PathBuf]) -> Vec<String> {
    paths
        .iter()
        .map(|p| {
            p.strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect()
}

#[test]
fn test_find_files_with_extension_skips_hidden_and_cache() {
    let temp = temp_dir();
    touch(temp.path(), "pkg/a.py");
    touch(temp.path(), "pkg/sub/b.py");
    touch(temp.path(), "pkg/__pycache__/a.cpython-312.py");
    touch(temp.path(), ".hidden/c.py");
    touch(temp.path(), "pkg/.d.py");
    touch(temp.path(), "pkg/notes.txt");

    let files =
        find_files_with_extension(temp.path(), "py", &WalkOptions::for_python_sources()).unwrap();

    assert_eq!(relative(temp.path(), &files), vec!["pkg/a.py", "pkg/sub/b.py"]);
}

#[test]
fn test_find_files_ignores_gitignore_by_default() {
    let temp = temp_dir();
    std::fs::create_dir(temp.path().join(".git")).unwrap();
    std::fs::write(temp.path().join(".gitignore"), "generated.py\n").unwrap();
    touch(temp.path(), "generated.py");

    let files = find_files_with_extension(temp.path(), "py", &WalkOptions::default()).unwrap();
    assert_eq!(relative(temp.path(), &files), vec!["generated.py"]);
}

#[test]
fn test_find_files_flat_glob() {
    let temp = temp_dir();
    touch(temp.path(), "b.agent.md");
    touch(temp.path(), "a.agent.md");
    touch(temp.path(), "readme.md");
    touch(temp.path(), "nested/c.agent.md");

    let files = find_files(temp.path(), "*.agent.md", &WalkOptions::flat()).unwrap();
    assert_eq!(
        relative(temp.path(), &files),
        vec!["a.agent.md", "b.agent.md"]
    );
}

#[test]
fn test_find_files_invalid_pattern() {
    let temp = temp_dir();
    assert!(find_files(temp.path(), "{a,b", &WalkOptions::default()).is_err());
}

#[test]
fn test_find_dirs_containing_respects_depth_and_skip_dirs() {
    let temp = temp_dir();
    touch(temp.path(), "pyproject.toml");
    touch(temp.path(), "managers/config_manager/pyproject.toml");
    touch(temp.path(), "utils/deep/a/b/c/pyproject.toml");
    touch(temp.path(), "node_modules/pkg/pyproject.toml");

    let options = WalkOptions::builder()
        .with_max_depth(3)
        .with_skip_dirs(vec!["node_modules".to_string()])
        .build();
    let dirs = find_dirs_containing(temp.path(), "pyproject.toml", &options).unwrap();

    assert_eq!(
        relative(temp.path(), &dirs),
        vec!["", "managers/config_manager"]
    );
}

#[test]
fn test_missing_root_is_error() {
    let temp = temp_dir();
    let missing = temp.path().join("missing");
    let err = find_dirs_containing(&missing, "pyproject.toml", &WalkOptions::default()).unwrap_err();
    assert!(err.to_string().starts_with("root directory does not exist"));
}
