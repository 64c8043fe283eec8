// adhd-rs: ADHD Framework Project Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Module discovery over a project root.
//!
//! ```text
//! root/
//!   cores/instruction_core/pyproject.toml     -> module "instruction_core"
//!   managers/config_manager/pyproject.toml    -> module "config_manager"
//!   managers/config_manager/sub/pyproject.toml   (nested: not reported)
//!   pyproject.toml                                (root: never a module)
//!
//! scan_all_modules  full metadata + issues, duplicate names resolved
//! list_all_modules  names and layers only, never reports issues
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::catalog::Catalog;
use super::metadata::{ModuleMetadata, read_module_metadata};
use super::record::{IssueCode, Layer, ModuleIssue, ModuleRecord};
use crate::config::types::DiscoveryConfig;
use crate::error::{AdhdError, ModuleError, Result};
use crate::utility::fs::walk::{WalkOptions, find_dirs_containing};

/// Walks a project root for module directories.
#[derive(Debug, Clone)]
pub struct ModuleScanner {
    root: PathBuf,
    marker_file: String,
    max_depth: usize,
    skip_dirs: Vec<String>,
}

impl ModuleScanner {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, config: &DiscoveryConfig) -> Self {
        Self {
            root: root.into(),
            marker_file: config.marker_file.clone(),
            max_depth: config.max_depth,
            skip_dirs: config.skip_dirs.clone(),
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Module directories under the root, sorted by path.
    ///
    /// # Errors
    ///
    /// Returns an error if the root is not a directory.
    pub fn module_dirs(&self) -> Result<Vec<PathBuf>> {
        let options = WalkOptions::builder()
            // Marker files sit one level below the deepest module directory.
            .with_max_depth(self.max_depth.saturating_add(1))
            .with_skip_dirs(self.skip_dirs.clone())
            .build();

        let dirs = find_dirs_containing(&self.root, &self.marker_file, &options)?;
        Ok(outermost(&self.root, dirs))
    }

    /// Full scan: parse every module's metadata and collect issues.
    ///
    /// # Errors
    ///
    /// Returns an error if the root is not a directory. Malformed modules are
    /// reported through their issues instead.
    pub fn scan_all_modules(&self) -> Result<Catalog> {
        let mut records: Vec<ModuleRecord> = Vec::new();
        let mut by_name: HashMap<String, usize> = HashMap::new();

        for dir in self.module_dirs()? {
            let record = self.build_record(&dir);
            if let Some(&first) = by_name.get(record.name()) {
                warn!(
                    module = record.name(),
                    path = %dir.display(),
                    "duplicate module name, keeping first by path"
                );
                let issue = ModuleIssue::new(
                    IssueCode::DuplicateName,
                    format!(
                        "Another module named '{}' exists at {}",
                        record.name(),
                        record.relative_path(&self.root)
                    ),
                );
                records[first].push_issue(issue);
                continue;
            }
            by_name.insert(record.name().to_string(), records.len());
            records.push(record);
        }

        debug!(root = %self.root.display(), modules = records.len(), "scanned modules");
        Ok(Catalog::new(self.root.clone(), records))
    }

    /// Light scan: names and layers only, never fails on metadata.
    ///
    /// # Errors
    ///
    /// Returns an error if the root is not a directory.
    pub fn list_all_modules(&self) -> Result<Catalog> {
        let mut seen = std::collections::HashSet::new();
        let records = self
            .module_dirs()?
            .into_iter()
            .filter_map(|dir| {
                let metadata = read_module_metadata(&dir, &self.marker_file).unwrap_or_default();
                let name = metadata.name.clone().unwrap_or_else(|| dir_name(&dir));
                if !seen.insert(name.clone()) {
                    return None;
                }
                let layer = metadata
                    .layer
                    .as_deref()
                    .and_then(|l| l.parse::<Layer>().ok())
                    .unwrap_or_default();
                Some(
                    ModuleRecord::builder()
                        .with_name(name)
                        .with_layer(layer)
                        .with_folder(self.folder_of(&dir))
                        .with_is_mcp(metadata.is_mcp)
                        .with_path(dir)
                        .build(),
                )
            })
            .collect();

        Ok(Catalog::new(self.root.clone(), records))
    }

    /// Rescan and look `name` up.
    ///
    /// # Errors
    ///
    /// Returns an error if the root is not a directory.
    pub fn get_module_by_name(&self, name: &str) -> Result<Option<ModuleRecord>> {
        Ok(self.scan_all_modules()?.get(name).cloned())
    }

    fn folder_of(&self, dir: &Path) -> String {
        let rel = dir.strip_prefix(&self.root).unwrap_or(dir);
        let mut components = rel.components();
        match (components.next(), components.next()) {
            (Some(first), Some(_)) => first.as_os_str().to_string_lossy().into_owned(),
            _ => ".".to_string(),
        }
    }

    fn build_record(&self, dir: &Path) -> ModuleRecord {
        let dir_name = dir_name(dir);
        let mut issues = Vec::new();

        let metadata = match read_module_metadata(dir, &self.marker_file) {
            Ok(metadata) => {
                if !metadata.has_project_table {
                    issues.push(ModuleIssue::new(
                        IssueCode::MissingMetadata,
                        format!("{} has no [project] table", self.marker_file),
                    ));
                }
                metadata
            }
            Err(e) => {
                let code = match &e {
                    AdhdError::Module(inner)
                        if matches!(**inner, ModuleError::MetadataMissing { .. }) =>
                    {
                        IssueCode::MissingMetadata
                    }
                    _ => IssueCode::InvalidMetadata,
                };
                debug!(path = %dir.display(), error = %e, "unusable module metadata");
                issues.push(ModuleIssue::new(code, e.to_string()));
                ModuleMetadata::default()
            }
        };
        let metadata_usable = issues.is_empty();

        let name = match &metadata.name {
            Some(name) => {
                if normalize(name) != normalize(&dir_name) {
                    issues.push(ModuleIssue::new(
                        IssueCode::NameMismatch,
                        format!("Declared name '{name}' differs from directory '{dir_name}'"),
                    ));
                }
                name.clone()
            }
            None => {
                if metadata_usable {
                    issues.push(ModuleIssue::new(
                        IssueCode::MissingName,
                        format!("No project name declared, using '{dir_name}'"),
                    ));
                }
                dir_name.clone()
            }
        };

        let version = match &metadata.version {
            Some(version) => {
                if let Err(e) = semver::Version::parse(version) {
                    issues.push(ModuleIssue::new(
                        IssueCode::InvalidVersion,
                        format!("Version '{version}' is not semantic: {e}"),
                    ));
                }
                version.clone()
            }
            None => {
                if metadata_usable {
                    issues.push(ModuleIssue::new(
                        IssueCode::MissingVersion,
                        "No version declared, using 0.0.0",
                    ));
                }
                "0.0.0".to_string()
            }
        };

        let layer = match metadata.layer.as_deref() {
            Some(text) => text.parse::<Layer>().unwrap_or_else(|_| {
                issues.push(ModuleIssue::new(
                    IssueCode::InvalidLayer,
                    format!(
                        "Layer '{text}' is not one of {}, using runtime",
                        Layer::valid_names()
                    ),
                ));
                Layer::Runtime
            }),
            None => {
                if metadata_usable {
                    issues.push(ModuleIssue::new(
                        IssueCode::MissingLayer,
                        "No [tool.adhd] layer declared, using runtime",
                    ));
                }
                Layer::Runtime
            }
        };

        ModuleRecord::builder()
            .with_name(name)
            .with_layer(layer)
            .with_folder(self.folder_of(dir))
            .with_is_mcp(metadata.is_mcp)
            .with_version(version)
            .with_path(dir.to_path_buf())
            .maybe_with_repo_url(metadata.repo_url)
            .with_requirements(metadata.dependencies)
            .with_issues(issues)
            .build()
    }
}

fn dir_name(dir: &Path) -> String {
    dir.file_name()
        .map_or_else(String::new, |n| n.to_string_lossy().into_owned())
}

/// Package names compare equal across `-`/`_` and case.
fn normalize(name: &str) -> String {
    name.to_ascii_lowercase().replace('-', "_")
}

/// Drop the root and any directory nested inside another module.
fn outermost(root: &Path, mut dirs: Vec<PathBuf>) -> Vec<PathBuf> {
    dirs.sort();
    let mut kept: Vec<PathBuf> = Vec::new();
    for dir in dirs {
        if dir == root || kept.iter().any(|k| dir.starts_with(k)) {
            continue;
        }
        kept.push(dir);
    }
    kept
}
