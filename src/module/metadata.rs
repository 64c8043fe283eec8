// adhd-rs: ADHD Framework Project Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Module metadata readers.
//!
//! ```text
//! pyproject.toml
//!   [project]        name, version, dependencies
//!   [project.urls]   Repository | Source | Homepage  (case-insensitive)
//!   [tool.adhd]      layer, mcp
//!
//! requirements.txt   one requirement per line; blanks, '#' and '-' options skipped
//! ```

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::trace;

use crate::error::{AdhdResult, FsError, ModuleError};

/// Keys under `[project.urls]` that name the repository, by preference.
const REPOSITORY_URL_KEYS: [&str; 3] = ["repository", "source", "homepage"];

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PyProject {
    project: Option<ProjectTable>,
    tool: ToolTable,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ProjectTable {
    name: Option<String>,
    version: Option<String>,
    dependencies: Vec<String>,
    urls: BTreeMap<String, String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ToolTable {
    adhd: AdhdTable,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AdhdTable {
    layer: Option<String>,
    mcp: bool,
}

/// Declared metadata of one module, as written in its marker file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleMetadata {
    /// False when the file has no `[project]` table.
    pub has_project_table: bool,
    pub name: Option<String>,
    pub version: Option<String>,
    pub dependencies: Vec<String>,
    /// Raw layer text, validated by discovery.
    pub layer: Option<String>,
    pub is_mcp: bool,
    pub repo_url: Option<String>,
}

/// Parse `pyproject.toml` content.
///
/// # Errors
///
/// Returns the TOML error message when the content does not parse.
pub fn parse_module_metadata(content: &str) -> Result<ModuleMetadata, String> {
    let doc: PyProject = toml::from_str(content).map_err(|e| e.message().to_string())?;
    let has_project_table = doc.project.is_some();
    let project = doc.project.unwrap_or_default();

    let repo_url = REPOSITORY_URL_KEYS.iter().find_map(|wanted| {
        project
            .urls
            .iter()
            .find(|(key, value)| key.eq_ignore_ascii_case(wanted) && !value.trim().is_empty())
            .map(|(_, value)| value.trim().to_string())
    });

    Ok(ModuleMetadata {
        has_project_table,
        name: non_blank(project.name),
        version: non_blank(project.version),
        dependencies: project.dependencies,
        layer: non_blank(doc.tool.adhd.layer),
        is_mcp: doc.tool.adhd.mcp,
        repo_url,
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Read the marker file `file_name` in `module_dir`.
///
/// # Errors
///
/// `ModuleError::MetadataMissing` when the file is absent,
/// `ModuleError::MetadataInvalid` when it does not parse and
/// `FsError::IoError` when it cannot be read.
pub fn read_module_metadata(module_dir: &Path, file_name: &str) -> AdhdResult<ModuleMetadata> {
    let path = module_dir.join(file_name);
    if !path.is_file() {
        return Err(ModuleError::MetadataMissing {
            path: path.display().to_string(),
        }
        .into());
    }

    let content = std::fs::read_to_string(&path).map_err(|source| FsError::IoError {
        path: path.display().to_string(),
        source,
    })?;
    trace!(path = %path.display(), bytes = content.len(), "read module metadata");

    parse_module_metadata(&content).map_err(|message| {
        ModuleError::MetadataInvalid {
            path: path.display().to_string(),
            message,
        }
        .into()
    })
}

/// Read `requirements.txt` in `module_dir`; missing or unreadable files give an empty list.
#[must_use]
pub fn read_requirements_txt(module_dir: &Path) -> Vec<String> {
    std::fs::read_to_string(module_dir.join("requirements.txt"))
        .map(|content| parse_requirements(&content))
        .unwrap_or_default()
}

/// Requirement lines of a `requirements.txt` body.
#[must_use]
pub fn parse_requirements(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('-'))
        .map(String::from)
        .collect()
}
