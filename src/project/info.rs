// adhd-rs: ADHD Framework Project Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `get_project_info` and the project file reader.

use serde::Serialize;
use serde_yaml::Value;
use std::collections::BTreeMap;
use std::path::Path;

use super::response::{ErrorCode, Report, ToolError, ToolResult};
use super::Project;
use crate::git::backend::GitRunner;
use crate::module::record::Layer;

/// Declared project metadata from the root project file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectConfig {
    pub name: String,
    pub version: String,
    pub description: String,
    pub modules_registered: Vec<String>,
}

/// Result of `get_project_info`.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectInfo {
    #[serde(flatten)]
    pub config: ProjectConfig,
    pub root: String,
    pub module_counts: BTreeMap<Layer, usize>,
    pub module_total: usize,
}

impl Report for ProjectInfo {}

/// Reads `<root>/<file_name>` (YAML).
///
/// Absent keys fall back to the root directory name, `0.0.0`, an empty
/// description and no registered modules. Scalars of any type are accepted
/// for the text fields.
///
/// # Errors
///
/// `project_config_not_found` if the file is absent, `read_error` if it
/// cannot be read and `invalid_project_config` if it is not a YAML mapping.
pub fn read_project_config(root: &Path, file_name: &str) -> ToolResult<ProjectConfig> {
    let path = root.join(file_name);
    if !path.is_file() {
        return Err(ToolError::new(
            ErrorCode::ProjectConfigNotFound,
            format!("{file_name} not found in project root"),
        ));
    }

    let content = std::fs::read_to_string(&path).map_err(|e| {
        ToolError::new(
            ErrorCode::ReadError,
            format!("Failed to read {}: {e}", path.display()),
        )
    })?;

    let doc: Value = serde_yaml::from_str(&content).map_err(|e| {
        ToolError::new(
            ErrorCode::InvalidProjectConfig,
            format!("Failed to parse {file_name}: {e}"),
        )
    })?;
    let Value::Mapping(map) = doc else {
        return Err(ToolError::new(
            ErrorCode::InvalidProjectConfig,
            format!("{file_name} must contain a mapping"),
        ));
    };

    let field = |key: &str| map.get(key).and_then(scalar_text);
    let root_name = root
        .file_name()
        .map_or_else(String::new, |n| n.to_string_lossy().into_owned());

    let modules_registered = match map.get("modules") {
        Some(Value::Sequence(items)) => items.iter().filter_map(scalar_text).collect(),
        _ => Vec::new(),
    };

    Ok(ProjectConfig {
        name: field("name").unwrap_or(root_name),
        version: field("version").unwrap_or_else(|| "0.0.0".to_string()),
        description: field("description").unwrap_or_default(),
        modules_registered,
    })
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

impl<R: GitRunner> Project<R> {
    /// Project metadata plus module counts from a full scan.
    ///
    /// # Errors
    ///
    /// See [`read_project_config`]; a failed scan is `scan_error`.
    pub fn get_project_info(&self) -> ToolResult<ProjectInfo> {
        let config = read_project_config(&self.root, &self.config.discovery.project_file)?;
        let catalog = self.scan()?;

        Ok(ProjectInfo {
            config,
            root: self.root.display().to_string(),
            module_counts: catalog.counts_by_layer(),
            module_total: catalog.len(),
        })
    }
}
