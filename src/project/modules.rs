// adhd-rs: ADHD Framework Project Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `list_modules` and `get_module_info`.

use serde::Serialize;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::debug;

use super::response::{Report, ToolResult};
use super::{Project, not_found, parse_layers};
use crate::git::backend::GitRunner;
use crate::git::query::remote_url;
use crate::git::status::probe;
use crate::imports::{ImportSet, scan_module};
use crate::module::metadata::read_requirements_txt;
use crate::module::record::{Layer, ModuleIssue, ModuleRecord};

/// Imports shown in listings.
#[derive(Debug, Clone, Serialize)]
pub struct ListedImports {
    pub internal: BTreeSet<String>,
    pub third_party: BTreeSet<String>,
}

/// One entry of `list_modules`.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleSummary {
    pub name: String,
    pub layer: Layer,
    pub folder: String,
    pub is_mcp: bool,
    pub version: String,
    pub path: String,
    pub repo_url: Option<String>,
    pub has_issues: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imports: Option<ListedImports>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements_txt: Option<Vec<String>>,
}

impl ModuleSummary {
    fn of(module: &ModuleRecord, root: &Path) -> Self {
        Self {
            name: module.name().to_string(),
            layer: module.layer(),
            folder: module.folder().to_string(),
            is_mcp: module.is_mcp(),
            version: module.version().to_string(),
            path: module.relative_path(root),
            repo_url: module.repo_url().map(String::from),
            has_issues: module.has_issues(),
            imports: None,
            requirements: None,
            requirements_txt: None,
        }
    }
}

/// Result of `list_modules`.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleList {
    pub modules: Vec<ModuleSummary>,
    pub count: usize,
}

impl Report for ModuleList {}

/// Result of `get_module_info`.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleInfo {
    #[serde(flatten)]
    pub summary: ModuleSummary,
    pub remote_url: Option<String>,
    pub git_status: String,
    pub git_branch: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub git_changes: Option<u32>,
    pub imports: ImportSet,
    pub requirements: Vec<String>,
    pub requirements_txt: Vec<String>,
    pub issues: Vec<ModuleIssue>,
}

impl Report for ModuleInfo {}

impl<R: GitRunner> Project<R> {
    /// Modules in `layers`, or all but the hidden layers when none are given.
    ///
    /// # Errors
    ///
    /// `invalid_layer` for an unknown layer name, `scan_error` if the root
    /// cannot be walked.
    pub fn list_modules(
        &self,
        layers: Option<&[String]>,
        with_imports: bool,
    ) -> ToolResult<ModuleList> {
        let layers = parse_layers(layers)?;
        let catalog = self.scan()?;

        let modules: Vec<ModuleSummary> = catalog
            .filter(layers.as_deref(), &self.config.discovery.hidden_layers)
            .into_iter()
            .map(|module| {
                let mut summary = ModuleSummary::of(module, &self.root);
                if with_imports {
                    let imports = scan_module(module.path(), &self.classifier);
                    summary.imports = Some(ListedImports {
                        internal: imports.internal,
                        third_party: imports.third_party,
                    });
                    summary.requirements = Some(module.requirements().to_vec());
                    summary.requirements_txt = Some(read_requirements_txt(module.path()));
                }
                summary
            })
            .collect();

        let count = modules.len();
        Ok(ModuleList { modules, count })
    }

    /// Everything known about one module, including its git state.
    ///
    /// # Errors
    ///
    /// `module_not_found` with suggestions on a miss, `scan_error` if the
    /// root cannot be walked.
    pub async fn get_module_info(&self, name: &str) -> ToolResult<ModuleInfo> {
        let catalog = self.scan()?;
        let Some(module) = catalog.get(name) else {
            return Err(not_found(&catalog, name));
        };

        let state = probe(&self.runner, module.path()).await;
        let remote_url = if module.path().join(".git").exists() {
            remote_url(module.path(), &self.config.git.remote).unwrap_or_else(|e| {
                debug!(module = name, error = %e, "remote url lookup failed");
                None
            })
        } else {
            None
        };

        Ok(ModuleInfo {
            summary: ModuleSummary::of(module, &self.root),
            remote_url,
            git_status: state.status().as_str().to_string(),
            git_branch: state.branch().to_string(),
            git_changes: state.status().change_count(),
            imports: scan_module(module.path(), &self.classifier),
            requirements: module.requirements().to_vec(),
            requirements_txt: read_requirements_txt(module.path()),
            issues: module.issues().to_vec(),
        })
    }
}
