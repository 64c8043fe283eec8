// adhd-rs: ADHD Framework Project Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Project context and the operations exposed to front ends.
//!
//! ```text
//! Project { root, config, runner, github? }       built once per process
//!   get_project_info()                           info.rs
//!   list_modules(layers?, with_imports)          modules.rs
//!   get_module_info(name)                        modules.rs
//!   create_module(request)                       create.rs
//!   list_context_files(file_type?, modules)      context_files.rs
//!   git_modules(request)                         git.rs
//!
//! Every operation returns ToolResult<T>; nothing escapes as a panic or
//! an untyped error. Every call rescans the root.
//! ```

mod context_files;
mod create;
mod git;
mod info;
mod modules;
pub mod response;


pub use context_files::{ContextFile, ContextFiles, FileType};
pub use create::{CreateModuleRequest, CreatedModule};
pub use git::GitModulesRequest;
pub use info::{ProjectConfig, ProjectInfo, read_project_config};
pub use modules::{ListedImports, ModuleInfo, ModuleList, ModuleSummary};
pub use response::{
    Envelope, ErrorCode, ErrorKind, Report, ToolError, ToolResult, envelope, is_success,
    render_json,
};

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::Config;
use crate::git::backend::{GitRunner, ShellBackend};
use crate::imports::ImportClassifier;
use crate::module::catalog::Catalog;
use crate::module::discovery::ModuleScanner;
use crate::module::record::Layer;
use crate::net::GithubClient;

/// Explicit context handed to every operation.
#[derive(Debug)]
pub struct Project<R: GitRunner = ShellBackend> {
    root: PathBuf,
    config: Config,
    runner: R,
    classifier: ImportClassifier,
    github: Option<GithubClient>,
}

impl Project<ShellBackend> {
    /// Project at `root` running the `git` binary.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, config: Config) -> Self {
        let runner = ShellBackend::new(config.git.timeout());
        Self::with_runner(root, config, runner)
    }
}

impl<R: GitRunner> Project<R> {
    /// Project at `root` with a custom git runner.
    #[must_use]
    pub fn with_runner(root: impl Into<PathBuf>, config: Config, runner: R) -> Self {
        let root: PathBuf = root.into();
        let root = std::fs::canonicalize(&root).unwrap_or(root);
        let classifier = ImportClassifier::from_config(&config.imports);
        debug!(root = %root.display(), "project context");
        Self {
            root,
            config,
            runner,
            classifier,
            github: None,
        }
    }

    /// Uses `client` instead of one built from the environment.
    #[must_use]
    pub fn with_github(mut self, client: GithubClient) -> Self {
        self.github = Some(client);
        self
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub const fn runner(&self) -> &R {
        &self.runner
    }

    fn scanner(&self) -> ModuleScanner {
        ModuleScanner::new(&self.root, &self.config.discovery)
    }

    fn scan(&self) -> ToolResult<Catalog> {
        self.scanner()
            .scan_all_modules()
            .map_err(|e| ToolError::new(ErrorCode::ScanError, format!("{e:#}")))
    }

    fn list(&self) -> ToolResult<Catalog> {
        self.scanner()
            .list_all_modules()
            .map_err(|e| ToolError::new(ErrorCode::ScanError, format!("{e:#}")))
    }

    fn github(&self) -> crate::error::AdhdResult<GithubClient> {
        match &self.github {
            Some(client) => Ok(client.clone()),
            None => GithubClient::from_config(&self.config.github),
        }
    }
}

/// Parses layer names; `None` stays `None`.
fn parse_layers(layers: Option<&[String]>) -> ToolResult<Option<Vec<Layer>>> {
    layers
        .map(|names| {
            names
                .iter()
                .map(|name| name.parse::<Layer>().map_err(ToolError::from))
                .collect::<ToolResult<Vec<_>>>()
        })
        .transpose()
}

/// `module_not_found` with suggestions from `catalog`.
fn not_found(catalog: &Catalog, name: &str) -> ToolError {
    ToolError::new(
        ErrorCode::ModuleNotFound,
        format!("Module '{name}' not found"),
    )
    .with_suggestions(catalog.suggest(name))
}
