// adhd-rs: ADHD Framework Project Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Module record types.
//!
//! ```text
//! ModuleRecord
//!   name       unique within one scan
//!   layer      foundation | runtime | dev
//!   folder     first path segment under the root ("." at root level)
//!   is_mcp     exposes an agent tool server
//!   version    declared version ("0.0.0" when missing)
//!   path       absolute module directory
//!   repo_url   declared repository URL
//!   requirements  declared dependencies
//!   issues     advisory findings, in discovery order
//! ```

use bon::Builder;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::ModuleError;

/// Classification axis for modules.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    /// Framework core, hidden from default listings.
    Foundation,
    /// Managers and plugins used at run time.
    #[default]
    Runtime,
    /// Developer tooling.
    Dev,
}

impl Layer {
    pub const ALL: [Self; 3] = [Self::Foundation, Self::Runtime, Self::Dev];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Foundation => "foundation",
            Self::Runtime => "runtime",
            Self::Dev => "dev",
        }
    }

    /// Comma-separated list of valid names, for messages.
    #[must_use]
    pub fn valid_names() -> String {
        Self::ALL.map(Self::as_str).join(", ")
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Layer {
    type Err = ModuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "foundation" => Ok(Self::Foundation),
            "runtime" => Ok(Self::Runtime),
            "dev" => Ok(Self::Dev),
            _ => Err(ModuleError::InvalidLayer {
                layer: s.to_string(),
            }),
        }
    }
}

/// Kind of advisory finding collected during discovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    InvalidMetadata,
    MissingMetadata,
    MissingName,
    NameMismatch,
    MissingVersion,
    InvalidVersion,
    MissingLayer,
    InvalidLayer,
    DuplicateName,
}

/// One advisory finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleIssue {
    pub code: IssueCode,
    pub message: String,
}

impl ModuleIssue {
    #[must_use]
    pub fn new(code: IssueCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// One discovered module. Never mutated after discovery.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct ModuleRecord {
    #[builder(setters(name = with_name), into)]
    name: String,
    #[builder(setters(name = with_layer), default)]
    layer: Layer,
    #[builder(setters(name = with_folder), into, default = ".".to_string())]
    folder: String,
    #[builder(setters(name = with_is_mcp), default = false)]
    is_mcp: bool,
    #[builder(setters(name = with_version), into, default = "0.0.0".to_string())]
    version: String,
    #[builder(setters(name = with_path), into)]
    path: PathBuf,
    #[builder(setters(name = with_repo_url))]
    repo_url: Option<String>,
    #[builder(setters(name = with_requirements), default)]
    requirements: Vec<String>,
    #[builder(setters(name = with_issues), default)]
    issues: Vec<ModuleIssue>,
}

impl ModuleRecord {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn layer(&self) -> Layer {
        self.layer
    }

    #[must_use]
    pub fn folder(&self) -> &str {
        &self.folder
    }

    #[must_use]
    pub const fn is_mcp(&self) -> bool {
        self.is_mcp
    }

    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn repo_url(&self) -> Option<&str> {
        self.repo_url.as_deref()
    }

    #[must_use]
    pub fn requirements(&self) -> &[String] {
        &self.requirements
    }

    #[must_use]
    pub fn issues(&self) -> &[ModuleIssue] {
        &self.issues
    }

    #[must_use]
    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    /// `path` relative to `root`, `/`-separated.
    #[must_use]
    pub fn relative_path(&self, root: &Path) -> String {
        let rel = self.path.strip_prefix(root).unwrap_or(&self.path);
        let text = rel.to_string_lossy().replace('\\', "/");
        if text.is_empty() { ".".to_string() } else { text }
    }

    pub(crate) fn push_issue(&mut self, issue: ModuleIssue) {
        self.issues.push(issue);
    }
}
