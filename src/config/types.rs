// adhd-rs: ADHD Framework Project Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration section types.
//!
//! # Config Structure
//!
//! ```text
//! Config
//!   global     log levels, log file
//!   discovery  marker file, depth, skipped dirs, hidden layers
//!   imports    internal prefixes, extra stdlib names
//!   git        timeout, default branch, remote
//!   github     API url, token variable, visibility
//!   scaffold   per-layer target folders
//!   context    instruction/agent/prompt folders
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::logging::LogLevel;
use crate::module::record::Layer;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for stderr output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file (no file logging when unset).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::WARN,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// Module discovery options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiscoveryConfig {
    /// File whose presence marks a directory as a module.
    pub marker_file: String,
    /// Project-level metadata file at the root.
    pub project_file: String,
    /// How deep below the root modules are searched for.
    pub max_depth: usize,
    /// Directory names never descended into.
    pub skip_dirs: Vec<String>,
    /// Layers left out of listings unless requested explicitly.
    pub hidden_layers: Vec<Layer>,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            marker_file: "pyproject.toml".to_string(),
            project_file: "init.yaml".to_string(),
            max_depth: 3,
            skip_dirs: [
                "node_modules",
                "__pycache__",
                "venv",
                ".venv",
                "target",
                "dist",
                "build",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            hidden_layers: vec![Layer::Foundation],
        }
    }
}

/// Import classification options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImportsConfig {
    /// Namespaces treated as framework-internal, matched at a dot boundary.
    pub internal_prefixes: Vec<String>,
    /// Extra top-level names treated as standard library.
    pub extra_stdlib: Vec<String>,
}

impl Default for ImportsConfig {
    fn default() -> Self {
        Self {
            internal_prefixes: ["cores", "managers", "utils", "plugins", "mcps", "project"]
                .into_iter()
                .map(String::from)
                .collect(),
            extra_stdlib: Vec::new(),
        }
    }
}

/// Git execution options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GitConfig {
    /// Per-command timeout in seconds.
    pub timeout_secs: u64,
    /// Branch pushed to when the current branch cannot be determined.
    pub default_branch: String,
    /// Remote used for push and remote URL lookup.
    pub remote: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            default_branch: "main".to_string(),
            remote: "origin".to_string(),
        }
    }
}

impl GitConfig {
    /// Timeout as a `Duration`.
    #[must_use]
    pub const fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout_secs)
    }
}

/// Repository visibility for created repositories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

impl Visibility {
    /// Returns true for private repositories.
    #[must_use]
    pub const fn is_private(self) -> bool {
        matches!(self, Self::Private)
    }
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Public => write!(f, "public"),
            Self::Private => write!(f, "private"),
        }
    }
}

impl std::str::FromStr for Visibility {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "public" => Ok(Self::Public),
            "private" => Ok(Self::Private),
            _ => Err(ConfigError::InvalidValue {
                section: "github".to_string(),
                key: "visibility".to_string(),
                message: format!("expected 'public' or 'private', got '{s}'"),
            }),
        }
    }
}

/// GitHub API options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GithubConfig {
    /// REST API base URL.
    pub api_url: String,
    /// Environment variable holding the API token.
    pub token_env: String,
    /// Visibility of created repositories.
    pub visibility: Visibility,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.github.com".to_string(),
            token_env: "GITHUB_TOKEN".to_string(),
            visibility: Visibility::Public,
        }
    }
}

/// Module scaffolding options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScaffoldConfig {
    /// Folder for new foundation modules.
    pub foundation_dir: String,
    /// Folder for new runtime modules.
    pub runtime_dir: String,
    /// Folder for new dev modules.
    pub dev_dir: String,
    /// Folder for new MCP modules, whatever their layer.
    pub mcp_dir: String,
    /// Version written into new metadata.
    pub initial_version: String,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            foundation_dir: "cores".to_string(),
            runtime_dir: "managers".to_string(),
            dev_dir: "utils".to_string(),
            mcp_dir: "mcps".to_string(),
            initial_version: "0.1.0".to_string(),
        }
    }
}

impl ScaffoldConfig {
    /// Folder a new module is created in.
    #[must_use]
    pub fn folder_for(&self, layer: Layer, is_mcp: bool) -> &str {
        if is_mcp {
            return &self.mcp_dir;
        }
        match layer {
            Layer::Foundation => &self.foundation_dir,
            Layer::Runtime => &self.runtime_dir,
            Layer::Dev => &self.dev_dir,
        }
    }
}

/// AI context file locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContextConfig {
    /// Core data folder holding `instructions/`, `agents/`, `prompts/`.
    pub core_dir: String,
    /// Folder the core files are synced into.
    pub synced_dir: String,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            core_dir: "cores/instruction_core/data".to_string(),
            synced_dir: ".github".to_string(),
        }
    }
}
