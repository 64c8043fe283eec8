// adhd-rs: ADHD Framework Project Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for adhd-rs.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. <root>/adhd.toml
//! 3. --config FILE (repeatable)
//! 4. ADHD_* env vars
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! ADHD_GIT__TIMEOUT_SECS=60          → git.timeout_secs = 60
//! ADHD_GIT__DEFAULT_BRANCH=master    → git.default_branch = "master"
//! ADHD_DISCOVERY__MAX_DEPTH=4        → discovery.max_depth = 4
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

use loader::ConfigLoader;
use types::{
    ContextConfig, DiscoveryConfig, GitConfig, GithubConfig, GlobalConfig, ImportsConfig,
    ScaffoldConfig,
};

/// File name of the project-level configuration, looked up in the root.
pub const CONFIG_FILE_NAME: &str = "adhd.toml";

/// Prefix of environment overrides.
pub const ENV_PREFIX: &str = "ADHD";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Module discovery.
    pub discovery: DiscoveryConfig,
    /// Import classification.
    pub imports: ImportsConfig,
    /// Git execution.
    pub git: GitConfig,
    /// GitHub API.
    pub github: GithubConfig,
    /// Module scaffolding.
    pub scaffold: ScaffoldConfig,
    /// AI context files.
    pub context: ContextConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use adhd_rs::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("adhd.toml")
    ///     .with_env_prefix("ADHD")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Loader for a project root: `<root>/adhd.toml`, then `extra` files,
    /// then environment overrides.
    #[must_use]
    pub fn loader_for_root(root: &Path, extra: &[PathBuf]) -> ConfigLoader {
        let mut loader = ConfigLoader::new().add_toml_file_optional(root.join(CONFIG_FILE_NAME));
        for path in extra {
            loader = loader.add_toml_file(path);
        }
        loader.with_env_prefix(ENV_PREFIX)
    }

    /// Check values that deserialize but cannot work.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::InvalidValue` for an empty marker file name, a
    /// zero timeout or an empty remote.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let invalid = |section: &str, key: &str, message: &str| ConfigError::InvalidValue {
            section: section.to_string(),
            key: key.to_string(),
            message: message.to_string(),
        };

        if self.discovery.marker_file.trim().is_empty() {
            return Err(invalid("discovery", "marker_file", "must not be empty"));
        }
        if self.discovery.max_depth == 0 {
            return Err(invalid("discovery", "max_depth", "must be at least 1"));
        }
        if self.git.timeout_secs == 0 {
            return Err(invalid("git", "timeout_secs", "must be at least 1"));
        }
        if self.git.remote.trim().is_empty() {
            return Err(invalid("git", "remote", "must not be empty"));
        }
        Ok(())
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered using `BTreeMap`. The token itself is
    /// never shown, only the variable it is read from.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_discovery_options(&mut options);
        self.format_git_options(&mut options);
        self.format_scaffold_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".into(),
            self.global
                .log_file
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
    }

    fn format_discovery_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "discovery.marker_file".into(),
            self.discovery.marker_file.clone(),
        );
        options.insert(
            "discovery.project_file".into(),
            self.discovery.project_file.clone(),
        );
        options.insert(
            "discovery.max_depth".into(),
            self.discovery.max_depth.to_string(),
        );
        options.insert(
            "discovery.skip_dirs".into(),
            self.discovery.skip_dirs.join(","),
        );
        options.insert(
            "discovery.hidden_layers".into(),
            self.discovery
                .hidden_layers
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(","),
        );
        options.insert(
            "imports.internal_prefixes".into(),
            self.imports.internal_prefixes.join(","),
        );
        if !self.imports.extra_stdlib.is_empty() {
            options.insert(
                "imports.extra_stdlib".into(),
                self.imports.extra_stdlib.join(","),
            );
        }
        options.insert("context.core_dir".into(), self.context.core_dir.clone());
        options.insert("context.synced_dir".into(), self.context.synced_dir.clone());
    }

    fn format_git_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("git.timeout_secs".into(), self.git.timeout_secs.to_string());
        options.insert("git.default_branch".into(), self.git.default_branch.clone());
        options.insert("git.remote".into(), self.git.remote.clone());
        options.insert("github.api_url".into(), self.github.api_url.clone());
        options.insert("github.token_env".into(), self.github.token_env.clone());
        options.insert(
            "github.visibility".into(),
            self.github.visibility.to_string(),
        );
    }

    fn format_scaffold_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "scaffold.foundation_dir".into(),
            self.scaffold.foundation_dir.clone(),
        );
        options.insert(
            "scaffold.runtime_dir".into(),
            self.scaffold.runtime_dir.clone(),
        );
        options.insert("scaffold.dev_dir".into(), self.scaffold.dev_dir.clone());
        options.insert("scaffold.mcp_dir".into(), self.scaffold.mcp_dir.clone());
        options.insert(
            "scaffold.initial_version".into(),
            self.scaffold.initial_version.clone(),
        );
    }
}
