// adhd-rs: ADHD Framework Project Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `create_module`.
//!
//! ```text
//! layer ok? --> name ok? --> not taken? --> owner known? --> repo created?
//!   --> template written --> git init + remote (best effort)
//! ```

use bon::Builder;
use regex::Regex;
use serde::Serialize;
use std::path::Path;
use std::sync::OnceLock;
use tracing::{info, warn};

use super::Project;
use super::response::{ErrorCode, Report, ToolError, ToolResult};
use crate::error::ModuleError;
use crate::git::backend::GitRunner;
use crate::module::record::Layer;
use crate::scaffold::{ModuleTemplate, title_case};

/// Pattern new module names must match.
pub const MODULE_NAME_PATTERN: &str = r"^[a-z][a-z0-9_]*$";

/// Arguments of `create_module`.
#[derive(Debug, Clone, Builder)]
pub struct CreateModuleRequest {
    #[builder(setters(name = with_name), into)]
    name: String,
    #[builder(setters(name = with_layer), into)]
    layer: String,
    #[builder(setters(name = with_is_mcp), default = false)]
    is_mcp: bool,
    #[builder(setters(name = with_create_repo), default = false)]
    create_repo: bool,
    #[builder(setters(name = with_owner), into)]
    owner: Option<String>,
}

/// Result of `create_module`.
#[derive(Debug, Clone, Serialize)]
pub struct CreatedModule {
    pub name: String,
    pub layer: Layer,
    pub is_mcp: bool,
    pub path: String,
    pub files_created: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,
}

impl Report for CreatedModule {}

fn name_regex() -> Option<&'static Regex> {
    static NAME_RE: OnceLock<Option<Regex>> = OnceLock::new();
    NAME_RE
        .get_or_init(|| Regex::new(MODULE_NAME_PATTERN).ok())
        .as_ref()
}

/// Checks a new module name against [`MODULE_NAME_PATTERN`].
///
/// # Errors
///
/// Returns `ModuleError::InvalidName` describing the rule that failed.
pub(super) fn validate_module_name(name: &str) -> std::result::Result<(), ModuleError> {
    if name_regex().is_some_and(|re| re.is_match(name)) {
        return Ok(());
    }
    Err(ModuleError::InvalidName {
        name: name.to_string(),
        reason: "use lowercase letters, digits and underscores, starting with a letter"
            .to_string(),
    })
}

impl<R: GitRunner> Project<R> {
    /// Scaffolds a new module, optionally with a GitHub repository.
    ///
    /// # Errors
    ///
    /// `invalid_layer`, `invalid_module_name`, `module_exists`,
    /// `owner_required`, `repo_creation_failed` or `creation_error`.
    pub async fn create_module(&self, request: &CreateModuleRequest) -> ToolResult<CreatedModule> {
        let layer: Layer = request.layer.parse().map_err(ToolError::from)?;
        validate_module_name(&request.name).map_err(ToolError::from)?;

        let catalog = self.list()?;
        if catalog.get(&request.name).is_some() {
            return Err(ToolError::new(
                ErrorCode::ModuleExists,
                format!("Module '{}' already exists", request.name),
            ));
        }

        let folder = self.config.scaffold.folder_for(layer, request.is_mcp);
        let target = self.root.join(folder).join(&request.name);
        let relative = format!("{folder}/{}", request.name);
        if target.exists() {
            return Err(ToolError::new(
                ErrorCode::ModuleExists,
                format!("Directory '{relative}' already exists"),
            ));
        }

        let repo_url = if request.create_repo {
            Some(
                self.create_repository(request, &title_case(&request.name))
                    .await?,
            )
        } else {
            None
        };

        let template = ModuleTemplate::builder()
            .with_name(request.name.as_str())
            .with_layer(layer)
            .with_is_mcp(request.is_mcp)
            .with_version(self.config.scaffold.initial_version.as_str())
            .maybe_with_repo_url(repo_url.clone())
            .build();
        let files_created = template
            .write_to(&target)
            .map_err(|e| ToolError::new(ErrorCode::CreationError, e.to_string()))?;
        info!(module = %request.name, path = %relative, "created module");

        if let Some(url) = &repo_url {
            self.init_repository(&target, url).await;
        }

        Ok(CreatedModule {
            name: request.name.clone(),
            layer,
            is_mcp: request.is_mcp,
            path: relative,
            files_created,
            repo_url,
        })
    }

    async fn create_repository(
        &self,
        request: &CreateModuleRequest,
        description: &str,
    ) -> ToolResult<String> {
        let client = self.github();

        let Some(owner) = request.owner.as_deref() else {
            let lookup_error = match client {
                Ok(client) => match client.available_owners().await {
                    Ok(owners) => {
                        return Err(ToolError::new(
                            ErrorCode::OwnerRequired,
                            "Specify 'owner' parameter to create GitHub repo",
                        )
                        .with_owners(owners));
                    }
                    Err(e) => e,
                },
                Err(e) => e,
            };
            return Err(ToolError::new(
                ErrorCode::OwnerRequired,
                format!("Specify 'owner' parameter. Failed to list owners: {lookup_error}"),
            ));
        };

        let repo_failed =
            |e: crate::error::AdhdError| ToolError::new(ErrorCode::RepoCreationFailed, e.to_string());
        client
            .map_err(repo_failed)?
            .create_repository(owner, &request.name, description, self.config.github.visibility)
            .await
            .map_err(repo_failed)
    }

    /// `git init` plus the configured remote. Failures are logged only.
    async fn init_repository(&self, target: &Path, url: &str) {
        let remote = self.config.git.remote.as_str();
        for args in [&["init"][..], &["remote", "add", remote, url][..]] {
            match self.runner.run(args, target).await {
                Ok(out) if out.success() => {}
                Ok(out) => {
                    warn!(path = %target.display(), command = %args.join(" "), stderr = %out.stderr().trim(), "repository setup failed");
                    return;
                }
                Err(e) => {
                    warn!(path = %target.display(), error = %e, "repository setup failed");
                    return;
                }
            }
        }
    }
}
