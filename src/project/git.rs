// adhd-rs: ADHD Framework Project Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `git_modules`.
//!
//! ```text
//! action valid? --> push has message? --> layers valid? --> scan
//!   --> module_name given? get or module_not_found : filter(layers, hidden)
//!   --> BatchRunner::run
//! ```

use bon::Builder;

use super::response::{ErrorCode, ToolError, ToolResult};
use super::{Project, not_found, parse_layers};
use crate::batch::{BatchReport, BatchRunner, GitAction};
use crate::git::backend::GitRunner;
use crate::module::record::ModuleRecord;

/// Arguments of `git_modules`.
#[derive(Debug, Clone, Builder)]
pub struct GitModulesRequest {
    #[builder(setters(name = with_action), into)]
    action: String,
    #[builder(setters(name = with_module_name), into)]
    module_name: Option<String>,
    #[builder(setters(name = with_layers))]
    layers: Option<Vec<String>>,
    #[builder(setters(name = with_commit_message), into)]
    commit_message: Option<String>,
    /// Draw a progress bar on stderr.
    #[builder(setters(name = with_progress), default = false)]
    progress: bool,
}

impl<R: GitRunner> Project<R> {
    /// Runs a batch git action over one module or a layer selection.
    ///
    /// # Errors
    ///
    /// `invalid_action`, `commit_message_required` (checked before any
    /// scan), `invalid_layer`, `scan_error` or `module_not_found` with
    /// suggestions. Per-module git failures are part of the report.
    pub async fn git_modules(&self, request: &GitModulesRequest) -> ToolResult<BatchReport> {
        let action: GitAction = request.action.parse().map_err(ToolError::from)?;
        let message = request
            .commit_message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty());
        if action == GitAction::Push && message.is_none() {
            return Err(ToolError::new(
                ErrorCode::CommitMessageRequired,
                "commit_message is required for push",
            ));
        }
        let layers = parse_layers(request.layers.as_deref())?;

        let catalog = self.scan()?;
        let modules: Vec<&ModuleRecord> = match request.module_name.as_deref() {
            Some(name) => vec![catalog.get(name).ok_or_else(|| not_found(&catalog, name))?],
            None => catalog.filter(layers.as_deref(), &self.config.discovery.hidden_layers),
        };

        BatchRunner::new(&self.runner, &self.config.git)
            .with_progress(request.progress)
            .run(action, &modules, message)
            .await
            .map_err(ToolError::from)
    }
}
