// adhd-rs: ADHD Framework Project Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Handlers for `info`, `modules`, `module`, `create` and `context`.

use super::emit;
use crate::cli::project::{ContextArgs, CreateArgs, ModuleArgs, ModulesArgs};
use crate::error::Result;
use crate::git::backend::GitRunner;
use crate::project::{CreateModuleRequest, Project};

/// Handler for `info`.
///
/// # Errors
///
/// Returns an error if the result cannot be printed.
pub fn run_info_command<R: GitRunner>(project: &Project<R>) -> Result<bool> {
    emit(&project.get_project_info())
}

/// Handler for `modules`.
///
/// # Errors
///
/// Returns an error if the result cannot be printed.
pub fn run_modules_command<R: GitRunner>(args: &ModulesArgs, project: &Project<R>) -> Result<bool> {
    emit(&project.list_modules(args.layers(), args.with_imports))
}

/// Handler for `module`.
///
/// # Errors
///
/// Returns an error if the result cannot be printed.
pub async fn run_module_command<R: GitRunner>(
    args: &ModuleArgs,
    project: &Project<R>,
) -> Result<bool> {
    emit(&project.get_module_info(&args.name).await)
}

/// Handler for `create`.
///
/// # Errors
///
/// Returns an error if the result cannot be printed.
pub async fn run_create_command<R: GitRunner>(
    args: &CreateArgs,
    project: &Project<R>,
) -> Result<bool> {
    let request = CreateModuleRequest::builder()
        .with_name(args.name.as_str())
        .with_layer(args.layer.as_str())
        .with_is_mcp(args.mcp)
        .with_create_repo(args.create_repo)
        .maybe_with_owner(args.owner.clone())
        .build();
    emit(&project.create_module(&request).await)
}

/// Handler for `context`.
///
/// # Errors
///
/// Returns an error if the result cannot be printed.
pub fn run_context_command<R: GitRunner>(args: &ContextArgs, project: &Project<R>) -> Result<bool> {
    emit(&project.list_context_files(args.file_type.as_deref(), !args.core_only))
}
