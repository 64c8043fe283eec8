// adhd-rs: ADHD Framework Project Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git command implementation for adhd-rs.

use super::emit;
use crate::cli::git::GitArgs;
use crate::error::Result;
use crate::git::backend::GitRunner;
use crate::project::{GitModulesRequest, Project};

/// Main handler for git command.
///
/// # Errors
///
/// Returns an error if the result cannot be printed. Failed modules are
/// reported in the printed result instead.
pub async fn run_git_command<R: GitRunner>(args: &GitArgs, project: &Project<R>) -> Result<bool> {
    let select = args.subcommand.select();
    let request = GitModulesRequest::builder()
        .with_action(args.subcommand.action().as_str())
        .maybe_with_module_name(select.module.clone())
        .maybe_with_layers((!select.layers.is_empty()).then(|| select.layers.clone()))
        .maybe_with_commit_message(args.subcommand.commit_message().map(String::from))
        .with_progress(select.progress)
        .build();
    emit(&project.git_modules(&request).await)
}
