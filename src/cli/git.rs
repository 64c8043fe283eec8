// adhd-rs: ADHD Framework Project Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git command arguments.
//!
//! # Subcommands
//!
//! ```text
//! git status  [-m MODULE] [-L LAYERS]
//!   → branch and sync state per module
//! git diff    [-m MODULE] [-L LAYERS]
//!   → change summary of dirty modules
//! git pull    [-m MODULE] [-L LAYERS]
//!   → pull clean modules
//! git push -M MESSAGE [-m MODULE] [-L LAYERS]
//!   → commit and push dirty modules
//! ```

use clap::{Args, Subcommand};

use crate::batch::GitAction;

/// Arguments for the `git` command.
#[derive(Debug, Clone, Args)]
pub struct GitArgs {
    /// Git subcommand.
    #[command(subcommand)]
    pub subcommand: GitSubcommand,
}

/// Git subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum GitSubcommand {
    /// Shows branch and synchronization state.
    Status(SelectArgs),

    /// Summarizes uncommitted changes.
    Diff(SelectArgs),

    /// Pulls modules without local changes.
    Pull(SelectArgs),

    /// Commits and pushes modules with local changes.
    Push(PushArgs),
}

impl GitSubcommand {
    /// Batch action run by this subcommand.
    #[must_use]
    pub const fn action(&self) -> GitAction {
        match self {
            Self::Status(_) => GitAction::Status,
            Self::Diff(_) => GitAction::Diff,
            Self::Pull(_) => GitAction::Pull,
            Self::Push(_) => GitAction::Push,
        }
    }

    /// Module selection shared by every subcommand.
    #[must_use]
    pub const fn select(&self) -> &SelectArgs {
        match self {
            Self::Status(args) | Self::Diff(args) | Self::Pull(args) => args,
            Self::Push(args) => &args.select,
        }
    }

    /// Commit message, only set for `push`.
    #[must_use]
    pub fn commit_message(&self) -> Option<&str> {
        match self {
            Self::Push(args) => args.message.as_deref(),
            _ => None,
        }
    }
}

/// Which modules a git subcommand runs on.
#[derive(Debug, Clone, Default, Args)]
pub struct SelectArgs {
    /// Only this module.
    #[arg(short = 'm', long = "module", value_name = "NAME")]
    pub module: Option<String>,

    /// Only modules in these layers.
    #[arg(short = 'L', long = "layers", value_name = "LAYERS", value_delimiter = ',')]
    pub layers: Vec<String>,

    /// Shows a progress bar on stderr.
    #[arg(long)]
    pub progress: bool,
}

/// Arguments for `git push`.
#[derive(Debug, Clone, Default, Args)]
pub struct PushArgs {
    #[command(flatten)]
    pub select: SelectArgs,

    /// Commit message used for every pushed module.
    #[arg(short = 'M', long = "message", value_name = "MESSAGE")]
    pub message: Option<String>,
}
