// adhd-rs: ADHD Framework Project Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for adhd-rs using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! adhd [global options] <command>
//! info
//! modules [-L LAYERS] [-i]
//! module NAME
//! create NAME LAYER [--mcp] [-r] [-o OWNER]
//! context [-t TYPE] [--core-only]
//! git {status|diff|pull|push}
//! options
//! version
//! ```

pub mod git;
pub mod global;
pub mod project;


use crate::cli::git::GitArgs;
use crate::cli::global::GlobalOptions;
use crate::cli::project::{ContextArgs, CreateArgs, ModuleArgs, ModulesArgs};
use clap::{Parser, Subcommand};

/// ADHD Framework Project Tool
///
/// Module discovery and multi-repository git for ADHD framework projects.
#[derive(Debug, Parser)]
#[command(
    name = "adhd",
    author,
    version,
    about = "ADHD Framework Project Tool",
    long_about = "adhd-rs Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Discovers the modules of an ADHD framework project and runs\n\
                  git across their repositories. Every command prints its result\n\
                  as JSON and exits with 1 when the result is not successful.",
    after_help = "CONFIG FILES:\n\n\
                  adhd reads `adhd.toml` from the project root when present.\n\
                  Additional files given with --config are loaded after it, in\n\
                  order. ADHD_SECTION__KEY environment variables override both,\n\
                  for example ADHD_GIT__TIMEOUT_SECS=60."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their resolved values.
    Options,

    /// Shows the project metadata and module counts.
    Info,

    /// Lists modules.
    Modules(ModulesArgs),

    /// Shows everything known about one module.
    Module(ModuleArgs),

    /// Scaffolds a new module.
    Create(CreateArgs),

    /// Lists instruction, agent and prompt files.
    Context(ContextArgs),

    /// Runs git across module repositories.
    Git(GitArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
