// adhd-rs: ADHD Framework Project Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing.
//!
//! Tests the CLI module with realistic command-line argument patterns.

use adhd_rs::batch::GitAction;
use adhd_rs::cli::global::GlobalOptions;
use adhd_rs::cli::{Cli, Command};
use clap::Parser;
use std::path::PathBuf;

// =============================================================================
// Version and options
// =============================================================================

#[test]
fn cli_version_alias() {
    let cli = Cli::try_parse_from(["adhd", "-v"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn cli_no_command() {
    let cli = Cli::try_parse_from(["adhd"]).unwrap();
    assert!(cli.command.is_none());
}

#[test]
fn cli_options_with_log_file() {
    let cli = Cli::try_parse_from([
        "adhd",
        "--log-file",
        "logs/adhd.log",
        "--file-log-level",
        "5",
        "options",
    ])
    .unwrap();
    assert!(matches!(cli.command, Some(Command::Options)));
    assert_eq!(cli.global.log_file, Some(PathBuf::from("logs/adhd.log")));

    let keys: Vec<&str> = cli
        .global
        .to_config_overrides()
        .into_iter()
        .map(|(key, _)| key)
        .collect();
    assert_eq!(keys, ["global.file_log_level", "global.log_file"]);
}

#[test]
fn cli_default_root_is_current_dir() {
    let global = GlobalOptions::default();
    assert_eq!(global.root_dir(), std::env::current_dir().unwrap());
}

// =============================================================================
// Project commands
// =============================================================================

#[test]
fn cli_module_requires_name() {
    assert!(Cli::try_parse_from(["adhd", "module"]).is_err());
    let cli = Cli::try_parse_from(["adhd", "module", "config_manager"]).unwrap();
    let Some(Command::Module(args)) = cli.command else {
        panic!("expected module command");
    };
    assert_eq!(args.name, "config_manager");
}

#[test]
fn cli_create_requires_layer() {
    assert!(Cli::try_parse_from(["adhd", "create", "cache_manager"]).is_err());
    let cli = Cli::try_parse_from(["adhd", "create", "cache_manager", "runtime"]).unwrap();
    let Some(Command::Create(args)) = cli.command else {
        panic!("expected create command");
    };
    assert!(!args.mcp && !args.create_repo);
    assert_eq!(args.owner, None);
}

#[test]
fn cli_context_filters() {
    let cli = Cli::try_parse_from(["adhd", "context", "-t", "prompt", "--core-only"]).unwrap();
    let Some(Command::Context(args)) = cli.command else {
        panic!("expected context command");
    };
    assert_eq!(args.file_type.as_deref(), Some("prompt"));
    assert!(args.core_only);
}

// =============================================================================
// Git commands
// =============================================================================

#[test]
fn cli_git_actions() {
    for (word, action) in [
        ("status", GitAction::Status),
        ("diff", GitAction::Diff),
        ("pull", GitAction::Pull),
        ("push", GitAction::Push),
    ] {
        let cli = Cli::try_parse_from(["adhd", "git", word]).unwrap();
        let Some(Command::Git(args)) = cli.command else {
            panic!("expected git command");
        };
        assert_eq!(args.subcommand.action(), action);
    }
}

#[test]
fn cli_git_requires_subcommand() {
    assert!(Cli::try_parse_from(["adhd", "git"]).is_err());
    assert!(Cli::try_parse_from(["adhd", "git", "fetch"]).is_err());
}

#[test]
fn cli_git_pull_layers() {
    let cli = Cli::try_parse_from([
        "adhd", "--root", "/work", "git", "pull", "--layers", "runtime,dev",
    ])
    .unwrap();
    assert_eq!(cli.global.root, Some(PathBuf::from("/work")));
    let Some(Command::Git(args)) = cli.command else {
        panic!("expected git command");
    };
    assert_eq!(args.subcommand.select().layers, ["runtime", "dev"]);
    assert!(!args.subcommand.select().progress);
}
