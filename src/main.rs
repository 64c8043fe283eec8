// adhd-rs: ADHD Framework Project Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Info | Modules | Module | Create | Context | Git | Options | Version
//! ```

use std::path::Path;
use std::process::ExitCode;

use adhd_rs::cli::global::GlobalOptions;
use adhd_rs::cli::{self, Command};
use adhd_rs::cmd::config::run_options_command;
use adhd_rs::cmd::git::run_git_command;
use adhd_rs::cmd::project::{
    run_context_command, run_create_command, run_info_command, run_module_command,
    run_modules_command,
};
use adhd_rs::config::Config;
use adhd_rs::config::loader::ConfigLoader;
use adhd_rs::logging::{LogConfig, init_logging};
use adhd_rs::project::Project;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    if matches!(cli.command, Some(Command::Version)) {
        handle_version_command();
        return ExitCode::SUCCESS;
    }

    let root = cli.global.root_dir();
    let (config, loaded_files) = match load_config(&cli.global, &root) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let log_config = build_log_config(&config);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, root.as_path(), config, &loaded_files).await
}

fn build_log_config(config: &Config) -> LogConfig {
    LogConfig::builder()
        .with_console_level(config.global.output_log_level)
        .with_file_level(config.global.file_log_level)
        .maybe_with_log_file(
            config
                .global
                .log_file
                .as_ref()
                .map(|p| p.display().to_string()),
        )
        .build()
}

async fn dispatch_command(
    cli: &cli::Cli,
    root: &Path,
    config: Config,
    loaded_files: &[String],
) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(true)
        }
        Some(Command::Options) => {
            run_options_command(&config, loaded_files);
            Ok(true)
        }
        Some(Command::Info) => run_info_command(&Project::new(root, config)),
        Some(Command::Modules(args)) => run_modules_command(args, &Project::new(root, config)),
        Some(Command::Module(args)) => run_module_command(args, &Project::new(root, config)).await,
        Some(Command::Create(args)) => run_create_command(args, &Project::new(root, config)).await,
        Some(Command::Context(args)) => run_context_command(args, &Project::new(root, config)),
        Some(Command::Git(args)) => run_git_command(args, &Project::new(root, config)).await,
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions, root: &Path) -> adhd_rs::error::Result<ConfigLoader> {
    global.apply_overrides(Config::loader_for_root(root, &global.configs))
}

fn load_config(
    global: &GlobalOptions,
    root: &Path,
) -> adhd_rs::error::Result<(Config, Vec<String>)> {
    let loader = build_config_loader(global, root)?;
    let loaded_files = loader.format_loaded_files();
    let config = loader.build()?;
    Ok((config, loaded_files))
}
