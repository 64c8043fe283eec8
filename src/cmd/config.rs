// adhd-rs: ADHD Framework Project Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Config-related commands for adhd-rs.

use crate::config::Config;

/// Display loaded configuration files, then the resolved options.
pub fn run_options_command(config: &Config, config_files: &[String]) {
    if config_files.is_empty() {
        println!("# no configuration files loaded");
    } else {
        for line in config_files {
            println!("# {line}");
        }
    }
    for line in config.format_options() {
        println!("{line}");
    }
}
