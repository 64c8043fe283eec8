// adhd-rs: ADHD Framework Project Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments of the module and project commands.

use clap::Args;

/// Arguments for the `modules` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ModulesArgs {
    /// Layers to list (foundation, runtime, dev). Foundation is hidden otherwise.
    #[arg(short = 'L', long = "layers", value_name = "LAYERS", value_delimiter = ',')]
    pub layers: Vec<String>,

    /// Includes imports and requirements of every module.
    #[arg(short = 'i', long = "imports")]
    pub with_imports: bool,
}

impl ModulesArgs {
    /// Requested layers, `None` when none were given.
    #[must_use]
    pub fn layers(&self) -> Option<&[String]> {
        (!self.layers.is_empty()).then_some(self.layers.as_slice())
    }
}

/// Arguments for the `module` command.
#[derive(Debug, Clone, Args)]
pub struct ModuleArgs {
    /// Module name.
    #[arg(value_name = "NAME")]
    pub name: String,
}

/// Arguments for the `create` command.
#[derive(Debug, Clone, Args)]
pub struct CreateArgs {
    /// Name of the new module (lowercase, digits, underscores).
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Layer of the new module (foundation, runtime, dev).
    #[arg(value_name = "LAYER")]
    pub layer: String,

    /// Creates an MCP server module.
    #[arg(long = "mcp")]
    pub mcp: bool,

    /// Also creates a GitHub repository.
    #[arg(short = 'r', long = "create-repo")]
    pub create_repo: bool,

    /// Account or organization owning the repository.
    #[arg(short = 'o', long = "owner", value_name = "OWNER", env = "GITHUB_OWNER")]
    pub owner: Option<String>,
}

/// Arguments for the `context` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ContextArgs {
    /// Only lists one kind (instruction, agent, prompt).
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub file_type: Option<String>,

    /// Skips files shipped inside modules.
    #[arg(long = "core-only")]
    pub core_only: bool,
}
