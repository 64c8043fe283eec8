// adhd-rs: ADHD Framework Project Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers --> Project operation --> JSON on stdout
//!   config, git, project
//! ```
//!
//! Handlers return whether the printed result was successful; `main` turns
//! that into the exit code.

pub mod config;
pub mod git;
pub mod project;

use crate::error::Result;
use crate::project::{Report, ToolResult, is_success, render_json};

/// Prints `result` as pretty JSON and returns its `success` flag.
///
/// # Errors
///
/// Returns an error if the result cannot be serialized.
pub fn emit<T: Report>(result: &ToolResult<T>) -> Result<bool> {
    let json = render_json(result)?;
    println!("{json}");
    Ok(is_success(result))
}
