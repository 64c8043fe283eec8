// adhd-rs: ADHD Framework Project Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `list_context_files`.
//!
//! ```text
//! source     location                                  pattern
//! ------     --------                                  -------
//! core       <core_dir>/{instructions,agents,prompts}  *.instructions.md | *.agent.md | *.prompt.md
//! synced     <synced_dir>/{instructions,agents,prompts}
//! <module>   <module dir>                               <name>.instructions.md | *.agent.md | *.prompt.md
//! ```
//!
//! Each location is read one level deep.

use serde::Serialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

use super::Project;
use super::response::{ErrorCode, Report, ToolError, ToolResult};
use crate::git::backend::GitRunner;
use crate::utility::fs::walk::{WalkOptions, find_files};

/// Kind of AI context file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Instruction,
    Agent,
    Prompt,
}

impl FileType {
    pub const ALL: [Self; 3] = [Self::Instruction, Self::Agent, Self::Prompt];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Instruction => "instruction",
            Self::Agent => "agent",
            Self::Prompt => "prompt",
        }
    }

    /// Folder name under the core and synced locations.
    #[must_use]
    pub const fn dir_name(self) -> &'static str {
        match self {
            Self::Instruction => "instructions",
            Self::Agent => "agents",
            Self::Prompt => "prompts",
        }
    }

    #[must_use]
    pub const fn pattern(self) -> &'static str {
        match self {
            Self::Instruction => "*.instructions.md",
            Self::Agent => "*.agent.md",
            Self::Prompt => "*.prompt.md",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FileType {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                ToolError::new(
                    ErrorCode::InvalidFileType,
                    format!("file_type must be one of: instruction, agent, prompt (got '{s}')"),
                )
            })
    }
}

/// One context file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContextFile {
    /// File name without its last extension.
    pub name: String,
    /// Root-relative, `/`-separated.
    pub path: String,
    /// `core`, `synced` or the owning module's name.
    pub source: String,
}

/// Result of `list_context_files`; only requested kinds are present.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ContextFiles {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<Vec<ContextFile>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agents: Option<Vec<ContextFile>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompts: Option<Vec<ContextFile>>,
}

impl ContextFiles {
    const fn slot(&mut self, file_type: FileType) -> &mut Option<Vec<ContextFile>> {
        match file_type {
            FileType::Instruction => &mut self.instructions,
            FileType::Agent => &mut self.agents,
            FileType::Prompt => &mut self.prompts,
        }
    }
}

impl Report for ContextFiles {}

impl<R: GitRunner> Project<R> {
    /// Instruction, agent and prompt files of the project.
    ///
    /// # Errors
    ///
    /// `invalid_file_type` for an unknown kind, `scan_error` if modules
    /// cannot be listed.
    pub fn list_context_files(
        &self,
        file_type: Option<&str>,
        include_modules: bool,
    ) -> ToolResult<ContextFiles> {
        let types = match file_type {
            Some(name) => vec![name.parse::<FileType>()?],
            None => FileType::ALL.to_vec(),
        };

        let modules = if include_modules {
            Some(self.list()?)
        } else {
            None
        };

        let core_dir = self.root.join(&self.config.context.core_dir);
        let synced_dir = self.root.join(&self.config.context.synced_dir);

        let mut result = ContextFiles::default();
        for file_type in types {
            let mut files = Vec::new();
            self.collect(&core_dir.join(file_type.dir_name()), file_type.pattern(), "core", &mut files);
            self.collect(&synced_dir.join(file_type.dir_name()), file_type.pattern(), "synced", &mut files);

            for module in modules.iter().flat_map(|catalog| catalog.iter()) {
                let pattern = match file_type {
                    FileType::Instruction => format!("{}.instructions.md", module.name()),
                    other => other.pattern().to_string(),
                };
                self.collect(module.path(), &pattern, module.name(), &mut files);
            }
            *result.slot(file_type) = Some(files);
        }
        Ok(result)
    }

    /// Appends files in `dir` (one level) matching `pattern`.
    fn collect(&self, dir: &Path, pattern: &str, source: &str, out: &mut Vec<ContextFile>) {
        if !dir.is_dir() {
            return;
        }
        let found = match find_files(dir, pattern, &WalkOptions::flat()) {
            Ok(found) => found,
            Err(e) => {
                debug!(dir = %dir.display(), error = %e, "context file lookup failed");
                return;
            }
        };
        out.extend(found.into_iter().map(|path| ContextFile {
            name: path
                .file_stem()
                .map_or_else(String::new, |s| s.to_string_lossy().into_owned()),
            path: path
                .strip_prefix(&self.root)
                .unwrap_or(&path)
                .to_string_lossy()
                .replace('\\', "/"),
            source: source.to_string(),
        }));
    }
}
