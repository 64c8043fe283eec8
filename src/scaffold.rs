// adhd-rs: ADHD Framework Project Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! New-module file templates.
//!
//! ```text
//! <target>/
//!   __init__.py
//!   pyproject.toml            [project] + [tool.adhd] layer, mcp
//!   README.md
//!   requirements.txt
//!   <name>.instructions.md
//!   <name>_mcp.py             (MCP modules)
//!   refresh.py                (MCP modules)
//! ```

use bon::Builder;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::Path;
use tracing::debug;

use crate::error::{AdhdResult, FsError};
use crate::module::record::Layer;

/// Everything the templates need to know about a new module.
#[derive(Debug, Clone, Builder)]
pub struct ModuleTemplate {
    #[builder(setters(name = with_name), into)]
    name: String,
    #[builder(setters(name = with_layer), default)]
    layer: Layer,
    #[builder(setters(name = with_is_mcp), default = false)]
    is_mcp: bool,
    #[builder(setters(name = with_version), into, default = "0.1.0".to_string())]
    version: String,
    #[builder(setters(name = with_repo_url))]
    repo_url: Option<String>,
}

impl ModuleTemplate {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn title(&self) -> String {
        title_case(&self.name)
    }

    /// `(file name, content)` pairs, in write order.
    ///
    /// # Errors
    ///
    /// `FsError::Render` if the metadata cannot be written as TOML.
    pub fn render(&self) -> AdhdResult<Vec<(String, String)>> {
        let mut files = vec![
            ("__init__.py".to_string(), self.init_py()),
            ("pyproject.toml".to_string(), self.pyproject()?),
            ("README.md".to_string(), self.readme()),
            ("requirements.txt".to_string(), String::new()),
            (format!("{}.instructions.md", self.name), self.instructions()),
        ];
        if self.is_mcp {
            files.push((format!("{}_mcp.py", self.name), self.mcp_server()));
            files.push(("refresh.py".to_string(), REFRESH_PY.to_string()));
        }
        Ok(files)
    }

    /// Writes every file into a new directory at `target_dir`.
    ///
    /// Returns the created file names, sorted.
    ///
    /// # Errors
    ///
    /// `FsError::AlreadyExists` if `target_dir` exists, `FsError::Render`
    /// if a file cannot be rendered, `FsError::IoError` if a directory or
    /// file cannot be written. Nothing is written when rendering fails.
    pub fn write_to(&self, target_dir: &Path) -> AdhdResult<Vec<String>> {
        if target_dir.exists() {
            return Err(FsError::AlreadyExists(target_dir.display().to_string()).into());
        }
        let files = self.render()?;
        std::fs::create_dir_all(target_dir).map_err(|source| FsError::IoError {
            path: target_dir.display().to_string(),
            source,
        })?;

        let mut created = Vec::new();
        for (file_name, content) in files {
            let path = target_dir.join(&file_name);
            std::fs::write(&path, content).map_err(|source| FsError::IoError {
                path: path.display().to_string(),
                source,
            })?;
            debug!(path = %path.display(), "wrote scaffold file");
            created.push(file_name);
        }
        created.sort();
        Ok(created)
    }

    fn init_py(&self) -> String {
        format!("\"\"\"{}.\"\"\"\n", self.title())
    }

    fn pyproject(&self) -> AdhdResult<String> {
        let document = PyProjectFile {
            project: ProjectSection {
                name: &self.name,
                version: &self.version,
                description: self.title(),
                requires_python: ">=3.11",
                dependencies: Vec::new(),
                urls: self
                    .repo_url
                    .as_deref()
                    .map(|url| BTreeMap::from([("Repository", url)]))
                    .unwrap_or_default(),
            },
            tool: ToolSection {
                adhd: AdhdSection {
                    layer: self.layer.to_string(),
                    mcp: self.is_mcp,
                },
            },
        };
        toml::to_string(&document).map_err(|e| {
            FsError::Render {
                path: "pyproject.toml".to_string(),
                message: e.to_string(),
            }
            .into()
        })
    }

    fn readme(&self) -> String {
        let mut out = format!("# {}\n\nLayer: {}\n", self.title(), self.layer);
        if let Some(url) = &self.repo_url {
            let _ = write!(out, "\nRepository: {url}\n");
        }
        out
    }

    fn instructions(&self) -> String {
        format!(
            "---\napplyTo: \"**/{name}/**\"\n---\n\n# {title}\n\nGuidance for working on `{name}`.\n",
            name = self.name,
            title = self.title()
        )
    }

    fn mcp_server(&self) -> String {
        format!(
            "\"\"\"MCP server for {title}.\"\"\"\n\nfrom mcp.server.fastmcp import FastMCP\n\nmcp = FastMCP(\"{name}\")\n\n\nif __name__ == \"__main__\":\n    mcp.run()\n",
            name = self.name,
            title = self.title()
        )
    }
}

#[derive(Serialize)]
struct PyProjectFile<'a> {
    project: ProjectSection<'a>,
    tool: ToolSection,
}

#[derive(Serialize)]
struct ProjectSection<'a> {
    name: &'a str,
    version: &'a str,
    description: String,
    #[serde(rename = "requires-python")]
    requires_python: &'static str,
    dependencies: Vec<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    urls: BTreeMap<&'static str, &'a str>,
}

#[derive(Serialize)]
struct ToolSection {
    adhd: AdhdSection,
}

#[derive(Serialize)]
struct AdhdSection {
    layer: String,
    mcp: bool,
}

/// Human-readable title: `config_manager` -> `Config Manager`.
#[must_use]
pub fn title_case(name: &str) -> String {
    name.split('_')
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect::<String>()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

const REFRESH_PY: &str = "\"\"\"Refresh hook run after the module is updated.\"\"\"\n\n\ndef main() -> None:\n    pass\n\n\nif __name__ == \"__main__\":\n    main()\n";
