// adhd-rs: ADHD Framework Project Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Operation result envelope.
//!
//! ```text
//! Ok(report)  --> { "success": report.success(), ...report fields }
//! Err(error)  --> { "success": false, "error": code, "kind": kind,
//!                   "message": text, "suggestions"?, "available_owners"? }
//! ```

use serde::Serialize;
use std::fmt;
use thiserror::Error;

use crate::batch::BatchReport;
use crate::error::ModuleError;
use crate::net::Owner;

/// Error codes returned by operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    ModuleNotFound,
    ProjectConfigNotFound,
    InvalidProjectConfig,
    CommitMessageRequired,
    InvalidAction,
    InvalidLayer,
    InvalidFileType,
    InvalidModuleName,
    ModuleExists,
    OwnerRequired,
    RepoCreationFailed,
    ReadError,
    ScanError,
    CreationError,
    GitError,
    Unknown,
}

/// Coarse error taxonomy behind the codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    NotFound,
    InvalidArgument,
    IoError,
    ExternalApiError,
    NothingToCommit,
    Unknown,
}

impl ErrorCode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ModuleNotFound => "module_not_found",
            Self::ProjectConfigNotFound => "project_config_not_found",
            Self::InvalidProjectConfig => "invalid_project_config",
            Self::CommitMessageRequired => "commit_message_required",
            Self::InvalidAction => "invalid_action",
            Self::InvalidLayer => "invalid_layer",
            Self::InvalidFileType => "invalid_file_type",
            Self::InvalidModuleName => "invalid_module_name",
            Self::ModuleExists => "module_exists",
            Self::OwnerRequired => "owner_required",
            Self::RepoCreationFailed => "repo_creation_failed",
            Self::ReadError => "read_error",
            Self::ScanError => "scan_error",
            Self::CreationError => "creation_error",
            Self::GitError => "git_error",
            Self::Unknown => "unknown",
        }
    }

    #[must_use]
    pub const fn kind(self) -> ErrorKind {
        match self {
            Self::ModuleNotFound | Self::ProjectConfigNotFound => ErrorKind::NotFound,
            Self::InvalidProjectConfig
            | Self::CommitMessageRequired
            | Self::InvalidAction
            | Self::InvalidLayer
            | Self::InvalidFileType
            | Self::InvalidModuleName
            | Self::ModuleExists
            | Self::OwnerRequired => ErrorKind::InvalidArgument,
            Self::ReadError | Self::ScanError | Self::CreationError | Self::GitError => {
                ErrorKind::IoError
            }
            Self::RepoCreationFailed => ErrorKind::ExternalApiError,
            Self::Unknown => ErrorKind::Unknown,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure of one operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{code}: {message}")]
pub struct ToolError {
    #[serde(rename = "error")]
    code: ErrorCode,
    kind: ErrorKind,
    message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    suggestions: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    available_owners: Vec<Owner>,
}

impl ToolError {
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            kind: code.kind(),
            message: message.into(),
            suggestions: Vec::new(),
            available_owners: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_suggestions(mut self, suggestions: Vec<String>) -> Self {
        self.suggestions = suggestions;
        self
    }

    #[must_use]
    pub fn with_owners(mut self, owners: Vec<Owner>) -> Self {
        self.available_owners = owners;
        self
    }

    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    #[must_use]
    pub fn available_owners(&self) -> &[Owner] {
        &self.available_owners
    }
}

impl From<ModuleError> for ToolError {
    fn from(err: ModuleError) -> Self {
        let code = match &err {
            ModuleError::NotFound { .. } => ErrorCode::ModuleNotFound,
            ModuleError::CommitMessageRequired => ErrorCode::CommitMessageRequired,
            ModuleError::InvalidLayer { .. } => ErrorCode::InvalidLayer,
            ModuleError::InvalidName { .. } => ErrorCode::InvalidModuleName,
            ModuleError::InvalidAction { .. } => ErrorCode::InvalidAction,
            ModuleError::MetadataMissing { .. } | ModuleError::MetadataInvalid { .. } => {
                ErrorCode::ReadError
            }
        };
        Self::new(code, err.to_string())
    }
}

/// Result of one operation.
pub type ToolResult<T> = Result<T, ToolError>;

/// Operation payload that decides its own `success` flag.
pub trait Report: Serialize {
    fn success(&self) -> bool {
        true
    }
}

impl Report for BatchReport {
    fn success(&self) -> bool {
        Self::success(self)
    }
}

/// Serialized form of a [`ToolResult`].
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Envelope<'a, T: Serialize> {
    Ok {
        success: bool,
        #[serde(flatten)]
        body: &'a T,
    },
    Err {
        success: bool,
        #[serde(flatten)]
        error: &'a ToolError,
    },
}

/// Wraps a result with its `success` flag.
#[must_use]
pub fn envelope<T: Report>(result: &ToolResult<T>) -> Envelope<'_, T> {
    match result {
        Ok(body) => Envelope::Ok {
            success: body.success(),
            body,
        },
        Err(error) => Envelope::Err {
            success: false,
            error,
        },
    }
}

/// `success` flag of a result.
#[must_use]
pub fn is_success<T: Report>(result: &ToolResult<T>) -> bool {
    result.as_ref().is_ok_and(Report::success)
}

/// Pretty JSON for a result.
///
/// # Errors
///
/// Returns a serialization error if a payload cannot be represented as JSON.
pub fn render_json<T: Report>(result: &ToolResult<T>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&envelope(result))
}
