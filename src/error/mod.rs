// adhd-rs: ADHD Framework Project Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!              AdhdError (~24 bytes)
//!                     |
//!   +------+------+------+------+------+------+
//!   |      |      |      |      |      |      |
//!   v      v      v      v      v      v      v
//! Bail    Git    Net    Cfg   Proc    Fs   Module  Io/Other
//!         Box    Box    Box    Box    Box   Box    Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Git     Gix, CommandFailed, NotARepository
//!   Network Reqwest, HttpError, MissingToken
//!   Config  ParseError, MissingKey, InvalidValue
//!   Process SpawnFailed, NonZeroExit, Timeout
//!   Fs      NotFound, AlreadyExists, IoError
//!   Module  MetadataMissing, MetadataInvalid, NotFound, InvalidLayer
//!
//! All variants boxed => AdhdError fits in 24 bytes.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`AdhdError`].
pub type AdhdResult<T> = std::result::Result<T, AdhdError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum AdhdError {
    /// Fatal error that should terminate the application.
    #[error("fatal error: {0}")]
    Bailed(Box<str>),

    /// Git operation failed.
    #[error("git error: {0}")]
    Git(#[from] Box<GitError>),

    /// Network operation failed.
    #[error("network error: {0}")]
    Network(#[from] Box<NetworkError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Process execution error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),

    /// Module metadata or lookup error.
    #[error("module error: {0}")]
    Module(#[from] Box<ModuleError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

/// Create a fatal [`AdhdError::Bailed`] that terminates the application.
pub fn bail_out(message: impl Into<String>) -> AdhdError {
    AdhdError::Bailed(message.into().into_boxed_str())
}

impl AdhdError {
    /// Returns true if this error is a process timeout.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Process(e) if matches!(**e, ProcessError::Timeout { .. }))
    }
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for AdhdError {
                fn from(err: $error) -> Self {
                    AdhdError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    GitError => Git,
    NetworkError => Network,
    ConfigError => Config,
    ProcessError => Process,
    FsError => Fs,
    ModuleError => Module,
    std::io::Error => Io,
}

// --- Gix Errors ---

/// Wrapper for gix-specific errors.
///
/// Large error types are boxed to keep enum size manageable.
#[derive(Debug, Error)]
pub enum GixError {
    /// Failed to open repository.
    #[error("failed to open repository: {0}")]
    Open(#[from] Box<gix::open::Error>),

    /// Repository has no worktree (bare repository).
    #[error("repository has no worktree (bare repository)")]
    BareRepository,
}

// --- Git Errors ---

/// Git operation errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// No version-control marker at the path.
    #[error("not a git repository: {path}")]
    NotARepository { path: String },

    /// Git command execution failed.
    #[error("git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },

    /// Error from gix library.
    #[error("gix error: {0}")]
    Gix(#[from] GixError),

    /// Remote not configured.
    #[error("remote not found: {remote}")]
    RemoteNotFound { remote: String },
}

// --- Network Errors ---

/// Network operation errors.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// HTTP error response.
    #[error("http error {status}: {url}")]
    HttpError { status: u16, url: String },

    /// Error from reqwest library.
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// API token environment variable is not set.
    #[error("API token not set (expected in ${variable})")]
    MissingToken { variable: String },

    /// Response body did not have the expected shape.
    #[error("unexpected response from {url}: {message}")]
    UnexpectedResponse { url: String, message: String },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Missing required configuration key.
    #[error("missing required config key '{key}' in section '[{section}]'")]
    MissingKey { section: String, key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// Configuration file not found.
    #[error("config file not found: {0}")]
    NotFound(String),
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process exited with non-zero status.
    #[error("process '{command}' exited with code {code}")]
    NonZeroExit { command: String, code: i32 },

    /// Process timed out.
    #[error("process '{command}' timed out after {timeout_secs} seconds")]
    Timeout { command: String, timeout_secs: u64 },

    /// Failed to read process output.
    #[error("failed to read output from process '{command}': {message}")]
    OutputError { command: String, message: String },
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// Path not found.
    #[error("path not found: {0}")]
    NotFound(String),

    /// Path already exists.
    #[error("path already exists: {0}")]
    AlreadyExists(String),

    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// File content could not be rendered.
    #[error("cannot render '{path}': {message}")]
    Render { path: String, message: String },
}

// --- Module Errors ---

/// Module metadata and lookup errors.
#[derive(Debug, Error)]
pub enum ModuleError {
    /// Marker metadata file is absent.
    #[error("metadata file not found: {path}")]
    MetadataMissing { path: String },

    /// Metadata file could not be parsed.
    #[error("invalid metadata in '{path}': {message}")]
    MetadataInvalid { path: String, message: String },

    /// No module with this name in the catalog.
    #[error("module '{name}' not found")]
    NotFound { name: String },

    /// Push requested without a commit message.
    #[error("commit message is required for push")]
    CommitMessageRequired,

    /// Layer name outside the known set.
    #[error("invalid layer '{layer}' (expected one of: foundation, runtime, dev)")]
    InvalidLayer { layer: String },

    /// Module name rejected before scaffolding.
    #[error("invalid module name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    /// Unknown batch git action.
    #[error("invalid action '{action}' (expected one of: status, diff, pull, push)")]
    InvalidAction { action: String },
}

#[cfg(test)]
mod tests;
