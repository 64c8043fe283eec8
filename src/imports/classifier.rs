// adhd-rs: ADHD Framework Project Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Import name classification.
//!
//! ```text
//! classify(name)
//!   ""                              --> ThirdParty
//!   ".x" / ".."                     --> Local
//!   malformed dotted name           --> ThirdParty
//!   == prefix | starts "prefix."    --> Internal
//!   top-level segment in stdlib     --> Stdlib
//!   otherwise                       --> ThirdParty
//! ```

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

use super::stdlib::PYTHON_STDLIB;

/// Category an import falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportCategory {
    /// Python standard library.
    Stdlib,
    /// Framework-internal namespace.
    Internal,
    /// Relative import within the same module.
    Local,
    /// Anything else.
    ThirdParty,
}

impl ImportCategory {
    pub const ALL: [Self; 4] = [Self::Stdlib, Self::Internal, Self::Local, Self::ThirdParty];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stdlib => "stdlib",
            Self::Internal => "internal",
            Self::Local => "local",
            Self::ThirdParty => "third_party",
        }
    }
}

impl fmt::Display for ImportCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies dotted import names against internal prefixes and the stdlib.
#[derive(Debug, Clone)]
pub struct ImportClassifier {
    prefixes: Vec<String>,
    stdlib: BTreeSet<String>,
}

impl ImportClassifier {
    /// Creates a classifier for the given internal namespaces.
    ///
    /// A trailing `.` on a prefix is ignored, so `"cores"` and `"cores."`
    /// both match `cores` and `cores.x` but never `coresx`.
    #[must_use]
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let prefixes = prefixes
            .into_iter()
            .map(|p| p.as_ref().trim().trim_end_matches('.').to_string())
            .filter(|p| !p.is_empty())
            .collect();
        let stdlib = PYTHON_STDLIB.iter().map(|s| (*s).to_string()).collect();
        Self { prefixes, stdlib }
    }

    /// Adds top-level names treated as standard library.
    #[must_use]
    pub fn with_extra_stdlib<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stdlib
            .extend(names.into_iter().map(|s| s.as_ref().trim().to_string()));
        self
    }

    #[must_use]
    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    /// Classifies one import name. Total over all strings.
    #[must_use]
    pub fn classify(&self, name: &str) -> ImportCategory {
        if name.is_empty() {
            return ImportCategory::ThirdParty;
        }
        if name.starts_with('.') {
            return ImportCategory::Local;
        }
        if !is_well_formed(name) {
            return ImportCategory::ThirdParty;
        }
        if self.is_internal(name) {
            return ImportCategory::Internal;
        }
        let top_level = name.split('.').next().unwrap_or(name);
        if self.stdlib.contains(top_level) {
            return ImportCategory::Stdlib;
        }
        ImportCategory::ThirdParty
    }

    fn is_internal(&self, name: &str) -> bool {
        self.prefixes.iter().any(|prefix| {
            name.strip_prefix(prefix.as_str())
                .is_some_and(|rest| rest.is_empty() || rest.starts_with('.'))
        })
    }
}

impl Default for ImportClassifier {
    fn default() -> Self {
        Self::new(crate::config::types::ImportsConfig::default().internal_prefixes)
    }
}

/// Dotted identifier: non-empty segments of `[A-Za-z0-9_]` (or non-ASCII letters).
fn is_well_formed(name: &str) -> bool {
    name.split('.').all(|segment| {
        !segment.is_empty()
            && segment
                .chars()
                .all(|c| c == '_' || c.is_alphanumeric())
    })
}
