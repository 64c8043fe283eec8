// adhd-rs: ADHD Framework Project Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Python import extraction.
//!
//! ```text
//! scan_module(dir)
//!   find_files_with_extension("py")   hidden + __pycache__ skipped
//!     read --> UTF-8 (else skip file)
//!     ast::Suite::parse()             syntax error --> skip file
//!     walk every body                 if/try/with/def/class/match/loops
//!       import a.b as c, d            --> a.b, d       classify()
//!       from ..pkg import x           --> "..pkg"      always Local
//!       from pkg.sub import x         --> pkg.sub      classify()
//!   merge --> ImportSet (sorted, unique)
//! ```

use rustpython_parser::{Parse, ast};
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::debug;

use super::classifier::{ImportCategory, ImportClassifier};
use crate::utility::fs::walk::{WalkOptions, find_files_with_extension};

/// Import names of a module, one sorted set per category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportSet {
    pub stdlib: BTreeSet<String>,
    pub internal: BTreeSet<String>,
    pub local: BTreeSet<String>,
    pub third_party: BTreeSet<String>,
}

impl ImportSet {
    #[must_use]
    pub const fn get(&self, category: ImportCategory) -> &BTreeSet<String> {
        match category {
            ImportCategory::Stdlib => &self.stdlib,
            ImportCategory::Internal => &self.internal,
            ImportCategory::Local => &self.local,
            ImportCategory::ThirdParty => &self.third_party,
        }
    }

    pub fn insert(&mut self, category: ImportCategory, name: impl Into<String>) {
        let set = match category {
            ImportCategory::Stdlib => &mut self.stdlib,
            ImportCategory::Internal => &mut self.internal,
            ImportCategory::Local => &mut self.local,
            ImportCategory::ThirdParty => &mut self.third_party,
        };
        set.insert(name.into());
    }

    pub fn merge(&mut self, other: Self) {
        self.stdlib.extend(other.stdlib);
        self.internal.extend(other.internal);
        self.local.extend(other.local);
        self.third_party.extend(other.third_party);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        ImportCategory::ALL.iter().all(|c| self.get(*c).is_empty())
    }
}

/// One parsed import statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportStatement {
    /// `import a.b as c, d`
    Import(Vec<String>),
    /// `from <dots><module> import ...`
    From { level: usize, module: String },
}

/// Scans every Python file under `path` and aggregates their imports.
///
/// A `path` that is not a directory yields an empty set. Files that cannot
/// be read, decoded or parsed contribute nothing.
#[must_use]
pub fn scan_module(path: &Path, classifier: &ImportClassifier) -> ImportSet {
    let mut imports = ImportSet::default();
    if !path.is_dir() {
        return imports;
    }

    let files = match find_files_with_extension(path, "py", &WalkOptions::for_python_sources()) {
        Ok(files) => files,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "import scan failed");
            return imports;
        }
    };

    for file in files {
        if let Some(found) = scan_file(&file, classifier) {
            imports.merge(found);
        }
    }
    imports
}

/// Imports of a single file, `None` if it is unreadable or unparseable.
#[must_use]
pub fn scan_file(path: &Path, classifier: &ImportClassifier) -> Option<ImportSet> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            debug!(file = %path.display(), error = %e, "unreadable source skipped");
            return None;
        }
    };
    let Ok(source) = String::from_utf8(bytes) else {
        debug!(file = %path.display(), "non UTF-8 source skipped");
        return None;
    };
    let found = scan_source(&source, classifier);
    if found.is_none() {
        debug!(file = %path.display(), "unparseable source skipped");
    }
    found
}

/// Imports of Python source text, `None` if it does not parse.
#[must_use]
pub fn scan_source(source: &str, classifier: &ImportClassifier) -> Option<ImportSet> {
    let mut imports = ImportSet::default();
    for stmt in import_statements(source)? {
        match stmt {
            ImportStatement::Import(names) => {
                for name in names {
                    imports.insert(classifier.classify(&name), name);
                }
            }
            ImportStatement::From { level, module } if level > 0 => {
                let name = format!("{}{module}", ".".repeat(level));
                imports.insert(ImportCategory::Local, name);
            }
            ImportStatement::From { module, .. } => {
                imports.insert(classifier.classify(&module), module);
            }
        }
    }
    Some(imports)
}

/// Every import statement of a module in source order, nested blocks included.
///
/// Returns `None` when the source has a syntax error anywhere.
#[must_use]
pub fn import_statements(source: &str) -> Option<Vec<ImportStatement>> {
    let suite = match ast::Suite::parse(source, "<module>") {
        Ok(suite) => suite,
        Err(e) => {
            debug!(error = %e, "syntax error");
            return None;
        }
    };
    let mut found = Vec::new();
    collect(&suite, &mut found);
    Some(found)
}

fn collect(body: &[ast::Stmt], found: &mut Vec<ImportStatement>) {
    for stmt in body {
        match stmt {
            ast::Stmt::Import(ast::StmtImport { names, .. }) => {
                found.push(ImportStatement::Import(
                    names.iter().map(|alias| alias.name.as_str().to_owned()).collect(),
                ));
            }
            ast::Stmt::ImportFrom(ast::StmtImportFrom { module, level, .. }) => {
                found.push(ImportStatement::From {
                    level: level.as_ref().map_or(0, |l| l.to_usize()),
                    module: module
                        .as_ref()
                        .map_or_else(String::new, |m| m.as_str().to_owned()),
                });
            }
            ast::Stmt::FunctionDef(ast::StmtFunctionDef { body, .. })
            | ast::Stmt::AsyncFunctionDef(ast::StmtAsyncFunctionDef { body, .. })
            | ast::Stmt::ClassDef(ast::StmtClassDef { body, .. })
            | ast::Stmt::With(ast::StmtWith { body, .. })
            | ast::Stmt::AsyncWith(ast::StmtAsyncWith { body, .. }) => collect(body, found),
            ast::Stmt::For(ast::StmtFor { body, orelse, .. })
            | ast::Stmt::AsyncFor(ast::StmtAsyncFor { body, orelse, .. })
            | ast::Stmt::While(ast::StmtWhile { body, orelse, .. })
            | ast::Stmt::If(ast::StmtIf { body, orelse, .. }) => {
                collect(body, found);
                collect(orelse, found);
            }
            ast::Stmt::Match(ast::StmtMatch { cases, .. }) => {
                for case in cases {
                    collect(&case.body, found);
                }
            }
            ast::Stmt::Try(ast::StmtTry {
                body,
                handlers,
                orelse,
                finalbody,
                ..
            })
            | ast::Stmt::TryStar(ast::StmtTryStar {
                body,
                handlers,
                orelse,
                finalbody,
                ..
            }) => {
                collect(body, found);
                for handler in handlers {
                    let ast::ExceptHandler::ExceptHandler(handler) = handler;
                    collect(&handler.body, found);
                }
                collect(orelse, found);
                collect(finalbody, found);
            }
            _ => {}
        }
    }
}
