// adhd-rs: ADHD Framework Project Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Module discovery and catalog.
//!
//! ```text
//! ModuleScanner::scan_all_modules()
//!   find_dirs_containing(root, marker)
//!     -> outermost module dirs
//!     -> read_module_metadata + issues
//!     -> Catalog (sorted by name)
//!          get / suggest / filter / counts_by_layer
//! ```

pub mod catalog;
pub mod discovery;
pub mod metadata;
pub mod record;


pub use catalog::{Catalog, suggest_names};
pub use discovery::ModuleScanner;
pub use metadata::{ModuleMetadata, read_module_metadata, read_requirements_txt};
pub use record::{IssueCode, Layer, ModuleIssue, ModuleRecord};
