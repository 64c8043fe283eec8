// adhd-rs: ADHD Framework Project Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Python import classification and scanning.
//!
//! ```text
//! scanner::scan_module(dir) --> *.py --> import statements
//!                                            |
//!                      classifier::classify(name)
//!                      stdlib | internal | local | third_party
//!                                            |
//!                                        ImportSet
//! ```

pub mod classifier;
pub mod scanner;
pub mod stdlib;


pub use classifier::{ImportCategory, ImportClassifier};
pub use scanner::{ImportSet, scan_module};

use crate::config::types::ImportsConfig;

impl ImportClassifier {
    /// Classifier configured from the `[imports]` section.
    #[must_use]
    pub fn from_config(config: &ImportsConfig) -> Self {
        Self::new(&config.internal_prefixes).with_extra_stdlib(&config.extra_stdlib)
    }
}
