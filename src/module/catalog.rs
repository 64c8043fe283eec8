// adhd-rs: ADHD Framework Project Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Snapshot of discovered modules.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::record::{Layer, ModuleRecord};

/// Similarity ratio a name must reach to be suggested.
pub const SUGGESTION_CUTOFF: f32 = 0.6;

/// Most suggestions returned for one miss.
pub const MAX_SUGGESTIONS: usize = 3;

/// Modules from one scan, sorted by name.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    root: PathBuf,
    modules: Vec<ModuleRecord>,
}

impl Catalog {
    #[must_use]
    pub fn new(root: PathBuf, mut modules: Vec<ModuleRecord>) -> Self {
        modules.sort_by(|a, b| a.name().cmp(b.name()));
        Self { root, modules }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModuleRecord> {
        self.modules.iter()
    }

    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.modules.iter().map(ModuleRecord::name).collect()
    }

    /// Exact-name lookup.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ModuleRecord> {
        self.modules.iter().find(|m| m.name() == name)
    }

    /// Close names for a lookup miss, best first. Advisory only.
    #[must_use]
    pub fn suggest(&self, name: &str) -> Vec<String> {
        suggest_names(name, self.modules.iter().map(ModuleRecord::name))
    }

    /// Modules in `layers`, or every module outside `hidden` when no layers are given.
    #[must_use]
    pub fn filter(&self, layers: Option<&[Layer]>, hidden: &[Layer]) -> Vec<&ModuleRecord> {
        self.modules
            .iter()
            .filter(|m| match layers {
                Some(layers) => layers.contains(&m.layer()),
                None => !hidden.contains(&m.layer()),
            })
            .collect()
    }

    /// Module count per layer; every layer is present.
    #[must_use]
    pub fn counts_by_layer(&self) -> BTreeMap<Layer, usize> {
        let mut counts: BTreeMap<Layer, usize> = Layer::ALL.into_iter().map(|l| (l, 0)).collect();
        for module in &self.modules {
            *counts.entry(module.layer()).or_default() += 1;
        }
        counts
    }

    #[must_use]
    pub fn into_modules(self) -> Vec<ModuleRecord> {
        self.modules
    }
}

/// Up to [`MAX_SUGGESTIONS`] candidates whose character similarity with
/// `name` reaches [`SUGGESTION_CUTOFF`], highest ratio first.
#[must_use]
pub fn suggest_names<'a>(name: &str, candidates: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut scored: Vec<(f32, &str)> = candidates
        .into_iter()
        .map(|candidate| {
            let ratio = similar::TextDiff::from_chars(name, candidate).ratio();
            (ratio, candidate)
        })
        .filter(|(ratio, _)| *ratio >= SUGGESTION_CUTOFF)
        .collect();

    scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
    scored
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(_, candidate)| candidate.to_string())
        .collect()
}
