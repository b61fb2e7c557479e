// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Which environment variables each profile needs.

use std::collections::BTreeMap;

use super::{explorer::EXPLORER_KEY, manifest::Manifest, registry::Layout};
use crate::{Error, Result};

/// An insertion-ordered set of variable names.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequiredVars(Vec<String>);

impl RequiredVars {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.contains(&name) {
            self.0.push(name);
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|n| n == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> Extend<S> for RequiredVars {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for name in iter {
            self.insert(name);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for RequiredVars {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut vars = Self::new();
        vars.extend(iter);
        vars
    }
}

/// Required variables per network profile, plus the explorer under [`EXPLORER_KEY`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Requirements {
    table: BTreeMap<String, RequiredVars>,
}

impl Requirements {
    /// Derives the table from the variables a layout references.
    ///
    /// The simulated chain needs nothing by default; its full key set is
    /// [`SimulatedLayout::account_vars`](super::registry::SimulatedLayout::account_vars), which
    /// a manifest can install as its entry.
    pub fn from_layout(layout: &Layout) -> Self {
        let mut table = BTreeMap::new();

        let mut remote = RequiredVars::new();
        remote.extend(layout.remote.url.vars());
        remote.extend(layout.remote.signer_vars.iter().cloned());
        table.insert(layout.remote.name.clone(), remote);

        table.insert(layout.local.name.clone(), RequiredVars::new());

        let mut simulated = RequiredVars::new();
        if let Some(forking) = layout.simulated.forking.as_ref().filter(|f| f.enabled) {
            simulated.extend(forking.url.vars());
        }
        table.insert(layout.simulated.name.clone(), simulated);

        table.insert(
            EXPLORER_KEY.to_owned(),
            [layout.explorer_key_var.clone()].into_iter().collect(),
        );
        Self { table }
    }

    pub fn get(&self, name: &str) -> Option<&RequiredVars> {
        self.table.get(name)
    }

    /// Replaces the entry for `name`.
    pub fn insert(&mut self, name: impl Into<String>, vars: RequiredVars) {
        self.table.insert(name.into(), vars);
    }

    /// Entries from the manifest replace defaults key by key.
    pub fn apply(&mut self, manifest: &Manifest) {
        for (name, vars) in &manifest.requirements {
            debug!(@grey, "requirements for {name} overridden by manifest");
            self.insert(name.clone(), vars.iter().cloned().collect());
        }
    }

    /// Union of the requirements of `networks`, plus the explorer's if asked.
    pub fn for_networks<'a>(
        &self,
        networks: impl IntoIterator<Item = &'a str>,
        with_explorer: bool,
    ) -> Result<RequiredVars> {
        let mut required = RequiredVars::new();
        let explorer = with_explorer.then_some(EXPLORER_KEY);
        for name in networks.into_iter().chain(explorer) {
            let vars = self
                .get(name)
                .ok_or_else(|| Error::UnknownNetwork(name.to_owned()))?;
            required.extend(vars.iter());
        }
        Ok(required)
    }
}
