// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Operations driven by the `netcfg` command line.

use crate::{
    core::{
        env::EnvSnapshot,
        manifest::Manifest,
        registry::{Layout, DEFAULT_SIMULATED_NETWORK},
        requirements::Requirements,
        startup::{Ready, Toolchain},
    },
    Result,
};

mod accounts;
mod check;
mod networks;
mod show;

pub use accounts::accounts;
pub use check::check;
pub use networks::networks;
pub use show::show;

/// Everything an operation needs: the environment snapshot, the layout and its requirement
/// table.
#[derive(Debug)]
pub struct Context {
    env: EnvSnapshot,
    layout: Layout,
    requirements: Requirements,
    default_network: String,
}

impl Context {
    pub fn new(env: EnvSnapshot, manifest: Option<Manifest>) -> Self {
        let layout = Layout::default();
        let mut requirements = Requirements::from_layout(&layout);
        let mut default_network = DEFAULT_SIMULATED_NETWORK.to_owned();
        if let Some(manifest) = manifest {
            requirements.apply(&manifest);
            if let Some(network) = manifest.default_network {
                default_network = network;
            }
        }
        Self {
            env,
            layout,
            requirements,
            default_network,
        }
    }

    pub fn default_network(&self) -> &str {
        &self.default_network
    }

    /// The named networks, or the default network if none are named.
    fn networks_or_default<'a>(&'a self, networks: &'a [String]) -> Vec<&'a str> {
        if networks.is_empty() {
            vec![self.default_network.as_str()]
        } else {
            networks.iter().map(String::as_str).collect()
        }
    }

    /// Validates what `networks` (and the explorer, if `verify`) need, then assembles.
    fn startup(&self, networks: &[&str], verify: bool) -> Result<Toolchain<Ready>> {
        let required = self
            .requirements
            .for_networks(networks.iter().copied(), verify)?;
        info!(@grey, "checking {} required variables", required.len());
        debug!(@grey, "required variables: {}", required.iter().collect::<Vec<_>>().join(", "));
        let toolchain = Toolchain::with_layout(&self.env, self.layout.clone());
        Ok(toolchain.validate(&required)?)
    }
}
