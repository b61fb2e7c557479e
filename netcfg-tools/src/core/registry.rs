// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Assembly of the full toolchain configuration.
//!
//! A [`Layout`] holds everything literal: compiler settings, output paths, profile names, URL
//! templates and the names of the variables secrets come from. [`Layout::assemble`] combines
//! it with an environment to produce a [`ToolchainConfig`].

use std::collections::BTreeMap;

use alloy::primitives::U256;
use serde::Serialize;
use typed_builder::TypedBuilder;

use super::{
    compiler::CompilerProfile,
    env::EnvSource,
    explorer::ExplorerProfile,
    network::{
        ForkingSource, LocalRpc, NetworkProfile, RemoteRpc, SeededAccount, SimulatedChain,
        LOCALHOST_ENDPOINT,
    },
    output::OutputSpec,
    secret::Secret,
    template::{TemplatedUrl, UrlTemplate},
    validation::MissingConfigurationError,
};
use crate::{Error, Result};

pub const DEFAULT_REMOTE_NETWORK: &str = "goerli";
pub const DEFAULT_LOCAL_NETWORK: &str = "localhost";
pub const DEFAULT_SIMULATED_NETWORK: &str = "hardhat";

pub const DEFAULT_REMOTE_URL: &str =
    "https://eth-goerli.g.alchemy.com/v2/${ALCHEMY_GOERLI_API_KEY}";
pub const DEFAULT_DEPLOYER_KEY_VAR: &str = "DEPLOYER_PRIVATE_KEY";
pub const DEFAULT_EXPLORER_KEY_VAR: &str = "ETHERSCAN_API_KEY";

pub const DEFAULT_ACCOUNT_COUNT: usize = 10;
/// `{}` is replaced with the 1-based account index.
pub const DEFAULT_ACCOUNT_KEY_PATTERN: &str = "ACCOUNT_{}_PRIVATE_KEY";
/// 10 000 ether, in wei.
pub const DEFAULT_ACCOUNT_BALANCE: U256 = U256::from_limbs([0x19e0_c9ba_b240_0000, 0x21e, 0, 0]);

/// Literal settings of a configuration. Secrets are referenced by variable name only.
#[derive(Clone, Debug, PartialEq, Eq, TypedBuilder)]
#[builder(field_defaults(default, setter(into)))]
pub struct Layout {
    pub compiler: CompilerProfile,
    pub output: OutputSpec,
    pub remote: RemoteLayout,
    pub local: LocalLayout,
    pub simulated: SimulatedLayout,
    #[builder(default = DEFAULT_EXPLORER_KEY_VAR.to_owned())]
    pub explorer_key_var: String,
}

impl Default for Layout {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemoteLayout {
    pub name: String,
    pub url: UrlTemplate,
    pub signer_vars: Vec<String>,
}

impl Default for RemoteLayout {
    fn default() -> Self {
        Self {
            name: DEFAULT_REMOTE_NETWORK.to_owned(),
            url: UrlTemplate::new(DEFAULT_REMOTE_URL),
            signer_vars: vec![DEFAULT_DEPLOYER_KEY_VAR.to_owned()],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalLayout {
    pub name: String,
    pub url: String,
}

impl Default for LocalLayout {
    fn default() -> Self {
        Self {
            name: DEFAULT_LOCAL_NETWORK.to_owned(),
            url: LOCALHOST_ENDPOINT.to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, TypedBuilder)]
pub struct SimulatedLayout {
    #[builder(default = DEFAULT_SIMULATED_NETWORK.to_owned(), setter(into))]
    pub name: String,
    #[builder(default = DEFAULT_ACCOUNT_COUNT)]
    pub account_count: usize,
    #[builder(default = DEFAULT_ACCOUNT_KEY_PATTERN.to_owned(), setter(into))]
    pub key_pattern: String,
    #[builder(default = DEFAULT_ACCOUNT_BALANCE)]
    pub balance: U256,
    #[builder(default, setter(strip_option))]
    pub forking: Option<ForkingLayout>,
}

impl Default for SimulatedLayout {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl SimulatedLayout {
    /// Variable names of the seeded account keys, account 1 first.
    pub fn account_vars(&self) -> impl Iterator<Item = String> + '_ {
        (1..=self.account_count).map(|index| self.key_pattern.replace("{}", &index.to_string()))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ForkingLayout {
    pub url: UrlTemplate,
    pub enabled: bool,
}

impl Layout {
    /// Builds the configuration. Unresolved secrets are kept as such; nothing here fails.
    pub fn assemble(&self, env: &impl EnvSource) -> ToolchainConfig {
        let mut networks = BTreeMap::new();

        let remote = RemoteRpc {
            url: TemplatedUrl::render(self.remote.url.clone(), env),
            accounts: self
                .remote
                .signer_vars
                .iter()
                .map(|var| Secret::from_env(env, var))
                .collect(),
        };
        networks.insert(self.remote.name.clone(), NetworkProfile::RemoteRpc(remote));

        let local = LocalRpc {
            url: self.local.url.clone(),
        };
        networks.insert(self.local.name.clone(), NetworkProfile::LocalRpc(local));

        let simulated = SimulatedChain {
            forking: self.simulated.forking.as_ref().map(|forking| ForkingSource {
                url: TemplatedUrl::render(forking.url.clone(), env),
                enabled: forking.enabled,
            }),
            accounts: self
                .simulated
                .account_vars()
                .map(|var| SeededAccount {
                    private_key: Secret::from_env(env, var),
                    balance: self.simulated.balance,
                })
                .collect(),
        };
        networks.insert(
            self.simulated.name.clone(),
            NetworkProfile::SimulatedChain(simulated),
        );

        debug!(@grey, "assembled {} network profiles", networks.len());
        ToolchainConfig {
            compiler: self.compiler.clone(),
            output: self.output.clone(),
            networks,
            explorer: ExplorerProfile::from_env(env, &self.explorer_key_var),
        }
    }
}

/// Assembles the default configuration from `env`.
pub fn build_config(env: &impl EnvSource) -> ToolchainConfig {
    Layout::default().assemble(env)
}

/// The assembled configuration, serialized with the field names the host toolchain reads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ToolchainConfig {
    #[serde(rename = "solidity")]
    compiler: CompilerProfile,
    #[serde(rename = "typechain")]
    output: OutputSpec,
    networks: BTreeMap<String, NetworkProfile>,
    #[serde(rename = "etherscan")]
    explorer: ExplorerProfile,
}

impl ToolchainConfig {
    pub fn compiler(&self) -> &CompilerProfile {
        &self.compiler
    }

    pub fn output(&self) -> &OutputSpec {
        &self.output
    }

    pub fn explorer(&self) -> &ExplorerProfile {
        &self.explorer
    }

    pub fn networks(&self) -> impl Iterator<Item = (&str, &NetworkProfile)> {
        self.networks.iter().map(|(name, p)| (name.as_str(), p))
    }

    pub fn network(&self, name: &str) -> Result<&NetworkProfile> {
        self.networks
            .get(name)
            .ok_or_else(|| Error::UnknownNetwork(name.to_owned()))
    }

    /// Looks up a profile for active use; every secret it carries must be resolved.
    pub fn select(&self, name: &str) -> Result<&NetworkProfile> {
        let profile = self.network(name)?;
        MissingConfigurationError::check(profile.missing(name))?;
        debug!(@grey, "selected network {name} ({})", profile.kind());
        Ok(profile)
    }

    /// Copy with every resolved secret masked.
    pub fn redacted(&self) -> Self {
        Self {
            compiler: self.compiler.clone(),
            output: self.output.clone(),
            networks: self
                .networks
                .iter()
                .map(|(name, profile)| (name.clone(), profile.redacted()))
                .collect(),
            explorer: self.explorer.redacted(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
