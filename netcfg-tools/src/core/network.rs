// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Network profiles: where to send transactions and who signs them.

use std::fmt;

use alloy::primitives::U256;
use serde::{Serialize, Serializer};

use super::{secret::Secret, template::TemplatedUrl};

/// Loopback endpoint of a locally running node.
pub const LOCALHOST_ENDPOINT: &str = "http://127.0.0.1:8545";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NetworkKind {
    RemoteRpc,
    LocalRpc,
    SimulatedChain,
}

impl fmt::Display for NetworkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::RemoteRpc => "remote-rpc",
            Self::LocalRpc => "local-rpc",
            Self::SimulatedChain => "simulated",
        })
    }
}

/// Connection and signing descriptor for one named network.
///
/// Serializes untagged, in the shape the host toolchain reads: `{ url, accounts }` for RPC
/// networks and `{ accounts: [{ privateKey, balance }] }` for the simulated chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NetworkProfile {
    RemoteRpc(RemoteRpc),
    LocalRpc(LocalRpc),
    SimulatedChain(SimulatedChain),
}

/// A public network reached through a provider URL with an embedded API key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RemoteRpc {
    pub url: TemplatedUrl,
    pub accounts: Vec<Secret>,
}

/// A node on this machine. Needs no secrets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LocalRpc {
    pub url: String,
}

impl Default for LocalRpc {
    fn default() -> Self {
        Self {
            url: LOCALHOST_ENDPOINT.to_owned(),
        }
    }
}

/// An in-memory chain seeded with pre-funded accounts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SimulatedChain {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forking: Option<ForkingSource>,
    pub accounts: Vec<SeededAccount>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeededAccount {
    pub private_key: Secret,
    #[serde(serialize_with = "serialize_decimal")]
    pub balance: U256,
}

/// Remote state a simulated chain may replay from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ForkingSource {
    pub url: TemplatedUrl,
    pub enabled: bool,
}

impl NetworkProfile {
    pub fn kind(&self) -> NetworkKind {
        match self {
            Self::RemoteRpc(_) => NetworkKind::RemoteRpc,
            Self::LocalRpc(_) => NetworkKind::LocalRpc,
            Self::SimulatedChain(_) => NetworkKind::SimulatedChain,
        }
    }

    /// Endpoint template or fixed URL, for display. Never contains secret values.
    pub fn endpoint(&self) -> Option<&str> {
        match self {
            Self::RemoteRpc(remote) => Some(remote.url.template().as_str()),
            Self::LocalRpc(local) => Some(&local.url),
            Self::SimulatedChain(_) => None,
        }
    }

    /// Secrets this profile signs with, in account order.
    pub fn signing_keys(&self) -> Vec<&Secret> {
        match self {
            Self::RemoteRpc(remote) => remote.accounts.iter().collect(),
            Self::LocalRpc(_) => Vec::new(),
            Self::SimulatedChain(chain) => {
                chain.accounts.iter().map(|acct| &acct.private_key).collect()
            }
        }
    }

    /// Everything that keeps this profile from being used, as variable names.
    ///
    /// `name` labels problems that have no variable of their own, such as an empty signing-key
    /// sequence or a malformed literal URL.
    pub fn missing(&self, name: &str) -> Vec<String> {
        let mut missing = Vec::new();
        match self {
            Self::RemoteRpc(remote) => {
                missing.extend(remote.url.missing(name));
                if remote.accounts.is_empty() {
                    missing.push(format!("{name}.accounts"));
                }
            }
            Self::LocalRpc(_) => {}
            Self::SimulatedChain(chain) => {
                if let Some(forking) = chain.forking.as_ref().filter(|f| f.enabled) {
                    missing.extend(forking.url.missing(&format!("{name}.forking")));
                }
            }
        }
        missing.extend(
            self.signing_keys()
                .into_iter()
                .filter(|key| !key.is_resolved())
                .map(|key| key.var().to_owned()),
        );
        missing
    }

    /// Copy with every secret masked.
    pub fn redacted(&self) -> Self {
        match self {
            Self::RemoteRpc(remote) => Self::RemoteRpc(RemoteRpc {
                url: remote.url.redacted(),
                accounts: remote.accounts.iter().map(Secret::redacted).collect(),
            }),
            Self::LocalRpc(local) => Self::LocalRpc(local.clone()),
            Self::SimulatedChain(chain) => Self::SimulatedChain(SimulatedChain {
                forking: chain.forking.as_ref().map(|forking| ForkingSource {
                    url: forking.url.redacted(),
                    enabled: forking.enabled,
                }),
                accounts: chain
                    .accounts
                    .iter()
                    .map(|acct| SeededAccount {
                        private_key: acct.private_key.redacted(),
                        balance: acct.balance,
                    })
                    .collect(),
            }),
        }
    }
}

fn serialize_decimal<S: Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.to_string())
}
