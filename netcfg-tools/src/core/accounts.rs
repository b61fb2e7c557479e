// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Signer addresses for configured keys.

use alloy::{
    primitives::{Address, U256},
    signers::local::PrivateKeySigner,
};

use super::{network::NetworkProfile, secret::Secret};
use crate::{Error, Result};

/// One signing account of a network profile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountInfo {
    /// 1-based position.
    pub index: usize,
    pub var: String,
    pub address: Address,
    /// Initial balance, for simulated accounts.
    pub balance: Option<U256>,
}

/// Derives the address controlled by a hex private key.
pub fn signer_address(key: &Secret) -> Result<Address> {
    let invalid = |reason: String| Error::InvalidKey {
        var: key.var().to_owned(),
        reason,
    };
    let value = key.expose().ok_or_else(|| invalid("unset".to_owned()))?;
    let signer: PrivateKeySigner = value
        .trim()
        .parse()
        .map_err(|err| invalid(format!("{err}")))?;
    Ok(signer.address())
}

/// Lists the accounts of `profile` in order.
pub fn accounts(profile: &NetworkProfile) -> Result<Vec<AccountInfo>> {
    let balances: Vec<Option<U256>> = match profile {
        NetworkProfile::SimulatedChain(chain) => {
            chain.accounts.iter().map(|a| Some(a.balance)).collect()
        }
        _ => vec![None; profile.signing_keys().len()],
    };
    profile
        .signing_keys()
        .into_iter()
        .zip(balances)
        .enumerate()
        .map(|(i, (key, balance))| {
            Ok(AccountInfo {
                index: i + 1,
                var: key.var().to_owned(),
                address: signer_address(key)?,
                balance,
            })
        })
        .collect()
}
