// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::{
    core::accounts,
    ops::Context,
    utils::{self, color::Color},
    Result,
};

/// Lists the signer addresses of a network, with balances for simulated accounts.
pub fn accounts(ctx: &Context, network: Option<&str>) -> Result<()> {
    let network = network.unwrap_or(ctx.default_network());
    let toolchain = ctx.startup(&[network], false)?;
    let profile = toolchain.config().select(network)?;
    let list = accounts::accounts(profile)?;
    greyln!("{} accounts on {network}", list.len());
    for account in list {
        let balance = account
            .balance
            .map(utils::format_balance)
            .unwrap_or_default();
        println!(
            "{:>3}  {}  {}  {}",
            account.index,
            account.address.to_string().mint(),
            account.var.grey(),
            balance
        );
    }
    Ok(())
}
