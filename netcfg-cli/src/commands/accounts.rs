// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use netcfg_tools::ops::{self, Context};

use crate::error::CliResult;

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Network to list [default: the manifest's default network, else hardhat]
    #[arg(short, long)]
    network: Option<String>,
}

pub fn exec(args: Args, ctx: &Context) -> CliResult {
    ops::accounts(ctx, args.network.as_deref())?;
    Ok(())
}
