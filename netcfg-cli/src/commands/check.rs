// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use netcfg_tools::ops::{self, Context};

use crate::{common_args::NetworkArgs, error::CliResult};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    network: NetworkArgs,
}

pub fn exec(args: Args, ctx: &Context) -> CliResult {
    ops::check(ctx, &args.network.networks, args.network.verify)?;
    Ok(())
}
