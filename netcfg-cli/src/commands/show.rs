// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::path::PathBuf;

use netcfg_tools::ops::{self, Context};

use crate::{common_args::NetworkArgs, error::CliResult};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Print secret values instead of masking them. Warning: this exposes your keys
    #[arg(long)]
    reveal: bool,
    /// The output file (defaults to stdout).
    #[arg(long)]
    output: Option<PathBuf>,

    #[command(flatten)]
    network: NetworkArgs,
}

pub fn exec(args: Args, ctx: &Context) -> CliResult {
    ops::show(
        ctx,
        &args.network.networks,
        args.network.verify,
        args.reveal,
        args.output.as_deref(),
    )?;
    Ok(())
}
