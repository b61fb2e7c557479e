// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use netcfg_tools::ops::{self, Context};

use crate::error::CliResult;

#[derive(Debug, clap::Args)]
pub struct Args {}

pub fn exec(_args: Args, ctx: &Context) -> CliResult {
    ops::networks(ctx)?;
    Ok(())
}
