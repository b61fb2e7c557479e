// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::{ops::Context, Result};

/// Validates what the requirement table lists for `networks`, failing with every missing name.
pub fn check(ctx: &Context, networks: &[String], verify: bool) -> Result<()> {
    let networks = ctx.networks_or_default(networks);
    ctx.startup(&networks, verify)?;
    mintln!("configuration ok for {}", networks.join(", "));
    if verify {
        mintln!("explorer api key present");
    }
    Ok(())
}
