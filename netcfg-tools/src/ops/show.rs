// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{io::Write, path::Path};

use crate::{ops::Context, utils, Result};

/// Prints the assembled configuration as JSON, secrets masked unless `reveal`.
///
/// Only the named networks are validated; other profiles are printed with `null` in place of
/// unresolved secrets.
pub fn show(
    ctx: &Context,
    networks: &[String],
    verify: bool,
    reveal: bool,
    output: Option<&Path>,
) -> Result<()> {
    let names: Vec<&str> = networks.iter().map(String::as_str).collect();
    let toolchain = ctx.startup(&names, verify)?;
    let config = if reveal {
        toolchain.into_config()
    } else {
        toolchain.config().redacted()
    };
    let mut out = utils::file_or_stdout(output)?;
    writeln!(out, "{}", config.to_json()?)?;
    Ok(())
}
