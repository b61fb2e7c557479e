// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::{common_args::EnvArgs, error::CliResult};

mod accounts;
mod check;
mod networks;
mod show;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// List signer addresses of a network
    #[clap(visible_alias = "a")]
    Accounts(accounts::Args),
    /// Check that every variable the selected networks need is set
    #[clap(visible_alias = "c")]
    Check(check::Args),
    /// List configured networks and their missing variables
    #[clap(visible_alias = "n")]
    Networks(networks::Args),
    /// Print the assembled configuration as JSON
    #[clap(visible_alias = "s")]
    Show(show::Args),
}

pub fn exec(cmd: Command, env: &EnvArgs) -> CliResult {
    let ctx = env.context()?;
    match cmd {
        Command::Accounts(args) => accounts::exec(args, &ctx),
        Command::Check(args) => check::exec(args, &ctx),
        Command::Networks(args) => networks::exec(args, &ctx),
        Command::Show(args) => show::exec(args, &ctx),
    }
}
