// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::path::PathBuf;

use eyre::WrapErr;
use netcfg_tools::{
    core::manifest::{self, FILENAME as MANIFEST_FILENAME},
    ops::Context,
    EnvSnapshot,
};

use crate::constants::DEFAULT_ENV_FILE;

#[derive(Debug, clap::Args)]
pub struct EnvArgs {
    /// Environment file to load before reading variables. Existing variables are not overridden
    #[arg(long, global = true)]
    env_file: Option<PathBuf>,
    /// Manifest overriding required variables per network [default: NetCfg.toml, if present]
    #[arg(long, global = true)]
    manifest: Option<PathBuf>,
}

impl EnvArgs {
    /// Loads the env file and manifest, then snapshots the environment.
    pub fn context(&self) -> eyre::Result<Context> {
        match &self.env_file {
            Some(path) => {
                dotenvy::from_path(path)
                    .wrap_err_with(|| format!("could not load {}", path.display()))?;
            }
            None => match dotenvy::from_filename(DEFAULT_ENV_FILE) {
                Ok(_) => {}
                Err(err) if err.not_found() => {}
                Err(err) => return Err(err).wrap_err("could not load .env"),
            },
        }

        let manifest = match &self.manifest {
            Some(path) => Some(manifest::load(path)?),
            None => manifest::load_if_exists(MANIFEST_FILENAME)?,
        };

        Ok(Context::new(EnvSnapshot::capture(), manifest))
    }
}

#[derive(Debug, clap::Args)]
pub struct NetworkArgs {
    /// Network whose variables are required. May be repeated
    #[arg(short, long = "network", value_name = "NAME")]
    pub networks: Vec<String>,
    /// Also require the block-explorer API key
    #[arg(long)]
    pub verify: bool,
}
