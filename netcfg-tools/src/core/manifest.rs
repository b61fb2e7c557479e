// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

/// Filename of the optional project manifest.
pub const FILENAME: &str = "NetCfg.toml";

#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml read error: {0}")]
    TomlRead(#[from] toml::de::Error),

    #[error("missing manifest: {}", .0.display())]
    Missing(PathBuf),
}

/// Project overrides for the requirement table.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Network checked when a command names none.
    #[serde(default)]
    pub default_network: Option<String>,
    /// Replaces the required variables of each listed profile.
    #[serde(default)]
    pub requirements: BTreeMap<String, Vec<String>>,
}

pub fn load(path: impl AsRef<Path>) -> Result<Manifest, ManifestError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ManifestError::Missing(path.to_owned()));
    }

    let contents = fs::read_to_string(path)?;
    let manifest = toml::from_str(&contents)?;
    debug!(@grey, "loaded manifest {}", path.display());
    Ok(manifest)
}

/// Like [`load`], but a missing file yields `None`.
pub fn load_if_exists(path: impl AsRef<Path>) -> Result<Option<Manifest>, ManifestError> {
    match load(path) {
        Ok(manifest) => Ok(Some(manifest)),
        Err(ManifestError::Missing(_)) => Ok(None),
        Err(err) => Err(err),
    }
}
