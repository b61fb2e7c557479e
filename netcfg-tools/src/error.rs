// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::core::{manifest::ManifestError, validation::MissingConfigurationError};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    MissingConfiguration(#[from] MissingConfigurationError),
    #[error("{0}")]
    Manifest(#[from] ManifestError),

    #[error("unknown network: {0}")]
    UnknownNetwork(String),
    #[error("invalid private key in {var}: {reason}")]
    InvalidKey { var: String, reason: String },
}
