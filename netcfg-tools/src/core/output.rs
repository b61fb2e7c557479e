// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::path::PathBuf;

use serde::Serialize;

pub const DEFAULT_OUT_DIR: &str = "typechain";
pub const DEFAULT_BINDING_TARGET: &str = "ethers-v6";

/// Where generated type bindings are written, and in which dialect.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputSpec {
    pub out_dir: PathBuf,
    pub target: String,
}

impl Default for OutputSpec {
    fn default() -> Self {
        Self {
            out_dir: DEFAULT_OUT_DIR.into(),
            target: DEFAULT_BINDING_TARGET.to_owned(),
        }
    }
}
