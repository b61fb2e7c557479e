// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use serde::Serialize;

use super::{env::EnvSource, secret::Secret};

/// Key under which explorer requirements live in the requirement table.
pub const EXPLORER_KEY: &str = "etherscan";

/// Block-explorer credentials used for contract verification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplorerProfile {
    pub api_key: Secret,
}

impl ExplorerProfile {
    pub fn from_env(env: &impl EnvSource, api_key_var: &str) -> Self {
        Self {
            api_key: Secret::from_env(env, api_key_var),
        }
    }

    pub fn missing(&self) -> Vec<String> {
        if self.api_key.is_resolved() {
            Vec::new()
        } else {
            vec![self.api_key.var().to_owned()]
        }
    }

    pub fn redacted(&self) -> Self {
        Self {
            api_key: self.api_key.redacted(),
        }
    }
}
