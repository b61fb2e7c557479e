// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::num::NonZeroU32;

use semver::Version;
use serde::Serialize;

/// Solidity compiler release the contracts are built with.
pub const DEFAULT_SOLC_VERSION: Version = Version::new(0, 8, 18);

/// Default number of optimizer runs.
pub const DEFAULT_OPTIMIZER_RUNS: NonZeroU32 = match NonZeroU32::new(200) {
    Some(runs) => runs,
    None => unreachable!(),
};

/// Compiler version and optimizer settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CompilerProfile {
    pub version: Version,
    pub settings: CompilerSettings,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CompilerSettings {
    pub optimizer: OptimizerSettings,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct OptimizerSettings {
    pub enabled: bool,
    pub runs: NonZeroU32,
}

impl CompilerProfile {
    pub fn new(version: Version, optimizer_enabled: bool, optimizer_runs: NonZeroU32) -> Self {
        Self {
            version,
            settings: CompilerSettings {
                optimizer: OptimizerSettings {
                    enabled: optimizer_enabled,
                    runs: optimizer_runs,
                },
            },
        }
    }

    pub fn optimizer_enabled(&self) -> bool {
        self.settings.optimizer.enabled
    }

    pub fn optimizer_runs(&self) -> NonZeroU32 {
        self.settings.optimizer.runs
    }
}

impl Default for CompilerProfile {
    fn default() -> Self {
        Self::new(DEFAULT_SOLC_VERSION, true, DEFAULT_OPTIMIZER_RUNS)
    }
}
