// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! The one-shot startup sequence: validate, then assemble.
//!
//! [`Toolchain<Unvalidated>`] can only become [`Toolchain<Ready>`] through
//! [`Toolchain::validate`], and a ready toolchain has no way back.

use super::{
    env::EnvSource,
    registry::{Layout, ToolchainConfig},
    requirements::RequiredVars,
    validation::{validate, MissingConfigurationError},
};

pub struct Unvalidated<E> {
    env: E,
    layout: Layout,
}

pub struct Ready {
    config: ToolchainConfig,
}

pub struct Toolchain<S> {
    state: S,
}

impl<E: EnvSource> Toolchain<Unvalidated<E>> {
    pub fn new(env: E) -> Self {
        Self::with_layout(env, Layout::default())
    }

    pub fn with_layout(env: E, layout: Layout) -> Self {
        Self {
            state: Unvalidated { env, layout },
        }
    }

    /// Checks `required` against the environment, then assembles the configuration.
    pub fn validate(
        self,
        required: &RequiredVars,
    ) -> Result<Toolchain<Ready>, MissingConfigurationError> {
        let Unvalidated { env, layout } = self.state;
        validate(&env, required)?;
        let config = layout.assemble(&env);
        Ok(Toolchain {
            state: Ready { config },
        })
    }
}

impl Toolchain<Ready> {
    pub fn config(&self) -> &ToolchainConfig {
        &self.state.config
    }

    pub fn into_config(self) -> ToolchainConfig {
        self.state.config
    }
}
