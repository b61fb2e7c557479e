// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Environment-driven network and deployment configuration for Ethereum contract toolchains.
//!
//! The configuration is assembled once per process from an environment snapshot. Required
//! variables are checked up front by [`core::validation::validate`], after which
//! [`core::registry::build_config`] produces an immutable [`ToolchainConfig`].

#[macro_use]
mod macros;

pub mod core;
pub(crate) mod error;
pub mod ops;
pub mod utils;

pub use core::{
    env::{EnvSnapshot, EnvSource, ProcessEnv},
    registry::{build_config, Layout, ToolchainConfig},
    requirements::{RequiredVars, Requirements},
    startup::{Ready, Toolchain, Unvalidated},
    validation::{validate, MissingConfigurationError},
};
pub use error::{Error, Result};
