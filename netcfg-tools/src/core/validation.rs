// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Fail-fast check that the environment holds every variable a command needs.

use super::{env::EnvSource, requirements::RequiredVars};

/// One or more required configuration values are unset or empty.
///
/// Names every missing variable at once, so they can all be fixed in one pass.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("missing configuration: {}", .missing.join(", "))]
pub struct MissingConfigurationError {
    missing: Vec<String>,
}

impl MissingConfigurationError {
    pub fn missing(&self) -> &[String] {
        &self.missing
    }

    /// `Ok` if nothing is missing.
    pub fn check(missing: Vec<String>) -> Result<(), Self> {
        if missing.is_empty() {
            Ok(())
        } else {
            Err(Self { missing })
        }
    }
}

/// Checks that every variable in `required` is set and non-empty in `env`.
pub fn validate(
    env: &impl EnvSource,
    required: &RequiredVars,
) -> Result<(), MissingConfigurationError> {
    let missing: Vec<String> = required
        .iter()
        .filter(|name| env.resolve(name).is_none())
        .map(ToOwned::to_owned)
        .collect();
    debug!(@grey, "validated {} variables, {} missing", required.len(), missing.len());
    MissingConfigurationError::check(missing)
}
