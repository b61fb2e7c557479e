// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Secret values sourced from the environment.

use std::fmt;

use serde::{Serialize, Serializer};

use super::env::EnvSource;

/// Placeholder written in place of a secret when a configuration is redacted.
pub const REDACTED: &str = "<redacted>";

/// A secret read from an environment variable.
///
/// The value may be absent: profiles that the current command does not use are still assembled,
/// and their secrets stay unresolved until something selects them. `Debug` and `Display` only
/// ever show the variable name.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret {
    var: String,
    value: Option<String>,
}

impl Secret {
    /// Reads `var` from `env`; blank values count as unset.
    pub fn from_env(env: &impl EnvSource, var: impl Into<String>) -> Self {
        let var = var.into();
        let value = env.resolve(&var);
        Self { var, value }
    }

    /// Name of the environment variable this secret comes from.
    pub fn var(&self) -> &str {
        &self.var
    }

    pub fn is_resolved(&self) -> bool {
        self.value.is_some()
    }

    /// The secret value itself.
    pub fn expose(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Copy of this secret with the value masked.
    pub fn redacted(&self) -> Self {
        Self {
            var: self.var.clone(),
            value: self.value.as_ref().map(|_| REDACTED.to_owned()),
        }
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.is_resolved() { "set" } else { "unset" };
        write!(f, "Secret({}: {state})", self.var)
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.var)
    }
}

/// Serializes to the value itself, or `null` when unresolved.
impl Serialize for Secret {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}
