// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

/// Environment file read when `--env-file` is not given.
pub const DEFAULT_ENV_FILE: &str = ".env";
