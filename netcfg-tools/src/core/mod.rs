// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

pub mod accounts;
pub mod compiler;
pub mod env;
pub mod explorer;
pub mod manifest;
pub mod network;
pub mod output;
pub mod registry;
pub mod requirements;
pub mod secret;
pub mod startup;
pub mod template;
pub mod validation;
