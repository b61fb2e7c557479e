// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! General purpose utilities.
//!
//! Nothing in here knows about networks or secrets; these helpers only deal with terminal
//! output and files.

use std::{fs, io, path::Path};

use alloy::primitives::{utils::format_ether, U256};
use color::{Color, GREY, PINK};

pub mod color;

/// Pretty-prints a wei amount as ether, keeping every decimal.
pub fn format_balance(wei: U256) -> String {
    format!("{} ETH", format_ether(wei)).mint()
}

/// Pretty-prints a list of missing variable names, or a grey dash when there are none.
pub fn format_missing(missing: &[String]) -> String {
    if missing.is_empty() {
        return format!("{GREY}-{GREY:#}");
    }
    format!("{PINK}{}{PINK:#}", missing.join(", "))
}

/// Opens a file for writing, or stdout.
pub fn file_or_stdout(path: Option<impl AsRef<Path>>) -> io::Result<Box<dyn io::Write>> {
    Ok(match path {
        Some(file) => Box::new(fs::File::create(file)?),
        None => Box::new(io::stdout().lock()),
    })
}

#[cfg(test)]
mod tests {
    use alloy::primitives::utils::parse_ether;

    use super::*;

    #[test]
    fn balance_keeps_full_precision() {
        let odd = parse_ether("1.000000000000000001").unwrap();
        assert!(format_balance(odd).contains("1.000000000000000001 ETH"));
        let big = parse_ether("10000").unwrap();
        assert!(format_balance(big).contains("10000.000000000000000000 ETH"));
    }

    #[test]
    fn missing_list_is_joined() {
        let missing = ["A".to_owned(), "B".to_owned()];
        assert!(format_missing(&missing).contains("A, B"));
        assert!(format_missing(&[]).contains('-'));
    }
}
