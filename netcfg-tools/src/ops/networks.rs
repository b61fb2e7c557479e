// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::{
    core::{explorer::EXPLORER_KEY, registry::ToolchainConfig},
    ops::Context,
    utils::{self, color::Color},
    Result,
};

/// Lists every configured network and what it is still missing.
pub fn networks(ctx: &Context) -> Result<()> {
    let toolchain = ctx.startup(&[], false)?;
    print_networks(toolchain.config(), ctx.default_network());
    Ok(())
}

fn print_networks(config: &ToolchainConfig, default_network: &str) {
    for (name, profile) in config.networks() {
        let marker = if name == default_network { '*' } else { ' ' };
        println!(
            "{}",
            row(
                marker,
                name,
                &profile.kind().to_string(),
                profile.endpoint().unwrap_or("-"),
                &profile.missing(name),
            )
        );
    }
    println!(
        "{}",
        row(' ', EXPLORER_KEY, "explorer", "-", &config.explorer().missing())
    );
}

/// Columns are padded before they are colored, so escape codes do not eat into the width.
fn row(marker: char, name: &str, kind: &str, endpoint: &str, missing: &[String]) -> String {
    format!(
        "{marker}{} {kind:<11} {} {}",
        format!("{name:<12}").mint(),
        format!("{endpoint:<60}").grey(),
        utils::format_missing(missing),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_sits_inside_color() {
        let line = row('*', "goerli", "remote-rpc", "-", &["KEY".to_owned()]);
        assert!(line.starts_with('*'));
        assert!(line.contains(&format!("{:<12}\u{1b}[0m", "goerli")));
        assert!(line.contains(&format!("{:<60}\u{1b}[0m", "-")));
        assert!(line.contains("remote-rpc  "));
    }
}
