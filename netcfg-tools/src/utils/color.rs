// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Terminal colors used by the log macros and ops output.

use anstyle::{Ansi256Color, Color as AnsiStyleColor, Style};

pub const GREY: Style = Style::new().fg_color(Some(AnsiStyleColor::Ansi256(Ansi256Color(246))));
pub const MINT: Style = Style::new().fg_color(Some(AnsiStyleColor::Ansi256(Ansi256Color(121))));
pub const PINK: Style = Style::new().fg_color(Some(AnsiStyleColor::Ansi256(Ansi256Color(211))));

pub trait Color {
    fn grey(&self) -> String;
    fn mint(&self) -> String;
}

impl<T: AsRef<str> + ?Sized> Color for T {
    fn grey(&self) -> String {
        paint(GREY, self.as_ref())
    }

    fn mint(&self) -> String {
        paint(MINT, self.as_ref())
    }
}

fn paint(style: Style, text: &str) -> String {
    format!("{style}{text}{style:#}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn painted_text_keeps_content() {
        let painted = "goerli".mint();
        assert!(painted.contains("goerli"));
        assert!(painted.starts_with("\u{1b}["));
        assert!(painted.ends_with("\u{1b}[0m"));
    }
}
