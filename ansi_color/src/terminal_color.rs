// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The 16 classic terminal colors, selected in color clauses with a `t` prefix (eg:
//! `{!tRED}`, `{!tBRIGHT_CYAN;BG}`). Unlike [`crate::NamedColor`] these do not carry an
//! RGB value; the terminal's palette decides what they look like.
//!
//! More info: <https://en.wikipedia.org/wiki/ANSI_escape_code#3-bit_and_4-bit>

use strum_macros::{AsRefStr, EnumCount, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumCount, EnumIter, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum TerminalColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl TerminalColor {
    /// SGR parameter selecting this color as the foreground. Add 10 for the background.
    #[rustfmt::skip]
    #[must_use]
    pub const fn foreground_code(self) -> u8 {
        match self {
            TerminalColor::Black         => 30,
            TerminalColor::Red           => 31,
            TerminalColor::Green         => 32,
            TerminalColor::Yellow        => 33,
            TerminalColor::Blue          => 34,
            TerminalColor::Magenta       => 35,
            TerminalColor::Cyan          => 36,
            TerminalColor::White         => 37,
            TerminalColor::BrightBlack   => 90,
            TerminalColor::BrightRed     => 91,
            TerminalColor::BrightGreen   => 92,
            TerminalColor::BrightYellow  => 93,
            TerminalColor::BrightBlue    => 94,
            TerminalColor::BrightMagenta => 95,
            TerminalColor::BrightCyan    => 96,
            TerminalColor::BrightWhite   => 97,
        }
    }

    #[must_use]
    pub const fn background_code(self) -> u8 { self.foreground_code() + 10 }

    #[must_use]
    pub fn lookup(name: &str) -> Option<Self> { name.parse().ok() }
}
