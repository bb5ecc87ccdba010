// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! More info:
//! - <https://doc.rust-lang.org/reference/tokens.html#ascii-escapes>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>

use std::fmt::{Display, Formatter, Result, Write};

use smallstr::SmallString;

use crate::{RgbColor, TerminalColor};

/// Every escape sequence produced by this crate fits in this many bytes, eg:
/// `\x1b[48;2;255;255;255m` is 19 bytes.
pub const SGR_STRING_STORAGE_SIZE: usize = 24;

pub type SgrString = SmallString<[u8; SGR_STRING_STORAGE_SIZE]>;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SgrCode {
    Reset,
    Bold,
    Italic,
    Underline,
    Strikethrough,
    ForegroundRgb(RgbColor),
    BackgroundRgb(RgbColor),
    ForegroundTerminal(TerminalColor),
    BackgroundTerminal(TerminalColor),
}

pub mod sgr_code_impl {
    use super::*;

    pub const CSI: &str = "\x1b[";
    pub const SGR: &str = "m";

    impl Display for SgrCode {
        /// SGR: set graphics mode command. The RGB channels are always printed with 3
        /// digits so every truecolor sequence has the same length.
        ///
        /// More info:
        /// - <https://notes.burke.libbey.me/ansi-escape-codes/>
        /// - <https://en.wikipedia.org/wiki/ANSI_escape_code>
        #[rustfmt::skip]
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            match *self {
                SgrCode::Reset                  => write!(f, "{CSI}0{SGR}"),
                SgrCode::Bold                   => write!(f, "{CSI}1{SGR}"),
                SgrCode::Italic                 => write!(f, "{CSI}3{SGR}"),
                SgrCode::Underline              => write!(f, "{CSI}4{SGR}"),
                SgrCode::Strikethrough          => write!(f, "{CSI}9{SGR}"),
                SgrCode::ForegroundRgb(rgb)     => write_rgb(f, 38, rgb),
                SgrCode::BackgroundRgb(rgb)     => write_rgb(f, 48, rgb),
                SgrCode::ForegroundTerminal(it) => write!(f, "{CSI}{}{SGR}", it.foreground_code()),
                SgrCode::BackgroundTerminal(it) => write!(f, "{CSI}{}{SGR}", it.background_code()),
            }
        }
    }

    fn write_rgb(f: &mut Formatter<'_>, selector: u8, rgb: RgbColor) -> Result {
        let RgbColor { red, green, blue } = rgb;
        write!(f, "{CSI}{selector};2;{red:03};{green:03};{blue:03}{SGR}")
    }

    impl SgrCode {
        /// Same output as the [Display] implementation, but rendered into an inline
        /// buffer on the stack instead of a heap allocated [String].
        #[must_use]
        pub fn to_small_str(&self) -> SgrString {
            let mut acc = SgrString::new();
            // Writing into a SmallString never fails.
            _ = write!(acc, "{self}");
            acc
        }
    }
}
