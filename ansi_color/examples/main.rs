// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use runfmt_ansi_color::{ColorSupport, Emphasis, NamedColor, SgrCode, Stream,
                        TerminalColor, examine_env_vars_to_determine_color_support};
use strum::IntoEnumIterator;

fn main() {
    let support = examine_env_vars_to_determine_color_support(Stream::Stdout);
    println!("> Runtime detection of color support ({support:?})");
    if support == ColorSupport::NoColor {
        return;
    }

    // Print every named color as a swatch.
    for color in NamedColor::iter() {
        let fg = SgrCode::ForegroundRgb(color.rgb());
        let reset = SgrCode::Reset;
        println!("{fg}{:<24}{reset} #{:06X}", color.as_ref(), color.hex());
    }

    // Print the terminal palette as background blocks.
    for color in TerminalColor::iter() {
        let bg = SgrCode::BackgroundTerminal(color);
        print!("{bg}  {}", SgrCode::Reset);
    }
    println!();

    // Emphasis letters.
    for ch in ['B', 'I', 'U', 'S'] {
        if let Some(emphasis) = Emphasis::from_char(ch) {
            println!("{}{ch}: {emphasis:?}{}", emphasis.sgr_code(), SgrCode::Reset);
        }
    }
}
