// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Parses the text after `!` in a placeholder into escape sequences:
//!
//! | Clause                 | Meaning                                             |
//! |------------------------|-----------------------------------------------------|
//! | (empty)                | reset all attributes                                |
//! | `BLUE`, `alice_blue`   | named truecolor, case-insensitive                   |
//! | `tRED`, `tBRIGHT_RED`  | one of the 16 terminal colors                       |
//! | `255;128;0`            | truecolor from channels, each in `[0, 255]`         |
//! | `BIUS`                 | emphasis letters, any subset of `B`, `I`, `U`, `S`  |
//!
//! After a color, `;BG` selects the background and `;B` (or any emphasis letters) adds
//! emphasis, eg: `{!BLUE;BG;BU}`.

use runfmt_ansi_color::{Emphasis, NamedColor, RgbColor, SgrCode, TerminalColor};

use crate::{ColorCodes, Cursor, FormatErrorKind, LocatedError};

const BACKGROUND: &str = "BG";
const MAX_EMPHASIS_LETTERS: usize = 4;

#[derive(Debug, Clone, Copy)]
enum ColorChoice {
    Rgb(RgbColor),
    Terminal(TerminalColor),
}

/// Parse a color clause starting at the cursor (just after the `!`). Stops before the
/// closing `}`.
///
/// # Errors
///
/// Returns a [`LocatedError`] for unknown names, bad emphasis letters, out of range or
/// incomplete channel lists.
pub fn parse_color_clause(cursor: &mut Cursor<'_>) -> Result<ColorCodes, LocatedError> {
    let mut codes = ColorCodes::new();

    if matches!(cursor.peek(), None | Some('}')) {
        codes.push(SgrCode::Reset);
        return Ok(codes);
    }

    let color = if cursor.peek().is_some_and(|it| it.is_ascii_digit()) {
        Some(ColorChoice::Rgb(parse_channels(cursor)?))
    } else {
        let position = cursor.position();
        let name = cursor.identifier().unwrap_or_default();
        match lookup_color(name) {
            Some(color) => Some(color),
            None if looks_like_emphasis(name) => {
                push_emphasis(&mut codes, name, position)?;
                None
            }
            None => return Err(FormatErrorKind::InvalidColorName.at(position)),
        }
    };

    let mut background = false;
    while cursor.eat(';') {
        let position = cursor.position();
        let word = cursor.identifier().unwrap_or_default();
        if word == BACKGROUND && color.is_some() {
            background = true;
        } else {
            push_emphasis(&mut codes, word, position)?;
        }
    }

    if let Some(color) = color {
        #[rustfmt::skip]
        let code = match (color, background) {
            (ColorChoice::Rgb(rgb), false)     => SgrCode::ForegroundRgb(rgb),
            (ColorChoice::Rgb(rgb), true)      => SgrCode::BackgroundRgb(rgb),
            (ColorChoice::Terminal(it), false) => SgrCode::ForegroundTerminal(it),
            (ColorChoice::Terminal(it), true)  => SgrCode::BackgroundTerminal(it),
        };
        codes.insert(0, code);
    }

    Ok(codes)
}

/// Named colors win over terminal colors, so `TAN` is the named color and not `t` +
/// `AN`.
fn lookup_color(name: &str) -> Option<ColorChoice> {
    if let Some(named) = NamedColor::lookup(name) {
        return Some(ColorChoice::Rgb(named.rgb()));
    }
    let terminal_name = name.strip_prefix(['t', 'T'])?;
    TerminalColor::lookup(terminal_name).map(ColorChoice::Terminal)
}

fn looks_like_emphasis(name: &str) -> bool {
    name.len() <= MAX_EMPHASIS_LETTERS
        && name.chars().next().and_then(Emphasis::from_char).is_some()
}

fn push_emphasis(
    codes: &mut ColorCodes,
    letters: &str,
    position: usize,
) -> Result<(), LocatedError> {
    if letters.is_empty() {
        return Err(FormatErrorKind::InvalidEmphasisCharacter.at(position));
    }
    for (offset, letter) in letters.char_indices() {
        let emphasis = Emphasis::from_char(letter).ok_or_else(|| {
            FormatErrorKind::InvalidEmphasisCharacter.at(position + offset)
        })?;
        codes.push(emphasis.sgr_code());
    }
    Ok(())
}

/// `r;g;b`.
fn parse_channels(cursor: &mut Cursor<'_>) -> Result<RgbColor, LocatedError> {
    let red = parse_channel(cursor)?;
    expect_separator(cursor)?;
    let green = parse_channel(cursor)?;
    expect_separator(cursor)?;
    let blue = parse_channel(cursor)?;
    Ok(RgbColor::from_u8(red, green, blue))
}

fn parse_channel(cursor: &mut Cursor<'_>) -> Result<u8, LocatedError> {
    let position = cursor.position();
    let value = cursor
        .number()
        .ok_or_else(|| FormatErrorKind::MissingChannelSeparator.at(position))?;
    u8::try_from(value).map_err(|_| FormatErrorKind::ChannelValueOutOfRange.at(position))
}

fn expect_separator(cursor: &mut Cursor<'_>) -> Result<(), LocatedError> {
    if cursor.eat(';') {
        Ok(())
    } else {
        Err(FormatErrorKind::MissingChannelSeparator.at(cursor.position()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use smallvec::smallvec;
    use test_case::test_case;

    use super::*;

    /// Parse the clause of `input`, which starts right after a `{!` at offset 0.
    fn parse(input: &str) -> Result<ColorCodes, LocatedError> {
        let mut cursor = Cursor::new(input);
        cursor.skip(2);
        let codes = parse_color_clause(&mut cursor)?;
        assert_eq!(cursor.rest(), "}");
        Ok(codes)
    }

    #[test]
    fn test_empty_clause_is_reset() {
        assert_eq!(parse("{!}").unwrap().as_slice(), &[SgrCode::Reset]);
    }

    #[test]
    fn test_named_color() {
        let expected: ColorCodes =
            smallvec![SgrCode::ForegroundRgb(RgbColor::from_u8(0, 0, 255))];
        assert_eq!(parse("{!BLUE}").unwrap(), expected);
        assert_eq!(parse("{!blue}").unwrap(), expected);
    }

    #[test]
    fn test_named_color_background_and_emphasis() {
        let expected: ColorCodes = smallvec![
            SgrCode::BackgroundRgb(RgbColor::from_u8(0xF0, 0xF8, 0xFF)),
            SgrCode::Bold,
            SgrCode::Underline,
        ];
        assert_eq!(parse("{!ALICE_BLUE;BU;BG}").unwrap(), expected);
    }

    #[test]
    fn test_terminal_color() {
        let expected: ColorCodes = smallvec![SgrCode::BackgroundTerminal(TerminalColor::BrightRed)];
        assert_eq!(parse("{!tBRIGHT_RED;BG}").unwrap(), expected);
    }

    #[test]
    fn test_rgb_channels() {
        let expected: ColorCodes =
            smallvec![SgrCode::ForegroundRgb(RgbColor::from_u8(255, 128, 0))];
        assert_eq!(parse("{!255;128;0}").unwrap(), expected);
    }

    #[test]
    fn test_emphasis_only() {
        let expected: ColorCodes =
            smallvec![SgrCode::Bold, SgrCode::Italic, SgrCode::Strikethrough];
        assert_eq!(parse("{!BIS}").unwrap(), expected);
    }

    #[test_case("{!256;0;0}",  FormatErrorKind::ChannelValueOutOfRange,   2)]
    #[test_case("{!0;256;0}",  FormatErrorKind::ChannelValueOutOfRange,   4)]
    #[test_case("{!12}",       FormatErrorKind::MissingChannelSeparator,  4)]
    #[test_case("{!1;2}",      FormatErrorKind::MissingChannelSeparator,  5)]
    #[test_case("{!NOPE}",     FormatErrorKind::InvalidColorName,         2)]
    #[test_case("{!BX}",       FormatErrorKind::InvalidEmphasisCharacter, 3)]
    #[test_case("{!RED;Q}",    FormatErrorKind::InvalidEmphasisCharacter, 6)]
    fn test_errors(input: &str, kind: FormatErrorKind, position: usize) {
        let mut cursor = Cursor::new(input);
        cursor.skip(2);
        assert_eq!(parse_color_clause(&mut cursor).unwrap_err(), kind.at(position));
    }
}
