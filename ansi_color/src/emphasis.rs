// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::SgrCode;

/// Text emphasis selected by a single upper case letter inside a color clause, eg:
/// `{!BU}` is bold + underline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Emphasis {
    Bold,
    Italic,
    Underline,
    Strikethrough,
}

impl Emphasis {
    /// The letters are case-sensitive: `b` is not bold.
    #[rustfmt::skip]
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'B' => Some(Emphasis::Bold),
            'I' => Some(Emphasis::Italic),
            'U' => Some(Emphasis::Underline),
            'S' => Some(Emphasis::Strikethrough),
            _   => None,
        }
    }

    #[rustfmt::skip]
    #[must_use]
    pub const fn sgr_code(self) -> SgrCode {
        match self {
            Emphasis::Bold          => SgrCode::Bold,
            Emphasis::Italic        => SgrCode::Italic,
            Emphasis::Underline     => SgrCode::Underline,
            Emphasis::Strikethrough => SgrCode::Strikethrough,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case('B', Some(Emphasis::Bold))]
    #[test_case('I', Some(Emphasis::Italic))]
    #[test_case('U', Some(Emphasis::Underline))]
    #[test_case('S', Some(Emphasis::Strikethrough))]
    #[test_case('b', None)]
    #[test_case('X', None)]
    fn test_from_char(ch: char, expected: Option<Emphasis>) {
        assert_eq!(Emphasis::from_char(ch), expected);
    }
}
