// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Structured form of the text between `:` and `}` of a placeholder:
//!
//! ```text
//! [[fill]align][sign][#][0][width]['.'precision][type]
//! ```
//!
//! [`RawSpec`] is what the parser produces; its width and precision may still point
//! at other arguments. [`FormatSpec`] is what renderers consume; every field is
//! concrete.

use runfmt_ansi_color::SgrCode;
use smallvec::SmallVec;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    /// Use the default for the value kind.
    #[default]
    None,
    Left,
    Right,
    Center,
    /// `=`: padding goes between the sign / base prefix and the digits.
    Numeric,
}

impl Align {
    #[rustfmt::skip]
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '<' => Some(Align::Left),
            '>' => Some(Align::Right),
            '^' => Some(Align::Center),
            '=' => Some(Align::Numeric),
            _   => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sign {
    #[default]
    None,
    /// `-`: only negative numbers get a sign. Same output as [`Sign::None`].
    Minus,
    /// `+`: every number gets a sign.
    Plus,
    /// ` `: positive numbers get a leading space.
    Space,
}

impl Sign {
    #[rustfmt::skip]
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '-' => Some(Sign::Minus),
            '+' => Some(Sign::Plus),
            ' ' => Some(Sign::Space),
            _   => None,
        }
    }

    #[must_use]
    pub fn is_explicit(self) -> bool { self != Sign::None }
}

/// Reference to an argument, as written in the format string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgRef<'a> {
    /// Nothing written: the next automatic index is used.
    None,
    Index(u32),
    Name(&'a str),
}

/// A width or precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Count<'a> {
    Literal(u32),
    /// `{...}`: read from another argument. The reference is never [`ArgRef::None`],
    /// the parser has already assigned the automatic index.
    Arg(ArgRef<'a>),
}

/// Byte offsets of each part of a placeholder, used to point errors at the offending
/// character. Parts that were not written point at the opening `{`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpecPositions {
    pub placeholder: usize,
    pub align: usize,
    pub sign: usize,
    pub alternate: usize,
    pub zero: usize,
    pub width: usize,
    pub precision: usize,
    pub ty: usize,
}

impl SpecPositions {
    #[must_use]
    pub fn at(placeholder: usize) -> Self {
        Self {
            placeholder,
            align: placeholder,
            sign: placeholder,
            alternate: placeholder,
            zero: placeholder,
            width: placeholder,
            precision: placeholder,
            ty: placeholder,
        }
    }
}

/// Parsed but unresolved spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawSpec<'a> {
    pub fill: char,
    pub align: Align,
    pub sign: Sign,
    pub alternate: bool,
    pub zero: bool,
    pub width: Option<Count<'a>>,
    pub precision: Option<Count<'a>>,
    pub ty: Option<char>,
    pub positions: SpecPositions,
}

impl RawSpec<'_> {
    #[must_use]
    pub fn new(placeholder: usize) -> Self {
        Self {
            fill: ' ',
            align: Align::None,
            sign: Sign::None,
            alternate: false,
            zero: false,
            width: None,
            precision: None,
            ty: None,
            positions: SpecPositions::at(placeholder),
        }
    }
}

/// Fully resolved spec, handed to renderers and to [`crate::Format`] implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatSpec {
    pub fill: char,
    pub align: Align,
    pub sign: Sign,
    /// The `#` flag.
    pub alternate: bool,
    /// The `0` flag.
    pub zero: bool,
    pub width: u32,
    pub precision: Option<u32>,
    pub ty: Option<char>,
    /// Nesting level used by pretty printed containers.
    pub indent: u32,
    pub positions: SpecPositions,
}

impl Default for FormatSpec {
    fn default() -> Self {
        Self {
            fill: ' ',
            align: Align::None,
            sign: Sign::None,
            alternate: false,
            zero: false,
            width: 0,
            precision: None,
            ty: None,
            indent: 0,
            positions: SpecPositions::default(),
        }
    }
}

impl FormatSpec {
    /// The effective `(fill, align)` pair. The `0` flag without an explicit alignment
    /// means numeric alignment padded with zeros.
    #[must_use]
    pub fn effective_fill_align(&self, default: Align) -> (char, Align) {
        match self.align {
            Align::None if self.zero => ('0', Align::Numeric),
            Align::None => (self.fill, default),
            align => (self.fill, align),
        }
    }

    /// Same spec, one nesting level deeper.
    #[must_use]
    pub fn nested(mut self) -> Self {
        self.indent += 1;
        self
    }

    /// Default spec that only keeps the nesting level.
    #[must_use]
    pub fn safe(&self) -> Self {
        Self {
            indent: self.indent,
            positions: self.positions,
            ..Default::default()
        }
    }
}

/// Escape sequences selected by a `{!...}` clause, in emission order.
pub type ColorCodes = SmallVec<[SgrCode; 4]>;

/// One `{...}` run of the format string, after parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum Placeholder<'a> {
    /// `{!...}` with no argument.
    Color { codes: ColorCodes },
    Value {
        /// Never [`ArgRef::None`].
        arg: ArgRef<'a>,
        arg_position: usize,
        spec: RawSpec<'a>,
        color: Option<ColorCodes>,
    },
}
