// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A read position inside the format string. Positions reported by the cursor are byte
//! offsets from the start of the whole format string, never from the remaining slice.
//! Multi character tokens (numbers, identifiers) are lexed with `nom`.

use nom::{IResult,
          Parser,
          branch::alt,
          bytes::complete::tag,
          character::complete::{alpha1, alphanumeric1, digit1},
          combinator::recognize,
          multi::many0_count,
          sequence::pair};

#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    input: &'a str,
    rest: &'a str,
}

impl<'a> Cursor<'a> {
    #[must_use]
    pub fn new(input: &'a str) -> Self { Self { input, rest: input } }

    #[must_use]
    pub fn position(&self) -> usize { self.input.len() - self.rest.len() }

    #[must_use]
    pub fn rest(&self) -> &'a str { self.rest }

    #[must_use]
    pub fn is_at_end(&self) -> bool { self.rest.is_empty() }

    #[must_use]
    pub fn peek(&self) -> Option<char> { self.rest.chars().next() }

    #[must_use]
    pub fn peek_second(&self) -> Option<char> { self.rest.chars().nth(1) }

    pub fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.rest = &self.rest[ch.len_utf8()..];
        Some(ch)
    }

    /// Consume `ch` if it is next.
    pub fn eat(&mut self, ch: char) -> bool {
        if self.peek() == Some(ch) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Advance by `len` bytes, which must end on a char boundary.
    pub fn skip(&mut self, len: usize) { self.rest = self.rest.get(len..).unwrap_or(""); }

    /// Consume a run of ASCII digits. The value saturates at [`u64::MAX`], callers only
    /// need to know that it is too large.
    pub fn number(&mut self) -> Option<u64> {
        let (rest, digits) = lex_digits(self.rest).ok()?;
        self.rest = rest;
        Some(digits.bytes().fold(0_u64, |acc, digit| {
            acc.saturating_mul(10).saturating_add(u64::from(digit - b'0'))
        }))
    }

    /// Consume an identifier: `[A-Za-z_][A-Za-z0-9_]*`.
    pub fn identifier(&mut self) -> Option<&'a str> {
        let (rest, identifier) = lex_identifier(self.rest).ok()?;
        self.rest = rest;
        Some(identifier)
    }
}

fn lex_digits(input: &str) -> IResult<&str, &str> { digit1.parse(input) }

#[rustfmt::skip]
fn lex_identifier(input: &str) -> IResult<&str, &str> {
    recognize(
        pair(
            /* first */ alt((alpha1, tag("_"))),
            /* rest */  many0_count(alt((alphanumeric1, tag("_")))),
        )
    ).parse(input)
}
