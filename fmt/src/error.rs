// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Every failure of a formatting call is a [`FormatError`]: a [`FormatErrorKind`] (which
//! carries the human readable message) plus the byte offset into the format string
//! where the problem was detected.
//!
//! [`FormatError`] is a [`miette::Diagnostic`] that owns a copy of the format string and
//! labels the offending byte, so any miette report handler prints the familiar caret
//! underline:
//!
//! ```text
//!   × "}" expected
//!    ╭────
//!  1 │ {0:+
//!    ·     ▲
//!    ·     ╰── here
//!    ╰────
//! ```
//!
//! For more information on error types, see:
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

use std::fmt::{Display, Formatter};

use miette::SourceSpan;

/// Which way argument indexing was being switched when
/// [`FormatErrorKind::MixedIndexingMode`] was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexingMode {
    Manual,
    Automatic,
}

impl Display for IndexingMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            IndexingMode::Manual => f.write_str("manual"),
            IndexingMode::Automatic => f.write_str("automatic"),
        }
    }
}

/// The error taxonomy. The `#[error]` text of each variant is the exact message that
/// [`FormatError::message`] reports.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatErrorKind {
    // Placeholder syntax.
    #[error("\"}}\" expected")]
    MissingClosingBrace,

    #[error(
        "Unmatched \"}}\" in format string - if you want to print it use \"}}}}\" to escape"
    )]
    UnmatchedClosingBrace,

    #[error("Expected \":\" or \"}}\"")]
    UnexpectedCharacter,

    #[error("Missing precision specifier")]
    MissingPrecision,

    // Argument references.
    #[error("Cannot switch from {from} to {to} argument indexing")]
    MixedIndexingMode { from: IndexingMode, to: IndexingMode },

    #[error("Argument index out of range")]
    ArgumentIndexOutOfRange,

    #[error("No argument named \"{name}\"")]
    ArgumentNameNotFound { name: String },

    // Fill, width and precision.
    #[error("Invalid fill character \"{{\"")]
    InvalidFillCharacter,

    #[error("Width is too large")]
    WidthTooLarge,

    #[error("Precision is too large")]
    PrecisionTooLarge,

    #[error("Negative width")]
    NegativeWidth,

    #[error("Negative precision")]
    NegativePrecision,

    #[error("Width was not an integer")]
    WidthNotInteger,

    #[error("Precision was not an integer")]
    PrecisionNotInteger,

    #[error("Precision is not allowed for integer types")]
    PrecisionNotAllowedForIntegerType,

    #[error("Precision is not allowed for pointer type")]
    PrecisionNotAllowedForPointerType,

    // Type specifiers.
    #[error("Invalid type specifier for an integer")]
    InvalidTypeSpecifierForInteger,

    #[error("Invalid type specifier for a float")]
    InvalidTypeSpecifierForFloat,

    #[error("Invalid type specifier for a string")]
    InvalidTypeSpecifierForString,

    #[error("Invalid type specifier for a pointer")]
    InvalidTypeSpecifierForPointer,

    #[error("Invalid type specifier for a code point")]
    InvalidTypeSpecifierForCodePoint,

    #[error("Invalid format specifier for a code point")]
    InvalidFormatSpecifierForCodePoint,

    #[error("Integer is not a valid code point")]
    InvalidCodePoint,

    // Sign and numeric flags.
    #[error("Sign is not allowed for code points")]
    SignNotAllowedForCodePoint,

    #[error("Sign is not allowed for non-arithmetic types")]
    SignNotAllowedForNonArithmetic,

    #[error("Format specifier requires an arithmetic argument")]
    RequiresArithmeticArgument,

    #[error("Format specifier requires a signed integer argument")]
    RequiresSignedIntegerArgument,

    // Color clauses.
    #[error(
        "Invalid emphasis character - valid ones are: B (bold), I (italic), U (underline) \
         and S (strikethrough)"
    )]
    InvalidEmphasisCharacter,

    #[error("Invalid color name")]
    InvalidColorName,

    #[error("Channel value too big - it must be in the range [0-255]")]
    ChannelValueOutOfRange,

    #[error("\";\" expected followed by the next channel value")]
    MissingChannelSeparator,

    // Rendering.
    #[error("Maximum nesting depth of {max_depth} exceeded")]
    RecursionLimitExceeded { max_depth: u32 },

    #[error("Failed to write the formatted output: {reason}")]
    WriteFailed { reason: String },

    #[error("{message}")]
    Custom { message: String },
}

/// An error kind that already knows where it happened, but not yet in which format
/// string. Parsers and validators produce these; the formatting call attaches the
/// format string with [`LocatedError::into_format_error`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedError {
    pub kind: FormatErrorKind,
    pub position: usize,
}

impl FormatErrorKind {
    #[must_use]
    pub fn at(self, position: usize) -> LocatedError { LocatedError { kind: self, position } }
}

impl LocatedError {
    #[must_use]
    pub fn into_format_error(self, format_string: &str) -> FormatError {
        FormatError::new(self.kind, self.position, format_string)
    }
}

/// A failed formatting call. See the [module docs](self) for details.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
#[error("{kind}")]
#[diagnostic(code(runfmt::format))]
pub struct FormatError {
    pub kind: FormatErrorKind,
    /// Byte offset into [`Self::format_string`].
    pub position: usize,
    #[source_code]
    pub format_string: String,
    #[label("here")]
    pub span: SourceSpan,
}

impl FormatError {
    #[must_use]
    pub fn new(kind: FormatErrorKind, position: usize, format_string: &str) -> Self {
        let position = position.min(format_string.len());
        let span_len = format_string
            .get(position..)
            .and_then(|rest| rest.chars().next())
            .map_or(0, char::len_utf8);
        Self {
            kind,
            position,
            format_string: format_string.to_owned(),
            span: (position, span_len).into(),
        }
    }

    /// The human readable message, eg: `"}" expected`.
    #[must_use]
    pub fn message(&self) -> String { self.kind.to_string() }
}

/// Failure reported by a [`crate::Sink`].
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum SinkError {
    #[error("I/O error: {0}")]
    #[diagnostic(code(runfmt::sink::io))]
    Io(#[from] std::io::Error),

    #[error("Bytes are not valid UTF-8: {0}")]
    #[diagnostic(code(runfmt::sink::utf8))]
    InvalidUtf8(#[from] std::str::Utf8Error),
}

impl From<SinkError> for FormatErrorKind {
    fn from(error: SinkError) -> Self {
        FormatErrorKind::WriteFailed {
            reason: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case(FormatErrorKind::MissingClosingBrace, "\"}\" expected")]
    #[test_case(FormatErrorKind::InvalidFillCharacter, "Invalid fill character \"{\"")]
    #[test_case(
        FormatErrorKind::UnmatchedClosingBrace,
        "Unmatched \"}\" in format string - if you want to print it use \"}}\" to escape"
    )]
    #[test_case(
        FormatErrorKind::MixedIndexingMode {
            from: IndexingMode::Automatic,
            to: IndexingMode::Manual,
        },
        "Cannot switch from automatic to manual argument indexing"
    )]
    #[test_case(
        FormatErrorKind::ArgumentNameNotFound { name: "foo".into() },
        "No argument named \"foo\""
    )]
    fn test_messages(kind: FormatErrorKind, expected: &str) {
        assert_eq!(kind.to_string(), expected);
    }

    #[test]
    fn test_span_covers_one_code_point() {
        let error = FormatError::new(FormatErrorKind::InvalidFillCharacter, 3, "{:é>5}");
        assert_eq!(error.span, SourceSpan::from((3, 2)));
        assert_eq!(error.message(), "Invalid fill character \"{\"");
    }

    #[test]
    fn test_span_at_end_of_input_is_empty() {
        let error = FormatError::new(FormatErrorKind::MissingClosingBrace, 4, "{0:+");
        assert_eq!(error.position, 4);
        assert_eq!(error.span, SourceSpan::from((4, 0)));
    }

    #[test]
    fn test_sink_error_converts_to_kind() {
        let io = std::io::Error::other("disk full");
        let kind = FormatErrorKind::from(SinkError::from(io));
        assert_eq!(
            kind,
            FormatErrorKind::WriteFailed {
                reason: "I/O error: disk full".into()
            }
        );
    }
}
