// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Align, FormatContext, FormatError, FormatSpec, write_padded};

/// The first `precision` code points of `text`, or all of it.
#[must_use]
pub fn truncate_code_points(text: &str, precision: Option<u32>) -> &str {
    let Some(precision) = precision else {
        return text;
    };
    match text.char_indices().nth(precision as usize) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// Strings, and bools rendered as words. Left aligned unless the spec says otherwise.
///
/// # Errors
///
/// Returns [`crate::FormatErrorKind::WriteFailed`] if the sink fails.
pub fn render_text(
    ctx: &mut FormatContext<'_, '_>,
    spec: &FormatSpec,
    text: &str,
) -> Result<(), FormatError> {
    let text = truncate_code_points(text, spec.precision);
    write_padded(ctx, spec, Align::Left, "", text)
}

/// `q`: the text in double quotes, with control characters, backslashes and double
/// quotes escaped. Precision truncates the text before quoting.
///
/// # Errors
///
/// Returns [`crate::FormatErrorKind::WriteFailed`] if the sink fails.
pub fn render_quoted(
    ctx: &mut FormatContext<'_, '_>,
    spec: &FormatSpec,
    text: &str,
) -> Result<(), FormatError> {
    let quoted = quote(truncate_code_points(text, spec.precision));
    write_padded(ctx, spec, Align::Left, "", &quoted)
}

#[must_use]
pub fn quote(text: &str) -> String {
    let mut acc = String::with_capacity(text.len() + 2);
    acc.push('"');
    for ch in text.chars() {
        if ch == '\'' {
            acc.push(ch);
        } else {
            acc.extend(ch.escape_debug());
        }
    }
    acc.push('"');
    acc
}

/// # Errors
///
/// Returns [`crate::FormatErrorKind::WriteFailed`] if the sink fails.
pub fn render_code_point(
    ctx: &mut FormatContext<'_, '_>,
    spec: &FormatSpec,
    ch: char,
) -> Result<(), FormatError> {
    let mut encoded = [0_u8; 4];
    let encoded = ch.encode_utf8(&mut encoded);
    write_padded(ctx, spec, Align::Left, "", encoded)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case("héllo", None,    "héllo")]
    #[test_case("héllo", Some(2), "hé")]
    #[test_case("héllo", Some(0), "")]
    #[test_case("hé",    Some(9), "hé")]
    fn test_truncate(text: &str, precision: Option<u32>, expected: &str) {
        assert_eq!(truncate_code_points(text, precision), expected);
    }

    #[test]
    fn test_quote() {
        assert_eq!(quote("it's \"x\"\n\t\\"), r#""it's \"x\"\n\t\\""#);
    }
}
