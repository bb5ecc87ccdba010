// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{FormatErrorKind, LocatedError, ParseState, Placeholder, RawSpec,
            parse_color_clause, parse_spec};

/// Parse one placeholder. The cursor must be just after its opening `{`, and is left
/// just after its closing `}`.
///
/// ```text
/// "{" [argref] [":" spec] ["!" color] "}"
/// "{" "!" color "}"
/// ```
///
/// # Errors
///
/// Returns the first syntax error, located in the format string.
pub fn parse_placeholder<'a>(
    state: &mut ParseState<'a>,
) -> Result<Placeholder<'a>, LocatedError> {
    let placeholder = state.cursor.position().saturating_sub(1);

    if state.cursor.eat('!') {
        let codes = parse_color_clause(&mut state.cursor)?;
        expect_closing_brace(state)?;
        return Ok(Placeholder::Color { codes });
    }

    let (arg, arg_position) = state.parse_arg_ref()?;

    let spec = match state.cursor.peek() {
        None => return Err(FormatErrorKind::MissingClosingBrace.at(state.cursor.position())),
        Some(':') => {
            state.cursor.bump();
            parse_spec(state, placeholder)?
        }
        Some('}' | '!') => RawSpec::new(placeholder),
        Some(_) => {
            return Err(FormatErrorKind::UnexpectedCharacter.at(state.cursor.position()));
        }
    };

    let color = if state.cursor.eat('!') {
        Some(parse_color_clause(&mut state.cursor)?)
    } else {
        None
    };

    expect_closing_brace(state)?;

    Ok(Placeholder::Value {
        arg,
        arg_position,
        spec,
        color,
    })
}

fn expect_closing_brace(state: &mut ParseState<'_>) -> Result<(), LocatedError> {
    if state.cursor.eat('}') {
        Ok(())
    } else {
        Err(FormatErrorKind::MissingClosingBrace.at(state.cursor.position()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use runfmt_ansi_color::SgrCode;
    use test_case::test_case;

    use super::*;
    use crate::{Align, ArgRef, Count, IndexingMode};

    fn parse(input: &str) -> Result<Placeholder<'_>, LocatedError> {
        let mut state = ParseState::new(input);
        state.cursor.skip(1);
        let placeholder = parse_placeholder(&mut state)?;
        assert!(state.cursor.is_at_end());
        Ok(placeholder)
    }

    #[test]
    fn test_bare_placeholder_takes_automatic_index() {
        let Placeholder::Value { arg, spec, color, .. } = parse("{}").unwrap() else {
            panic!("expected a value placeholder");
        };
        assert_eq!(arg, ArgRef::Index(0));
        assert_eq!(spec, RawSpec::new(0));
        assert_eq!(color, None);
    }

    #[test]
    fn test_named_with_spec_and_color() {
        let Placeholder::Value { arg, arg_position, spec, color } =
            parse("{total:>{w}!RED}").unwrap()
        else {
            panic!("expected a value placeholder");
        };
        assert_eq!(arg, ArgRef::Name("total"));
        assert_eq!(arg_position, 1);
        assert_eq!(spec.align, Align::Right);
        assert_eq!(spec.width, Some(Count::Arg(ArgRef::Name("w"))));
        assert_eq!(color.map(|it| it.len()), Some(1));
    }

    #[test]
    fn test_color_only() {
        let Placeholder::Color { codes } = parse("{!}").unwrap() else {
            panic!("expected a color placeholder");
        };
        assert_eq!(codes.as_slice(), &[SgrCode::Reset]);
    }

    #[test_case("{0:+",  FormatErrorKind::MissingClosingBrace, 4)]
    #[test_case("{0",    FormatErrorKind::MissingClosingBrace, 2)]
    #[test_case("{",     FormatErrorKind::MissingClosingBrace, 1)]
    #[test_case("{0x}",  FormatErrorKind::UnexpectedCharacter, 2)]
    #[test_case("{:dd}", FormatErrorKind::MissingClosingBrace, 3)]
    #[test_case("{!RED", FormatErrorKind::MissingClosingBrace, 5)]
    fn test_syntax_errors(input: &str, kind: FormatErrorKind, position: usize) {
        let mut state = ParseState::new(input);
        state.cursor.skip(1);
        assert_eq!(parse_placeholder(&mut state).unwrap_err(), kind.at(position));
    }

    #[test]
    fn test_dynamic_width_shares_automatic_counter() {
        let mut state = ParseState::new("{:{}}{}");
        state.cursor.skip(1);
        let Placeholder::Value { arg, spec, .. } = parse_placeholder(&mut state).unwrap()
        else {
            panic!("expected a value placeholder");
        };
        assert_eq!(arg, ArgRef::Index(0));
        assert_eq!(spec.width, Some(Count::Arg(ArgRef::Index(1))));

        state.cursor.skip(1);
        let Placeholder::Value { arg, .. } = parse_placeholder(&mut state).unwrap() else {
            panic!("expected a value placeholder");
        };
        assert_eq!(arg, ArgRef::Index(2));
    }

    #[test]
    fn test_dynamic_width_participates_in_exclusivity() {
        let mut state = ParseState::new("{0:{}}");
        state.cursor.skip(1);
        assert_eq!(
            parse_placeholder(&mut state).unwrap_err(),
            FormatErrorKind::MixedIndexingMode {
                from: IndexingMode::Manual,
                to: IndexingMode::Automatic,
            }
            .at(4)
        );
    }
}
