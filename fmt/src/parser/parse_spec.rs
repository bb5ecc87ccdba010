// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Parses `[[fill]align][sign][#][0][width]['.'precision][type]`. Only syntax is
//! checked here; whether the spec fits the argument is decided later, once the whole
//! placeholder has been read.

use crate::{Align, Count, FormatErrorKind, LocatedError, ParseState, RawSpec, Sign};

/// Largest literal width or precision, the range of a non-negative 32 bit signed int.
pub const MAX_COUNT: u64 = i32::MAX as u64;

/// Parse a spec starting at the cursor (just after the `:`). Stops before the `}` or
/// `!` that ends it, or before the first character that cannot continue a spec.
///
/// # Errors
///
/// Returns a [`LocatedError`] for an invalid fill, an oversized literal, a `.` with
/// nothing after it, or a bad dynamic reference.
pub fn parse_spec<'a>(
    state: &mut ParseState<'a>,
    placeholder: usize,
) -> Result<RawSpec<'a>, LocatedError> {
    let mut spec = RawSpec::new(placeholder);

    parse_fill_and_align(state, &mut spec)?;

    let position = state.cursor.position();
    if let Some(sign) = state.cursor.peek().and_then(Sign::from_char) {
        state.cursor.bump();
        spec.sign = sign;
        spec.positions.sign = position;
    }

    let position = state.cursor.position();
    if state.cursor.eat('#') {
        spec.alternate = true;
        spec.positions.alternate = position;
    }

    let position = state.cursor.position();
    if state.cursor.eat('0') {
        spec.zero = true;
        spec.positions.zero = position;
    }

    let position = state.cursor.position();
    if let Some(width) = parse_count(state, FormatErrorKind::WidthTooLarge)? {
        spec.width = Some(width);
        spec.positions.width = position;
    }

    let position = state.cursor.position();
    if state.cursor.eat('.') {
        spec.positions.precision = position;
        match parse_count(state, FormatErrorKind::PrecisionTooLarge)? {
            Some(precision) => spec.precision = Some(precision),
            None => {
                return Err(FormatErrorKind::MissingPrecision.at(state.cursor.position()));
            }
        }
    }

    let position = state.cursor.position();
    match state.cursor.peek() {
        None | Some('}' | '!') => {}
        Some(ty) => {
            state.cursor.bump();
            spec.ty = Some(ty);
            spec.positions.ty = position;
        }
    }

    Ok(spec)
}

/// A fill is only recognized when an alignment character follows it.
fn parse_fill_and_align(
    state: &mut ParseState<'_>,
    spec: &mut RawSpec<'_>,
) -> Result<(), LocatedError> {
    let position = state.cursor.position();
    let Some(first) = state.cursor.peek() else {
        return Ok(());
    };

    let align_after_first = state.cursor.peek_second().and_then(Align::from_char);
    match align_after_first {
        Some(align) if first != '}' && first != '!' => {
            if first == '{' {
                return Err(FormatErrorKind::InvalidFillCharacter.at(position));
            }
            state.cursor.bump();
            spec.fill = first;
            spec.positions.align = state.cursor.position();
            state.cursor.bump();
            spec.align = align;
        }
        _ => {
            if let Some(align) = Align::from_char(first) {
                state.cursor.bump();
                spec.align = align;
                spec.positions.align = position;
            }
        }
    }
    Ok(())
}

/// A decimal literal, or `{` [argref] `}`. Returns `None` if neither is at the cursor.
fn parse_count<'a>(
    state: &mut ParseState<'a>,
    too_large: FormatErrorKind,
) -> Result<Option<Count<'a>>, LocatedError> {
    let position = state.cursor.position();

    if let Some(value) = state.cursor.number() {
        return match u32::try_from(value) {
            Ok(value) if u64::from(value) <= MAX_COUNT => Ok(Some(Count::Literal(value))),
            _ => Err(too_large.at(position)),
        };
    }

    if state.cursor.eat('{') {
        let (arg, _) = state.parse_arg_ref()?;
        if !state.cursor.eat('}') {
            return Err(FormatErrorKind::MissingClosingBrace.at(state.cursor.position()));
        }
        return Ok(Some(Count::Arg(arg)));
    }

    Ok(None)
}
