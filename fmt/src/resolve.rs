// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The semantic layer between parsing and rendering:
//!
//! 1. [`lookup_arg`] binds an [`ArgRef`] to a [`Value`].
//! 2. [`resolve_spec`] turns a [`RawSpec`] into a [`FormatSpec`] by reading dynamic width
//!    and precision arguments.
//! 3. [`classify`] checks a [`FormatSpec`] against the runtime kind of a value and picks
//!    the [`Presentation`] to render it with.
//!
//! Checks run in a fixed order (type, sign, alignment and flags, precision) and each
//! error points at the spec character that caused it.

use crate::{Align, ArgList, ArgRef, Count, FormatErrorKind, FormatSpec, LocatedError,
            RawSpec, Value, ValueKind, parse_spec::MAX_COUNT};

/// How a value will be rendered, after its spec has been checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    Integer,
    CodePoint,
    Float,
    Text,
    /// `q`: quoted with escapes.
    Quoted,
    Pointer,
    Custom,
}

/// Type characters that select an integer rendering.
pub const INTEGER_TYPES: &[char] = &['d', 'b', 'B', 'o', 'x', 'X', 'n'];
pub const FLOAT_TYPES: &[char] = &['f', 'F', 'g', 'G', 'e', 'E', '%'];

/// # Errors
///
/// [`FormatErrorKind::ArgumentIndexOutOfRange`] or
/// [`FormatErrorKind::ArgumentNameNotFound`], located at `position`.
pub fn lookup_arg<'a>(
    args: &ArgList<'a>,
    arg: ArgRef<'_>,
    position: usize,
) -> Result<Value<'a>, LocatedError> {
    let index = match arg {
        ArgRef::Index(index) => index as usize,
        ArgRef::Name(name) => args.index_of(name).ok_or_else(|| {
            FormatErrorKind::ArgumentNameNotFound { name: name.to_owned() }.at(position)
        })?,
        ArgRef::None => {
            return Err(FormatErrorKind::ArgumentIndexOutOfRange.at(position));
        }
    };
    args.get(index)
        .ok_or_else(|| FormatErrorKind::ArgumentIndexOutOfRange.at(position))
}

/// # Errors
///
/// Returns a [`LocatedError`] if a dynamic width or precision refers to a missing
/// argument, or to one that is not a non-negative integer that fits in 31 bits.
pub fn resolve_spec(raw: &RawSpec<'_>, args: &ArgList<'_>) -> Result<FormatSpec, LocatedError> {
    let positions = raw.positions;

    let width = match raw.width {
        None => 0,
        Some(count) => resolve_count(args, count, positions.width, CountErrors::WIDTH)?,
    };

    let precision = match raw.precision {
        None => None,
        Some(count) => Some(resolve_count(
            args,
            count,
            positions.precision,
            CountErrors::PRECISION,
        )?),
    };

    Ok(FormatSpec {
        fill: raw.fill,
        align: raw.align,
        sign: raw.sign,
        alternate: raw.alternate,
        zero: raw.zero,
        width,
        precision,
        ty: raw.ty,
        indent: 0,
        positions,
    })
}

struct CountErrors {
    not_integer: FormatErrorKind,
    negative: FormatErrorKind,
    too_large: FormatErrorKind,
}

impl CountErrors {
    const WIDTH: Self = Self {
        not_integer: FormatErrorKind::WidthNotInteger,
        negative: FormatErrorKind::NegativeWidth,
        too_large: FormatErrorKind::WidthTooLarge,
    };
    const PRECISION: Self = Self {
        not_integer: FormatErrorKind::PrecisionNotInteger,
        negative: FormatErrorKind::NegativePrecision,
        too_large: FormatErrorKind::PrecisionTooLarge,
    };
}

fn resolve_count(
    args: &ArgList<'_>,
    count: Count<'_>,
    position: usize,
    errors: CountErrors,
) -> Result<u32, LocatedError> {
    let arg = match count {
        Count::Literal(value) => return Ok(value),
        Count::Arg(arg) => arg,
    };
    let value = lookup_arg(args, arg, position)?;
    let Some(value) = value.as_integer() else {
        return Err(errors.not_integer.at(position));
    };
    if value < 0 {
        return Err(errors.negative.at(position));
    }
    if value > i128::from(MAX_COUNT) {
        return Err(errors.too_large.at(position));
    }
    u32::try_from(value).map_err(|_| errors.too_large.at(position))
}

/// Pick the presentation of `value` under `spec`, checking every flag.
///
/// # Errors
///
/// The first rule `spec` breaks for this kind of value, located at the offending spec
/// character.
pub fn classify(spec: &FormatSpec, value: &Value<'_>) -> Result<Presentation, LocatedError> {
    let positions = &spec.positions;
    let ty = spec.ty;
    let is_integer_type = |ty: Option<char>| ty.is_some_and(|it| INTEGER_TYPES.contains(&it));

    let presentation = match value.kind() {
        ValueKind::Custom => return Ok(Presentation::Custom),
        ValueKind::Integer => match ty {
            None => Presentation::Integer,
            Some('c') => Presentation::CodePoint,
            it if is_integer_type(it) => Presentation::Integer,
            _ => return Err(FormatErrorKind::InvalidTypeSpecifierForInteger.at(positions.ty)),
        },
        ValueKind::Bool => match ty {
            None | Some('s') => Presentation::Text,
            it if is_integer_type(it) => Presentation::Integer,
            _ => return Err(FormatErrorKind::InvalidTypeSpecifierForInteger.at(positions.ty)),
        },
        ValueKind::CodePoint => match ty {
            None | Some('c') => Presentation::CodePoint,
            it if is_integer_type(it) => Presentation::Integer,
            _ => {
                return Err(FormatErrorKind::InvalidTypeSpecifierForCodePoint.at(positions.ty));
            }
        },
        ValueKind::Float => match ty {
            None => Presentation::Float,
            Some(it) if FLOAT_TYPES.contains(&it) => Presentation::Float,
            _ => return Err(FormatErrorKind::InvalidTypeSpecifierForFloat.at(positions.ty)),
        },
        ValueKind::Str => match ty {
            None | Some('s') => Presentation::Text,
            Some('q') => Presentation::Quoted,
            Some('p') => Presentation::Pointer,
            _ => return Err(FormatErrorKind::InvalidTypeSpecifierForString.at(positions.ty)),
        },
        ValueKind::Pointer => match ty {
            None | Some('p') => Presentation::Pointer,
            _ => return Err(FormatErrorKind::InvalidTypeSpecifierForPointer.at(positions.ty)),
        },
    };

    check_flags(spec, value, presentation)?;
    Ok(presentation)
}

fn check_flags(
    spec: &FormatSpec,
    value: &Value<'_>,
    presentation: Presentation,
) -> Result<(), LocatedError> {
    let positions = &spec.positions;
    let numeric_align = spec.align == Align::Numeric;

    match presentation {
        Presentation::Integer => {
            let is_signed = matches!(value, Value::Int(_));
            if spec.sign.is_explicit() && !is_signed {
                return Err(FormatErrorKind::RequiresSignedIntegerArgument.at(positions.sign));
            }
            if spec.precision.is_some() {
                return Err(
                    FormatErrorKind::PrecisionNotAllowedForIntegerType.at(positions.precision)
                );
            }
        }
        Presentation::CodePoint => {
            if spec.sign.is_explicit() {
                return Err(FormatErrorKind::SignNotAllowedForCodePoint.at(positions.sign));
            }
            let offending = if numeric_align {
                Some(positions.align)
            } else if spec.alternate {
                Some(positions.alternate)
            } else if spec.zero {
                Some(positions.zero)
            } else if spec.precision.is_some() {
                Some(positions.precision)
            } else {
                None
            };
            if let Some(position) = offending {
                return Err(FormatErrorKind::InvalidFormatSpecifierForCodePoint.at(position));
            }
        }
        Presentation::Text | Presentation::Quoted | Presentation::Pointer => {
            if spec.sign.is_explicit() {
                return Err(FormatErrorKind::SignNotAllowedForNonArithmetic.at(positions.sign));
            }
            let offending = if numeric_align {
                Some(positions.align)
            } else if spec.alternate {
                Some(positions.alternate)
            } else if spec.zero {
                Some(positions.zero)
            } else {
                None
            };
            if let Some(position) = offending {
                return Err(FormatErrorKind::RequiresArithmeticArgument.at(position));
            }
            if presentation == Presentation::Pointer && spec.precision.is_some() {
                return Err(
                    FormatErrorKind::PrecisionNotAllowedForPointerType.at(positions.precision)
                );
            }
        }
        Presentation::Float | Presentation::Custom => {}
    }
    Ok(())
}

/// Type characters a container may pass down to a child of this kind. A spec whose
/// type is outside the set is replaced by a default one.
#[must_use]
pub fn forwardable_types(kind: ValueKind) -> &'static [char] {
    match kind {
        ValueKind::Integer | ValueKind::Bool | ValueKind::CodePoint => {
            &['d', 'x', 'X', 'o', 'b', 'B', 'c', 'n']
        }
        ValueKind::Float => FLOAT_TYPES,
        ValueKind::Str => &['s', 'q', 'p'],
        ValueKind::Pointer => &['p'],
        ValueKind::Custom => &[],
    }
}

/// The spec a container child renders with, given the container's own spec.
#[must_use]
pub fn forward_spec(parent: Option<&FormatSpec>, child: &Value<'_>) -> Option<FormatSpec> {
    let kind = child.kind();
    if kind == ValueKind::Custom {
        return Some(parent.copied().unwrap_or_default().nested());
    }
    let parent = parent?;
    let type_fits = parent.ty.is_none_or(|ty| forwardable_types(kind).contains(&ty));
    if type_fits && classify(parent, child).is_ok() {
        Some(*parent)
    } else {
        Some(parent.safe())
    }
}
