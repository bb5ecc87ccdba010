// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Align, FloatValue, FormatContext, FormatError, FormatErrorKind, FormatSpec,
            Presentation, Value, classify, format_digits, render_code_point,
            render_float, render_integer, render_quoted, render_text, write_padded};

/// Render a built-in value under `spec`. [`Value::Custom`] is dispatched by
/// [`FormatContext::write_value_with`], which also guards the nesting depth.
///
/// # Errors
///
/// Returns the first rule `spec` breaks for `value`, or a sink failure.
#[rustfmt::skip]
pub fn render_value(
    ctx: &mut FormatContext<'_, '_>,
    spec: &FormatSpec,
    value: Value<'_>,
) -> Result<(), FormatError> {
    let presentation = classify(spec, &value).map_err(|it| ctx.locate(it))?;

    match (presentation, value) {
        (Presentation::Integer, Value::Int(it))       => render_integer(ctx, spec, it.unsigned_abs(), it < 0),
        (Presentation::Integer, Value::UInt(it))      => render_integer(ctx, spec, it, false),
        (Presentation::Integer, Value::Bool(it))      => render_integer(ctx, spec, u64::from(it), false),
        (Presentation::Integer, Value::CodePoint(it)) => render_integer(ctx, spec, u64::from(it), false),

        (Presentation::CodePoint, Value::CodePoint(it)) => render_code_point(ctx, spec, it),
        (Presentation::CodePoint, Value::Int(it))       => render_integer_as_char(ctx, spec, i128::from(it)),
        (Presentation::CodePoint, Value::UInt(it))      => render_integer_as_char(ctx, spec, i128::from(it)),

        (Presentation::Float, Value::F32(it)) => render_float(ctx, spec, FloatValue::F32(it)),
        (Presentation::Float, Value::F64(it)) => render_float(ctx, spec, FloatValue::F64(it)),

        (Presentation::Text, Value::Str(it))    => render_text(ctx, spec, it),
        (Presentation::Text, Value::Bool(it))   => render_text(ctx, spec, if it { "true" } else { "false" }),
        (Presentation::Quoted, Value::Str(it))  => render_quoted(ctx, spec, it),

        (Presentation::Pointer, Value::Ptr(it)) => render_pointer(ctx, spec, it),
        (Presentation::Pointer, Value::Str(it)) => render_pointer(ctx, spec, it.as_ptr() as usize),

        (Presentation::Custom, Value::Custom(it)) => ctx.write_custom(it, Some(*spec)),

        _ => Err(ctx.error(FormatErrorKind::Custom {
            message: format!("{value:?} cannot be rendered as {presentation:?}"),
        })),
    }
}

fn render_integer_as_char(
    ctx: &mut FormatContext<'_, '_>,
    spec: &FormatSpec,
    value: i128,
) -> Result<(), FormatError> {
    let ch = u32::try_from(value).ok().and_then(char::from_u32).ok_or_else(|| {
        ctx.locate(FormatErrorKind::InvalidCodePoint.at(spec.positions.ty))
    })?;
    render_code_point(ctx, spec, ch)
}

/// `0x` followed by lowercase hex digits.
fn render_pointer(
    ctx: &mut FormatContext<'_, '_>,
    spec: &FormatSpec,
    address: usize,
) -> Result<(), FormatError> {
    let digits = format_digits(address as u64, 16, false);
    write_padded(ctx, spec, Align::Right, "0x", digits.as_str())
}
