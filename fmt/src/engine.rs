// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The main loop of a formatting call.
//!
//! ```text
//! format string ──► literal run ─────────────────────────────► sink
//!                   "{{" / "}}" ─► "{" / "}" ────────────────► sink
//!                   "{" ─► parse_placeholder()
//!                            ├─ Color  ─► SGR codes ─────────► sink
//!                            └─ Value  ─► lookup_arg()
//!                                         resolve_spec()
//!                                         render_value() ────► sink
//! ```
//!
//! Literal text is written as soon as it is scanned, so output produced before an error
//! stays in the sink. Each placeholder is parsed completely before its argument is
//! looked up or its spec validated.

use runfmt_ansi_color::SgrCode;

use crate::{ArgList, FormatContext, FormatError, FormatErrorKind, FormatOptions,
            ParseState, Placeholder, Sink, classify, lookup_arg, parse_placeholder,
            resolve_spec};

/// Render `format_string` with `args` into `sink`.
///
/// # Errors
///
/// Returns the first syntax, argument, spec or sink error, located in `format_string`.
pub fn render_format_string(
    sink: &mut dyn Sink,
    format_string: &str,
    args: &ArgList<'_>,
    options: &FormatOptions,
) -> Result<(), FormatError> {
    let mut ctx = FormatContext::new(sink, args, format_string, options);
    let mut state = ParseState::new(format_string);

    loop {
        let rest = state.cursor.rest();
        let literal_len = rest.find(['{', '}']).unwrap_or(rest.len());
        ctx.write_str(&rest[..literal_len])?;
        state.cursor.skip(literal_len);

        let position = state.cursor.position();
        match (state.cursor.peek(), state.cursor.peek_second()) {
            (None, _) => return Ok(()),
            (Some('{'), Some('{')) => {
                ctx.write_char('{')?;
                state.cursor.skip(2);
            }
            (Some('}'), Some('}')) => {
                ctx.write_char('}')?;
                state.cursor.skip(2);
            }
            (Some('}'), _) => {
                return Err(ctx.locate(FormatErrorKind::UnmatchedClosingBrace.at(position)));
            }
            _ => {
                state.cursor.skip(1);
                let placeholder =
                    parse_placeholder(&mut state).map_err(|it| ctx.locate(it))?;
                render_placeholder(&mut ctx, args, placeholder, position)?;
            }
        }
    }
}

fn render_placeholder(
    ctx: &mut FormatContext<'_, '_>,
    args: &ArgList<'_>,
    placeholder: Placeholder<'_>,
    position: usize,
) -> Result<(), FormatError> {
    match placeholder {
        Placeholder::Color { codes } => ctx.write_sgr(&codes),
        Placeholder::Value {
            arg,
            arg_position,
            spec,
            color,
        } => {
            let value = lookup_arg(args, arg, arg_position).map_err(|it| ctx.locate(it))?;
            let spec = resolve_spec(&spec, args).map_err(|it| ctx.locate(it))?;
            ctx.enter_placeholder(Some(spec), position);

            match color {
                Some(codes) => {
                    // Nothing is written for a placeholder whose spec does not fit.
                    classify(&spec, &value).map_err(|it| ctx.locate(it))?;
                    ctx.write_sgr(&codes)?;
                    let rendered = ctx.write_value(value);
                    let reset = ctx.write_sgr(&[SgrCode::Reset]);
                    rendered.and(reset)
                }
                None => ctx.write_value(value),
            }
        }
    }
}
