// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Public entry points. Every one of them is a thin wrapper over
//! [`render_format_string`] that picks a sink and a set of [`FormatOptions`], and
//! reports a failure through [`FormatOptions::on_error`] before returning it.
//!
//! Most callers use the macros in [`crate::decl_macros`] instead, which build the
//! argument list from plain expressions.

use std::io::{stderr, stdout};

use runfmt_ansi_color::Stream;

use crate::{Arg, ArgList, DEBUG_FMT, FormatError, FormatErrorKind, FormatOptions, IoSink,
            Sink, render_format_string};

/// Render into a new [`String`] with default options.
///
/// # Errors
///
/// Returns the first error found in `format_string` or raised while rendering.
pub fn sprint(format_string: &str, args: &[Arg<'_>]) -> Result<String, FormatError> {
    sprint_with(format_string, args, &FormatOptions::default())
}

/// # Errors
///
/// Returns the first error found in `format_string` or raised while rendering.
pub fn sprint_with(
    format_string: &str,
    args: &[Arg<'_>],
    options: &FormatOptions,
) -> Result<String, FormatError> {
    let mut acc = String::with_capacity(format_string.len());
    format_to_with(&mut acc, format_string, args, options)?;
    Ok(acc)
}

/// Append to `sink` with default options. Output written before an error stays in the
/// sink.
///
/// # Errors
///
/// Returns the first error found in `format_string` or raised while rendering.
pub fn format_to(
    sink: &mut dyn Sink,
    format_string: &str,
    args: &[Arg<'_>],
) -> Result<(), FormatError> {
    format_to_with(sink, format_string, args, &FormatOptions::default())
}

/// # Errors
///
/// Returns the first error found in `format_string` or raised while rendering.
pub fn format_to_with(
    sink: &mut dyn Sink,
    format_string: &str,
    args: &[Arg<'_>],
    options: &FormatOptions,
) -> Result<(), FormatError> {
    let args = ArgList::new(args);
    render_format_string(sink, format_string, &args, options)
        .map_err(|error| report(error, options))
}

/// Write to stdout. Colors are emitted only if stdout wants them.
///
/// # Errors
///
/// Returns the first error found in `format_string`, or a failure to write to or flush
/// stdout.
pub fn print(format_string: &str, args: &[Arg<'_>]) -> Result<(), FormatError> {
    let options = FormatOptions::for_stream(Stream::Stdout);
    let mut sink = IoSink::new(stdout().lock());
    print_to(&mut sink, format_string, args, &options)
}

/// Write to stderr. Colors are emitted only if stderr wants them.
///
/// # Errors
///
/// Returns the first error found in `format_string`, or a failure to write to or flush
/// stderr.
pub fn eprint(format_string: &str, args: &[Arg<'_>]) -> Result<(), FormatError> {
    let options = FormatOptions::for_stream(Stream::Stderr);
    let mut sink = IoSink::new(stderr().lock());
    print_to(&mut sink, format_string, args, &options)
}

fn print_to(
    sink: &mut dyn Sink,
    format_string: &str,
    args: &[Arg<'_>],
    options: &FormatOptions,
) -> Result<(), FormatError> {
    format_to_with(sink, format_string, args, options)?;
    sink.flush().map_err(|it| {
        let error = FormatError::new(
            FormatErrorKind::from(it),
            format_string.len(),
            format_string,
        );
        report(error, options)
    })
}

/// Log the failure and hand it to the caller's error handler.
fn report(error: FormatError, options: &FormatOptions) -> FormatError {
    DEBUG_FMT.then(|| {
        // % is Display, ? is Debug.
        tracing::debug!(
            message = "Formatting failed",
            error = %error,
            position = %error.position,
            format_string = ?error.format_string,
        );
    });
    if let Some(on_error) = &options.on_error {
        on_error(&error);
    }
    error
}
