// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Macros that turn a list of plain expressions into the `&[Arg]` the functions in
//! [`crate::api`] take. Each expression is borrowed and converted with
//! [`crate::ToValue`]; `name = expr` makes a named argument.
//!
//! The argument list borrows temporaries, so use these macros inline (as the format
//! string's call) rather than storing the output of [`args!`](crate::args) in a
//! variable when any argument is a temporary.

/// Build a `[Arg; N]` array.
///
/// ```rust
/// use runfmt::{args, sprint};
///
/// let width = 6;
/// let out = sprint("{0:>{width}}|{name}", &args!(1.5, width = width, name = "ada"));
/// assert_eq!(out.unwrap(), "   1.5|ada");
/// ```
///
/// Anything else is rejected with a readable message:
///
/// ```rust,compile_fail
/// use runfmt::args;
///
/// let _ = args!(1; 2);
/// ```
#[macro_export]
macro_rules! args {
    (@munch [$($acc:tt)*]) => {
        [$($acc)*]
    };
    (@munch [$($acc:tt)*] $name:ident = $value:expr $(, $($rest:tt)*)?) => {
        $crate::args!(
            @munch
            [$($acc)* $crate::Arg::named(
                stringify!($name),
                $crate::ToValue::to_value(&$value),
            ),]
            $($($rest)*)?
        )
    };
    (@munch [$($acc:tt)*] $value:expr $(, $($rest:tt)*)?) => {
        $crate::args!(
            @munch
            [$($acc)* $crate::Arg::positional($crate::ToValue::to_value(&$value)),]
            $($($rest)*)?
        )
    };
    (@munch [$($acc:tt)*] $($unexpected:tt)+) => {
        compile_error!("args! expects comma separated `expr` or `name = expr` items")
    };
    ($($input:tt)*) => {
        $crate::args!(@munch [] $($input)*)
    };
}

/// Render into a new `String`. Returns `Result<String, FormatError>`.
///
/// ```rust
/// use runfmt::sprint;
///
/// assert_eq!(sprint!("{:>6.2f}", 5.4321).unwrap(), "  5.43");
/// assert_eq!(sprint!("{:d}", "text").unwrap_err().message(),
///            "Invalid type specifier for a string");
/// ```
#[macro_export]
macro_rules! sprint {
    ($format_string:expr $(, $($args:tt)*)?) => {
        $crate::sprint($format_string, &$crate::args!($($($args)*)?))
    };
}

/// Append to a [`Sink`](crate::Sink), eg: a `String`. Returns
/// `Result<(), FormatError>`.
///
/// ```rust
/// use runfmt::format_to;
///
/// let mut acc = String::from("id=");
/// format_to!(&mut acc, "{:08x}", 48879_u32).unwrap();
/// assert_eq!(acc, "id=0000beef");
/// ```
#[macro_export]
macro_rules! format_to {
    ($sink:expr, $format_string:expr $(, $($args:tt)*)?) => {
        $crate::format_to($sink, $format_string, &$crate::args!($($($args)*)?))
    };
}

/// Print to stdout. Returns `Result<(), FormatError>`.
#[macro_export]
macro_rules! fmt_print {
    ($format_string:expr $(, $($args:tt)*)?) => {
        $crate::print($format_string, &$crate::args!($($($args)*)?))
    };
}

/// Print to stderr. Returns `Result<(), FormatError>`.
#[macro_export]
macro_rules! fmt_eprint {
    ($format_string:expr $(, $($args:tt)*)?) => {
        $crate::eprint($format_string, &$crate::args!($($($args)*)?))
    };
}
