// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # `runfmt`
//!
//! A runtime text formatting engine. Format strings are ordinary runtime values (they
//! can come from a config file or a translation table), and use the Python / fmtlib
//! placeholder syntax:
//!
//! ```text
//! "{" [argref] [":" [[fill]align][sign][#][0][width][.precision][type]] ["!" color] "}"
//! ```
//!
//! | Part        | Example               | Meaning                                          |
//! |-------------|-----------------------|--------------------------------------------------|
//! | `argref`    | `{1}` `{name}`        | argument by index or name, else the next one     |
//! | fill/align  | `{:*^9}`              | `<` left, `>` right, `^` center, `=` numeric     |
//! | sign        | `{:+}`                | `+` always, `-` negatives only, space for blank  |
//! | `#`         | `{:#x}`               | base prefix, keep trailing zeros, pretty print   |
//! | width       | `{:8}` `{:{0}}`       | minimum width in code points, maybe dynamic      |
//! | precision   | `{:.3}` `{:.{prec}}`  | fraction digits, significant digits, max chars   |
//! | type        | `{:x}` `{:e}` `{:%}`  | `d b B o x X n c f F g G e E % s q p`            |
//! | color       | `{!BLUE;B}` `{!1;2;3}`| SGR escape sequences; `{!}` resets               |
//!
//! # Example
//!
//! ```rust
//! use runfmt::{sprint, FormatErrorKind};
//!
//! assert_eq!(sprint!("{0:=+8.2f}|{1:^7}|", -7.12345, "mid").unwrap(), "-   7.12|  mid  |");
//! assert_eq!(sprint!("{:#010b}", 5).unwrap(), "0b00000101");
//! assert_eq!(sprint!("{:n}", 1234567).unwrap(), "1,234,567");
//!
//! let error = sprint!("{0:+", 'x').unwrap_err();
//! assert_eq!(error.kind, FormatErrorKind::MissingClosingBrace);
//! assert_eq!(error.message(), "\"}\" expected");
//! assert_eq!(error.position, 4);
//! ```
//!
//! Errors are [`miette::Diagnostic`]s that point at the offending byte of the format
//! string, so any miette report handler can draw a caret under it.
//!
//! # Layout
//!
//! - [`parser`]: format string syntax to [`Placeholder`]s.
//! - [`resolve`]: placeholder specs to concrete [`FormatSpec`]s, validated against the
//!   argument they render.
//! - [`render`]: integers, floats, strings, code points and pointers into the sink.
//! - [`containers`]: struct, tuple, list and dict builders for [`Format`] impls.
//! - [`engine`]: the loop that ties them together; [`api`] and the macros wrap it.

// Enforce strict error handling in production library code only.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

/// Log failed formatting calls and depth guard trips with `tracing::debug!`.
pub const DEBUG_FMT: bool = true;

// Attach sources.
pub mod api;
pub mod containers;
pub mod context;
pub mod decl_macros;
pub mod engine;
pub mod error;
pub mod options;
pub mod parser;
pub mod render;
pub mod resolve;
pub mod sink;
pub mod spec;
pub mod value;

// Re-export.
pub use api::*;
pub use containers::*;
pub use context::*;
pub use engine::*;
pub use error::*;
pub use options::*;
pub use parser::*;
pub use render::*;
pub use resolve::*;
pub use sink::*;
pub use spec::*;
pub use value::*;

// Tests.
#[cfg(test)]
mod test_sprint;
