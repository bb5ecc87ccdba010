// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # `runfmt_ansi_color`
//!
//! The color vocabulary understood by the `{!...}` clauses of the `runfmt` formatting
//! engine. This crate has no knowledge of format strings; it only knows how to:
//!
//! 1. Look up a color by name ([`NamedColor`], case-insensitive, eg: `BLUE`,
//!    `alice_blue`) or by one of the 16 classic terminal colors ([`TerminalColor`]).
//! 2. Map emphasis letters (`B`, `I`, `U`, `S`) to [`Emphasis`].
//! 3. Render any of the above as an SGR escape sequence ([`SgrCode`]).
//! 4. Heuristically decide whether the attached terminal wants color at all
//!    ([`examine_env_vars_to_determine_color_support`]).
//!
//! # Example
//!
//! ```rust
//! use runfmt_ansi_color::{NamedColor, SgrCode};
//! use std::str::FromStr;
//!
//! let blue = NamedColor::from_str("blue").unwrap();
//! let sgr = SgrCode::ForegroundRgb(blue.rgb());
//! assert_eq!(sgr.to_string(), "\x1b[38;2;000;000;255m");
//! ```
//!
//! More info:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#SGR_(Select_Graphic_Rendition)_parameters>
//! - <https://www.w3.org/TR/css-color-4/#named-colors>

// Enforce strict error handling in production library code only.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod ansi_escape_codes;
pub mod color;
pub mod detect_color_support;
pub mod emphasis;
pub mod named_color;
pub mod terminal_color;

// Re-export.
pub use ansi_escape_codes::*;
pub use color::*;
pub use detect_color_support::*;
pub use emphasis::*;
pub use named_color::*;
pub use terminal_color::*;
