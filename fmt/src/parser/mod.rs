// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Format string syntax. Nothing in this module looks at argument values, writes output,
//! or knows about rendering; it turns text into [`crate::Placeholder`]s and reports
//! syntax errors with their byte offset.
//!
//! ```text
//! parse_placeholder()
//!   ├─► ParseState::parse_arg_ref()     digits | identifier | (next automatic index)
//!   ├─► parse_spec()                    [[fill]align][sign][#][0][width][.precision][type]
//!   │     └─► ParseState::parse_arg_ref()   for {..} width and precision
//!   └─► parse_color_clause()            ! name | tNAME | r;g;b | BIUS  [;BG] [;BIUS]
//! ```

// Attach sources.
pub mod cursor;
pub mod parse_color_clause;
pub mod parse_placeholder;
pub mod parse_spec;
pub mod parse_state;

// Re-export.
pub use cursor::*;
pub use parse_color_clause::*;
pub use parse_placeholder::*;
pub use parse_spec::*;
pub use parse_state::*;
