// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Per-call configuration. There is no global state in this crate: every knob that
//! changes how a call behaves lives in a [`FormatOptions`] value that the caller passes
//! in (or gets by default).

use std::{fmt::{Debug, Formatter},
          sync::Arc};

use runfmt_ansi_color::{Stream, examine_env_vars_to_determine_color_support};

use crate::FormatError;

/// Callback invoked once with the error before a failed formatting call returns. This
/// is the hook for debug builds that want to trap, or for applications that want to
/// route formatting failures into their own telemetry.
pub type ErrorHandler = Arc<dyn Fn(&FormatError) + Send + Sync>;

/// Whether `{!...}` color clauses emit escape sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnsiCodes {
    #[default]
    Always,
    Never,
    /// Ask the environment (`NO_COLOR`, `TERM`, `COLORTERM`, CI, TTY) whether `Stream`
    /// wants color. Evaluated once per formatting call.
    Detect(Stream),
}

impl AnsiCodes {
    #[must_use]
    pub fn is_enabled(self) -> bool {
        match self {
            AnsiCodes::Always => true,
            AnsiCodes::Never => false,
            AnsiCodes::Detect(stream) => {
                examine_env_vars_to_determine_color_support(stream).is_enabled()
            }
        }
    }
}

pub mod defaults {
    pub const THOUSANDS_SEPARATOR: char = ',';
    pub const MAX_DEPTH: u32 = 64;
    pub const INDENT_SIZE: u32 = 4;
}

#[derive(Clone)]
pub struct FormatOptions {
    pub ansi: AnsiCodes,
    /// Inserted every 3 digits by the `n` integer type.
    pub thousands_separator: char,
    /// Maximum nesting of container values (struct inside list inside dict ...).
    pub max_depth: u32,
    /// Spaces per indent level when containers are pretty printed.
    pub indent_size: u32,
    pub on_error: Option<ErrorHandler>,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            ansi: AnsiCodes::default(),
            thousands_separator: defaults::THOUSANDS_SEPARATOR,
            max_depth: defaults::MAX_DEPTH,
            indent_size: defaults::INDENT_SIZE,
            on_error: None,
        }
    }
}

impl Debug for FormatOptions {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormatOptions")
            .field("ansi", &self.ansi)
            .field("thousands_separator", &self.thousands_separator)
            .field("max_depth", &self.max_depth)
            .field("indent_size", &self.indent_size)
            .field("on_error", &self.on_error.as_ref().map(|_| "Fn(&FormatError)"))
            .finish()
    }
}

impl FormatOptions {
    /// Options for output that goes to a terminal stream: colors only if the stream
    /// wants them.
    #[must_use]
    pub fn for_stream(stream: Stream) -> Self {
        Self {
            ansi: AnsiCodes::Detect(stream),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_ansi(mut self, ansi: AnsiCodes) -> Self {
        self.ansi = ansi;
        self
    }

    #[must_use]
    pub fn with_thousands_separator(mut self, separator: char) -> Self {
        self.thousands_separator = separator;
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn with_indent_size(mut self, indent_size: u32) -> Self {
        self.indent_size = indent_size;
        self
    }

    #[must_use]
    pub fn with_error_handler(
        mut self,
        handler: impl Fn(&FormatError) + Send + Sync + 'static,
    ) -> Self {
        self.on_error = Some(Arc::new(handler));
        self
    }
}
