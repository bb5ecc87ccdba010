// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{env, io::IsTerminal};

/// The stream a color clause will end up on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSupport {
    Truecolor,
    Ansi256,
    NoColor,
}

impl ColorSupport {
    #[must_use]
    pub fn is_enabled(self) -> bool { self != ColorSupport::NoColor }
}

/// The environment variables that decide color support, read once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorEnv {
    pub no_color: Option<String>,
    pub term: Option<String>,
    pub colorterm: Option<String>,
    pub clicolor: Option<String>,
    pub ignore_is_terminal: Option<String>,
    pub is_ci: bool,
}

impl ColorEnv {
    #[must_use]
    pub fn from_process_env() -> Self {
        Self {
            no_color: env::var("NO_COLOR").ok(),
            term: env::var("TERM").ok(),
            colorterm: env::var("COLORTERM").ok(),
            clicolor: env::var("CLICOLOR").ok(),
            ignore_is_terminal: env::var("IGNORE_IS_TERMINAL").ok(),
            is_ci: is_ci::uncached(),
        }
    }
}

/// Determine whether color is supported heuristically, from the process environment
/// and whether `stream` is attached to a terminal.
///
/// Nothing is memoized: callers that format in a loop should call this once and keep
/// the result.
#[must_use]
pub fn examine_env_vars_to_determine_color_support(stream: Stream) -> ColorSupport {
    color_support_from(&ColorEnv::from_process_env(), is_a_tty(stream))
}

/// Rules, first match wins:
/// 1. `NO_COLOR` set to anything but `0`, `TERM=dumb`, or not a terminal (unless
///    `IGNORE_IS_TERMINAL` is set) turns color off.
/// 2. `COLORTERM=truecolor` or `24bit` is truecolor.
/// 3. A `TERM` ending in `256color` is 256 colors.
/// 4. Any `COLORTERM`, a color capable `TERM`, `CLICOLOR` other than `0`, or running
///    in CI is truecolor.
#[must_use]
pub fn color_support_from(vars: &ColorEnv, is_tty: bool) -> ColorSupport {
    let is_set = |it: &Option<String>| it.as_deref().is_some_and(|v| v != "0");
    let term = vars.term.as_deref().unwrap_or_default();

    if is_set(&vars.no_color)
        || term == "dumb"
        || !(is_tty || is_set(&vars.ignore_is_terminal))
    {
        return ColorSupport::NoColor;
    }

    if matches!(vars.colorterm.as_deref(), Some("truecolor" | "24bit")) {
        return ColorSupport::Truecolor;
    }

    if check_256_color(term) {
        return ColorSupport::Ansi256;
    }

    if vars.colorterm.is_some()
        || check_ansi_color(term)
        || is_set(&vars.clicolor)
        || vars.is_ci
    {
        return ColorSupport::Truecolor;
    }

    ColorSupport::NoColor
}

#[must_use]
pub fn is_a_tty(stream: Stream) -> bool {
    match stream {
        Stream::Stdout => std::io::stdout().is_terminal(),
        Stream::Stderr => std::io::stderr().is_terminal(),
    }
}

fn check_256_color(term: &str) -> bool {
    term.ends_with("256") || term.ends_with("256color")
}

#[rustfmt::skip]
fn check_ansi_color(term: &str) -> bool {
    const PREFIXES: [&str; 5] = ["screen", "xterm", "vt100", "vt220", "rxvt"];
    const INFIXES: [&str; 4] = ["color", "ansi", "cygwin", "linux"];
    PREFIXES.iter().any(|it| term.starts_with(it))
        || INFIXES.iter().any(|it| term.contains(it))
}
