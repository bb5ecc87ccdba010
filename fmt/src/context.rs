// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [`FormatContext`] is the live state of one formatting call as seen by renderers and
//! by [`Format`] implementations: where output goes, which arguments exist, which spec
//! is in effect, and how deep the current value is nested.
//!
//! Nested values never mutate their parent's context. They get a child context with
//! its own spec and `depth + 1` that borrows the same sink, so siblings always see the
//! parent's spec unchanged.

use runfmt_ansi_color::SgrCode;

use crate::{ArgList, DEBUG_FMT, Format, FormatError, FormatErrorKind, FormatOptions,
            FormatSpec, LocatedError, Sink, Value, forward_spec, render_value};

pub struct FormatContext<'s, 'a> {
    sink: &'s mut dyn Sink,
    args: &'s ArgList<'a>,
    format_string: &'s str,
    options: &'s FormatOptions,
    ansi_enabled: bool,
    spec: Option<FormatSpec>,
    /// Start of the placeholder being rendered.
    position: usize,
    depth: u32,
}

impl std::fmt::Debug for FormatContext<'_, '_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormatContext")
            .field("format_string", &self.format_string)
            .field("spec", &self.spec)
            .field("position", &self.position)
            .field("depth", &self.depth)
            .finish_non_exhaustive()
    }
}

impl<'s, 'a> FormatContext<'s, 'a> {
    /// Color support is decided here, once per call.
    pub fn new(
        sink: &'s mut dyn Sink,
        args: &'s ArgList<'a>,
        format_string: &'s str,
        options: &'s FormatOptions,
    ) -> Self {
        Self {
            sink,
            args,
            format_string,
            options,
            ansi_enabled: options.ansi.is_enabled(),
            spec: None,
            position: 0,
            depth: 0,
        }
    }

    /// The spec in effect. `None` renders every value with its defaults.
    #[must_use]
    pub fn spec(&self) -> Option<&FormatSpec> { self.spec.as_ref() }

    #[must_use]
    pub fn options(&self) -> &FormatOptions { self.options }

    #[must_use]
    pub fn args(&self) -> &ArgList<'a> { self.args }

    #[must_use]
    pub fn format_string(&self) -> &str { self.format_string }

    #[must_use]
    pub fn position(&self) -> usize { self.position }

    #[must_use]
    pub fn depth(&self) -> u32 { self.depth }

    #[must_use]
    pub fn ansi_enabled(&self) -> bool { self.ansi_enabled }

    /// Point the context at the next top level placeholder.
    pub(crate) fn enter_placeholder(&mut self, spec: Option<FormatSpec>, position: usize) {
        self.spec = spec;
        self.position = position;
    }

    /// # Errors
    ///
    /// Returns [`FormatErrorKind::WriteFailed`] if the sink fails.
    pub fn write_bytes(&mut self, data: &[u8]) -> Result<(), FormatError> {
        self.sink
            .write_bytes(data)
            .map_err(|it| self.error(FormatErrorKind::from(it)))
    }

    /// # Errors
    ///
    /// Returns [`FormatErrorKind::WriteFailed`] if the sink fails.
    pub fn write_str(&mut self, text: &str) -> Result<(), FormatError> {
        if text.is_empty() {
            return Ok(());
        }
        self.write_bytes(text.as_bytes())
    }

    /// # Errors
    ///
    /// Returns [`FormatErrorKind::WriteFailed`] if the sink fails.
    pub fn write_char(&mut self, ch: char) -> Result<(), FormatError> {
        let mut encoded = [0_u8; 4];
        self.write_str(ch.encode_utf8(&mut encoded))
    }

    /// Emit escape sequences, unless color output is turned off for this call.
    ///
    /// # Errors
    ///
    /// Returns [`FormatErrorKind::WriteFailed`] if the sink fails.
    pub fn write_sgr(&mut self, codes: &[SgrCode]) -> Result<(), FormatError> {
        if !self.ansi_enabled {
            return Ok(());
        }
        for code in codes {
            self.write_str(&code.to_small_str())?;
        }
        Ok(())
    }

    /// An error located at the current placeholder.
    #[must_use]
    pub fn error(&self, kind: FormatErrorKind) -> FormatError {
        FormatError::new(kind, self.position, self.format_string)
    }

    /// An error raised by a [`Format`] implementation.
    #[must_use]
    pub fn custom_error(&self, message: impl Into<String>) -> FormatError {
        self.error(FormatErrorKind::Custom {
            message: message.into(),
        })
    }

    #[must_use]
    pub fn locate(&self, error: LocatedError) -> FormatError {
        error.into_format_error(self.format_string)
    }

    /// Render `value` with the spec in effect. Errors if the spec does not fit the
    /// value, eg: `{:d}` given a string.
    ///
    /// # Errors
    ///
    /// Returns the first rule the spec breaks, or a sink failure.
    pub fn write_value(&mut self, value: Value<'_>) -> Result<(), FormatError> {
        self.write_value_with(value, self.spec)
    }

    /// Render `value` with `spec` (`None` for defaults).
    ///
    /// # Errors
    ///
    /// Returns the first rule `spec` breaks, or a sink failure.
    pub fn write_value_with(
        &mut self,
        value: Value<'_>,
        spec: Option<FormatSpec>,
    ) -> Result<(), FormatError> {
        match value {
            Value::Custom(custom) => self.write_custom(custom, spec),
            _ => {
                let spec = spec.unwrap_or_default();
                render_value(self, &spec, value)
            }
        }
    }

    /// Render `value` as an element of a container. The container's spec is passed down
    /// only if it suits the element; otherwise the element uses its defaults.
    ///
    /// # Errors
    ///
    /// Returns a sink failure, or any error raised by a nested [`Format`].
    pub fn write_child(&mut self, value: Value<'_>) -> Result<(), FormatError> {
        let spec = forward_spec(self.spec.as_ref(), &value);
        self.write_value_with(value, spec)
    }

    /// Run a [`Format`] implementation in a child context.
    ///
    /// # Errors
    ///
    /// [`FormatErrorKind::RecursionLimitExceeded`] if nesting is too deep, or whatever
    /// `custom` returns.
    pub fn write_custom(
        &mut self,
        custom: &dyn Format,
        spec: Option<FormatSpec>,
    ) -> Result<(), FormatError> {
        let mut child = self.child(spec)?;
        custom.format(&mut child)
    }

    /// A context for a nested value, sharing this one's sink and arguments.
    ///
    /// # Errors
    ///
    /// [`FormatErrorKind::RecursionLimitExceeded`] if the child would be deeper than
    /// [`FormatOptions::max_depth`].
    pub fn child(&mut self, spec: Option<FormatSpec>) -> Result<FormatContext<'_, 'a>, FormatError> {
        let max_depth = self.options.max_depth;
        if self.depth >= max_depth {
            DEBUG_FMT.then(|| {
                // % is Display, ? is Debug.
                tracing::debug!(
                    message = "Nesting depth guard tripped",
                    max_depth = %max_depth,
                    format_string = %self.format_string,
                );
            });
            return Err(self.error(FormatErrorKind::RecursionLimitExceeded { max_depth }));
        }

        let mut child = self.view(spec);
        child.depth += 1;
        Ok(child)
    }

    /// The same context at the same depth, seen through a different spec.
    pub(crate) fn view(&mut self, spec: Option<FormatSpec>) -> FormatContext<'_, 'a> {
        FormatContext {
            sink: &mut *self.sink,
            args: self.args,
            format_string: self.format_string,
            options: self.options,
            ansi_enabled: self.ansi_enabled,
            spec,
            position: self.position,
            depth: self.depth,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::AnsiCodes;

    struct Nested(u32);

    impl Format for Nested {
        fn format(&self, f: &mut FormatContext<'_, '_>) -> Result<(), FormatError> {
            if self.0 == 0 {
                return f.write_str("leaf");
            }
            let inner = Nested(self.0 - 1);
            let spec = f.spec().copied();
            f.write_custom(&inner, spec)
        }
    }

    #[test]
    fn test_depth_guard() {
        let options = FormatOptions::default().with_max_depth(3);
        let args = ArgList::new(&[]);
        let mut acc = String::new();

        let mut ctx = FormatContext::new(&mut acc, &args, "{}", &options);
        assert_eq!(ctx.write_custom(&Nested(2), None), Ok(()));

        let mut ctx = FormatContext::new(&mut acc, &args, "{}", &options);
        let error = ctx.write_custom(&Nested(3), None).unwrap_err();
        assert_eq!(error.kind, FormatErrorKind::RecursionLimitExceeded { max_depth: 3 });
        assert_eq!(acc, "leaf");
    }

    #[test]
    fn test_sgr_is_dropped_when_disabled() {
        let options = FormatOptions::default().with_ansi(AnsiCodes::Never);
        let args = ArgList::new(&[]);
        let mut acc = String::new();
        let mut ctx = FormatContext::new(&mut acc, &args, "", &options);
        ctx.write_sgr(&[SgrCode::Bold]).unwrap();
        ctx.write_str("x").unwrap();
        assert_eq!(acc, "x");
    }

    #[test]
    fn test_child_does_not_touch_parent_spec() {
        let options = FormatOptions::default();
        let args = ArgList::new(&[]);
        let mut acc = String::new();
        let mut ctx = FormatContext::new(&mut acc, &args, "", &options);
        let parent = FormatSpec {
            width: 5,
            ..Default::default()
        };
        ctx.enter_placeholder(Some(parent), 0);
        {
            let child = ctx.child(None).unwrap();
            assert_eq!(child.spec(), None);
            assert_eq!(child.depth(), 1);
        }
        assert_eq!(ctx.spec(), Some(&parent));
    }
}
