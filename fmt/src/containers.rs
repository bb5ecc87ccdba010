// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Builders that [`Format`] implementations use to print aggregates. They mirror the
//! shape of [`std::fmt::DebugStruct`] and friends:
//!
//! | Builder                          | Compact                | Empty     |
//! |----------------------------------|------------------------|-----------|
//! | [`FormatContext::fmt_struct`]    | `Name { a: 1, b: 2 }`  | `Name {}` |
//! | [`FormatContext::fmt_tuple`]     | `Name(1, 2)`           | `Name()`  |
//! | [`FormatContext::fmt_list`]      | `[1, 2]`               | `[]`      |
//! | [`FormatContext::fmt_dict`]      | `{ k: v }`             | `{}`      |
//!
//! Pretty mode (the `#` flag on the placeholder, or `pretty(true)`) puts every entry on
//! its own line, indented one level deeper than the container:
//!
//! ```text
//! Player {
//!     id: 7,
//!     pos: Vec2(
//!         1.0,
//!         2.0
//!     )
//! }
//! ```
//!
//! Every child is rendered through [`FormatContext::write_child`], so the container's
//! spec only reaches children it suits.

use std::collections::BTreeMap;

use crate::{Format, FormatContext, FormatError, FormatSpec, ToValue, Value, write_fill};

#[derive(Debug, Clone, Copy)]
struct Delimiters {
    open: &'static str,
    close: &'static str,
    /// Space between the delimiters and the entries in compact mode.
    padded: bool,
}

const BRACES: Delimiters = Delimiters {
    open: "{",
    close: "}",
    padded: true,
};

const PARENS: Delimiters = Delimiters {
    open: "(",
    close: ")",
    padded: false,
};

const BRACKETS: Delimiters = Delimiters {
    open: "[",
    close: "]",
    padded: false,
};

/// Shared state of all four builders. The first error sticks: later entries are
/// skipped and [`ContainerWriter::finish`] returns it.
#[derive(Debug)]
struct ContainerWriter<'c, 's, 'a> {
    ctx: &'c mut FormatContext<'s, 'a>,
    name: &'c str,
    delimiters: Delimiters,
    pretty: bool,
    indent: u32,
    entries: usize,
    result: Result<(), FormatError>,
}

impl<'c, 's, 'a> ContainerWriter<'c, 's, 'a> {
    fn new(ctx: &'c mut FormatContext<'s, 'a>, name: &'c str, delimiters: Delimiters) -> Self {
        let (pretty, indent) = ctx.spec().map_or((false, 0), |it| (it.alternate, it.indent));
        Self {
            ctx,
            name,
            delimiters,
            pretty,
            indent,
            entries: 0,
            result: Ok(()),
        }
    }

    fn indent_width(&self, level: u32) -> usize {
        level as usize * self.ctx.options().indent_size as usize
    }

    fn write_open(&mut self) -> Result<(), FormatError> {
        self.ctx.write_str(self.name)?;
        if !self.name.is_empty() && self.delimiters.padded {
            self.ctx.write_char(' ')?;
        }
        self.ctx.write_str(self.delimiters.open)
    }

    fn entry(
        &mut self,
        write: impl FnOnce(&mut FormatContext<'_, 'a>) -> Result<(), FormatError>,
    ) {
        if self.result.is_err() {
            return;
        }
        self.result = self.write_entry(write);
    }

    fn write_entry(
        &mut self,
        write: impl FnOnce(&mut FormatContext<'_, 'a>) -> Result<(), FormatError>,
    ) -> Result<(), FormatError> {
        let separator = match (self.entries, self.pretty) {
            (0, true) => "\n",
            (0, false) if self.delimiters.padded => " ",
            (0, false) => "",
            (_, true) => ",\n",
            (_, false) => ", ",
        };
        if self.entries == 0 {
            self.write_open()?;
        }
        self.ctx.write_str(separator)?;
        if self.pretty {
            let width = self.indent_width(self.indent + 1);
            write_fill(self.ctx, ' ', width)?;
        }
        self.entries += 1;
        let spec = self.entry_spec();
        write(&mut self.ctx.view(spec))
    }

    /// The spec entries see: the container's own, with the layout this builder uses, so
    /// `pretty(true)` reaches nested containers the same way the `#` flag does.
    fn entry_spec(&self) -> Option<FormatSpec> {
        match (self.ctx.spec().copied(), self.pretty) {
            (None, false) => None,
            (spec, pretty) => Some(FormatSpec {
                alternate: pretty,
                indent: self.indent,
                ..spec.unwrap_or_default()
            }),
        }
    }

    fn finish(&mut self) -> Result<(), FormatError> {
        std::mem::replace(&mut self.result, Ok(()))?;

        if self.entries == 0 {
            self.write_open()?;
        } else if self.pretty {
            self.ctx.write_char('\n')?;
            let width = self.indent_width(self.indent);
            write_fill(self.ctx, ' ', width)?;
        } else if self.delimiters.padded {
            self.ctx.write_char(' ')?;
        }
        self.ctx.write_str(self.delimiters.close)
    }
}

/// `Name { field: value, .. }`. See [`FormatContext::fmt_struct`].
#[derive(Debug)]
pub struct StructBuilder<'c, 's, 'a> {
    inner: ContainerWriter<'c, 's, 'a>,
}

impl StructBuilder<'_, '_, '_> {
    /// Force pretty (multi-line) mode on or off for this container and the ones nested
    /// in it. Call before adding fields.
    pub fn pretty(&mut self, pretty: bool) -> &mut Self {
        self.inner.pretty = pretty;
        self
    }

    pub fn field(&mut self, name: &str, value: &dyn ToValue) -> &mut Self {
        self.inner.entry(|ctx| {
            ctx.write_str(name)?;
            ctx.write_str(": ")?;
            ctx.write_child(value.to_value())
        });
        self
    }

    /// # Errors
    ///
    /// Returns the first error raised while writing the struct.
    pub fn finish(&mut self) -> Result<(), FormatError> { self.inner.finish() }
}

/// `Name(value, ..)`. See [`FormatContext::fmt_tuple`].
#[derive(Debug)]
pub struct TupleBuilder<'c, 's, 'a> {
    inner: ContainerWriter<'c, 's, 'a>,
}

impl TupleBuilder<'_, '_, '_> {
    /// Force pretty (multi-line) mode on or off for this container and the ones nested
    /// in it. Call before adding fields.
    pub fn pretty(&mut self, pretty: bool) -> &mut Self {
        self.inner.pretty = pretty;
        self
    }

    pub fn field(&mut self, value: &dyn ToValue) -> &mut Self {
        self.inner.entry(|ctx| ctx.write_child(value.to_value()));
        self
    }

    /// # Errors
    ///
    /// Returns the first error raised while writing the tuple.
    pub fn finish(&mut self) -> Result<(), FormatError> { self.inner.finish() }
}

/// `[value, ..]`. See [`FormatContext::fmt_list`].
#[derive(Debug)]
pub struct ListBuilder<'c, 's, 'a> {
    inner: ContainerWriter<'c, 's, 'a>,
}

impl ListBuilder<'_, '_, '_> {
    /// Force pretty (multi-line) mode on or off for this container and the ones nested
    /// in it. Call before adding entries.
    pub fn pretty(&mut self, pretty: bool) -> &mut Self {
        self.inner.pretty = pretty;
        self
    }

    pub fn entry(&mut self, value: &dyn ToValue) -> &mut Self {
        self.inner.entry(|ctx| ctx.write_child(value.to_value()));
        self
    }

    pub fn entries<I>(&mut self, entries: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: ToValue,
    {
        for entry in entries {
            self.entry(&entry);
        }
        self
    }

    /// # Errors
    ///
    /// Returns the first error raised while writing the list.
    pub fn finish(&mut self) -> Result<(), FormatError> { self.inner.finish() }
}

/// `{ key: value, .. }`. See [`FormatContext::fmt_dict`].
#[derive(Debug)]
pub struct DictBuilder<'c, 's, 'a> {
    inner: ContainerWriter<'c, 's, 'a>,
}

impl DictBuilder<'_, '_, '_> {
    /// Force pretty (multi-line) mode on or off for this container and the ones nested
    /// in it. Call before adding entries.
    pub fn pretty(&mut self, pretty: bool) -> &mut Self {
        self.inner.pretty = pretty;
        self
    }

    /// Keys and values are both forwarded the dict's spec, each on its own merits.
    pub fn entry(&mut self, key: &dyn ToValue, value: &dyn ToValue) -> &mut Self {
        self.inner.entry(|ctx| {
            ctx.write_child(key.to_value())?;
            ctx.write_str(": ")?;
            ctx.write_child(value.to_value())
        });
        self
    }

    pub fn entries<K, V, I>(&mut self, entries: I) -> &mut Self
    where
        K: ToValue,
        V: ToValue,
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in entries {
            self.entry(&key, &value);
        }
        self
    }

    /// # Errors
    ///
    /// Returns the first error raised while writing the dict.
    pub fn finish(&mut self) -> Result<(), FormatError> { self.inner.finish() }
}

impl<'s, 'a> FormatContext<'s, 'a> {
    #[must_use]
    pub fn fmt_struct<'c>(&'c mut self, name: &'c str) -> StructBuilder<'c, 's, 'a> {
        StructBuilder {
            inner: ContainerWriter::new(self, name, BRACES),
        }
    }

    #[must_use]
    pub fn fmt_tuple<'c>(&'c mut self, name: &'c str) -> TupleBuilder<'c, 's, 'a> {
        TupleBuilder {
            inner: ContainerWriter::new(self, name, PARENS),
        }
    }

    #[must_use]
    pub fn fmt_list(&mut self) -> ListBuilder<'_, 's, 'a> {
        ListBuilder {
            inner: ContainerWriter::new(self, "", BRACKETS),
        }
    }

    #[must_use]
    pub fn fmt_dict(&mut self) -> DictBuilder<'_, 's, 'a> {
        DictBuilder {
            inner: ContainerWriter::new(self, "", BRACES),
        }
    }
}

impl<T: ToValue> Format for Vec<T> {
    fn format(&self, f: &mut FormatContext<'_, '_>) -> Result<(), FormatError> {
        f.fmt_list().entries(self).finish()
    }
}

impl<K: ToValue, V: ToValue> Format for BTreeMap<K, V> {
    fn format(&self, f: &mut FormatContext<'_, '_>) -> Result<(), FormatError> {
        f.fmt_dict().entries(self).finish()
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Value<'_> { Value::Custom(self) }
}

impl<K: ToValue, V: ToValue> ToValue for BTreeMap<K, V> {
    fn to_value(&self) -> Value<'_> { Value::Custom(self) }
}
