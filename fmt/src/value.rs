// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The argument model. A formatting call receives a slice of [`Arg`]s, each of which is
//! a borrowed, type-erased [`Value`] plus an optional name. Values never own anything:
//! they live for exactly one call.
//!
//! Primitive types become a [`Value`] through [`ToValue`]. User types implement
//! [`Format`] (how to render) and [`ToValue`] (how to become an argument):
//!
//! ```rust
//! use runfmt::{Format, FormatContext, FormatError, ToValue, Value, sprint};
//!
//! struct Vec2 { x: f32, y: f32 }
//!
//! impl Format for Vec2 {
//!     fn format(&self, f: &mut FormatContext<'_, '_>) -> Result<(), FormatError> {
//!         f.fmt_tuple("Vec2").field(&self.x).field(&self.y).finish()
//!     }
//! }
//!
//! impl ToValue for Vec2 {
//!     fn to_value(&self) -> Value<'_> { Value::Custom(self) }
//! }
//!
//! let v = Vec2 { x: 1.5, y: -2.0 };
//! assert_eq!(sprint!("{:.2f}", v).unwrap(), "Vec2(1.50, -2.00)");
//! ```

use std::{cell::OnceCell,
          collections::HashMap,
          fmt::{Debug, Formatter}};

use crate::{FormatContext, FormatError};

/// Extension point for user types. Called with the context of the placeholder the value
/// appears in; [`FormatContext::spec`] is the spec in effect.
pub trait Format {
    /// # Errors
    ///
    /// Returns a [`FormatError`] if writing fails or the spec does not apply.
    fn format(&self, f: &mut FormatContext<'_, '_>) -> Result<(), FormatError>;
}

#[derive(Clone, Copy)]
pub enum Value<'a> {
    Bool(bool),
    Int(i64),
    UInt(u64),
    F32(f32),
    F64(f64),
    CodePoint(char),
    Str(&'a str),
    Ptr(usize),
    Custom(&'a dyn Format),
}

/// The runtime kind of a [`Value`], used by spec forwarding and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Bool,
    Integer,
    Float,
    CodePoint,
    Str,
    Pointer,
    Custom,
}

impl Value<'_> {
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) | Value::UInt(_) => ValueKind::Integer,
            Value::F32(_) | Value::F64(_) => ValueKind::Float,
            Value::CodePoint(_) => ValueKind::CodePoint,
            Value::Str(_) => ValueKind::Str,
            Value::Ptr(_) => ValueKind::Pointer,
            Value::Custom(_) => ValueKind::Custom,
        }
    }

    /// The value as a signed 64 bit integer, if it is integral and fits. Used to resolve
    /// dynamic width and precision.
    #[must_use]
    pub fn as_integer(&self) -> Option<i128> {
        match *self {
            Value::Int(it) => Some(i128::from(it)),
            Value::UInt(it) => Some(i128::from(it)),
            _ => None,
        }
    }
}

impl Debug for Value<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Bool(it) => f.debug_tuple("Bool").field(it).finish(),
            Value::Int(it) => f.debug_tuple("Int").field(it).finish(),
            Value::UInt(it) => f.debug_tuple("UInt").field(it).finish(),
            Value::F32(it) => f.debug_tuple("F32").field(it).finish(),
            Value::F64(it) => f.debug_tuple("F64").field(it).finish(),
            Value::CodePoint(it) => f.debug_tuple("CodePoint").field(it).finish(),
            Value::Str(it) => f.debug_tuple("Str").field(it).finish(),
            Value::Ptr(it) => write!(f, "Ptr({it:#x})"),
            Value::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Conversion into a borrowed [`Value`]. Implemented for the primitive types; user
/// types implement it by returning [`Value::Custom`].
pub trait ToValue {
    fn to_value(&self) -> Value<'_>;
}

macro_rules! impl_to_value {
    ($variant:ident as $storage:ty => $($t:ty),+) => {
        $(
            impl ToValue for $t {
                fn to_value(&self) -> Value<'_> { Value::$variant(<$storage>::from(*self)) }
            }
        )+
    };
}

impl_to_value!(Int as i64 => i8, i16, i32, i64);
impl_to_value!(UInt as u64 => u8, u16, u32, u64);
impl_to_value!(F32 as f32 => f32);
impl_to_value!(F64 as f64 => f64);
impl_to_value!(Bool as bool => bool);
impl_to_value!(CodePoint as char => char);

impl ToValue for isize {
    #[allow(clippy::cast_possible_truncation)]
    fn to_value(&self) -> Value<'_> { Value::Int(*self as i64) }
}

impl ToValue for usize {
    #[allow(clippy::cast_possible_truncation)]
    fn to_value(&self) -> Value<'_> { Value::UInt(*self as u64) }
}

impl ToValue for str {
    fn to_value(&self) -> Value<'_> { Value::Str(self) }
}

impl ToValue for String {
    fn to_value(&self) -> Value<'_> { Value::Str(self.as_str()) }
}

impl<T: ?Sized> ToValue for *const T {
    fn to_value(&self) -> Value<'_> { Value::Ptr(self.cast::<()>() as usize) }
}

impl<T: ?Sized> ToValue for *mut T {
    fn to_value(&self) -> Value<'_> { Value::Ptr(self.cast::<()>() as usize) }
}

impl<T: ToValue + ?Sized> ToValue for &T {
    fn to_value(&self) -> Value<'_> { (**self).to_value() }
}

impl ToValue for Value<'_> {
    fn to_value(&self) -> Value<'_> { *self }
}

/// One argument of a formatting call.
#[derive(Debug, Clone, Copy)]
pub struct Arg<'a> {
    pub name: Option<&'a str>,
    pub value: Value<'a>,
}

impl<'a> Arg<'a> {
    #[must_use]
    pub fn positional(value: Value<'a>) -> Self { Self { name: None, value } }

    /// A named argument is also positional: it keeps its index in the list.
    #[must_use]
    pub fn named(name: &'a str, value: Value<'a>) -> Self {
        Self {
            name: Some(name),
            value,
        }
    }
}

impl<'a> From<Value<'a>> for Arg<'a> {
    fn from(value: Value<'a>) -> Self { Self::positional(value) }
}

/// The ordered arguments of one call. The name to index map is only built the first
/// time a placeholder refers to an argument by name.
pub struct ArgList<'a> {
    args: &'a [Arg<'a>],
    names: OnceCell<HashMap<&'a str, usize>>,
}

impl Debug for ArgList<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.args.iter()).finish()
    }
}

impl<'a> ArgList<'a> {
    #[must_use]
    pub fn new(args: &'a [Arg<'a>]) -> Self {
        Self {
            args,
            names: OnceCell::new(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize { self.args.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.args.is_empty() }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<Value<'a>> {
        self.args.get(index).map(|arg| arg.value)
    }

    /// Index of the argument called `name`. When a name is given twice the first one
    /// wins.
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        let names = self.names.get_or_init(|| {
            let mut acc = HashMap::new();
            for (index, arg) in self.args.iter().enumerate() {
                if let Some(name) = arg.name {
                    acc.entry(name).or_insert(index);
                }
            }
            acc
        });
        names.get(name).copied()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_primitives_map_to_expected_kind() {
        assert_eq!((-3_i8).to_value().kind(), ValueKind::Integer);
        assert_eq!(7_usize.to_value().kind(), ValueKind::Integer);
        assert_eq!(1.5_f32.to_value().kind(), ValueKind::Float);
        assert_eq!('x'.to_value().kind(), ValueKind::CodePoint);
        assert_eq!("s".to_value().kind(), ValueKind::Str);
        assert_eq!(String::from("s").to_value().kind(), ValueKind::Str);
        assert_eq!(true.to_value().kind(), ValueKind::Bool);
        let ptr: *const u8 = std::ptr::null();
        assert_eq!(ptr.to_value().kind(), ValueKind::Pointer);
    }

    #[test]
    fn test_as_integer() {
        assert_eq!(Value::Int(-5).as_integer(), Some(-5));
        assert_eq!(Value::UInt(u64::MAX).as_integer(), Some(i128::from(u64::MAX)));
        assert_eq!(Value::F64(1.0).as_integer(), None);
        assert_eq!(Value::Bool(true).as_integer(), None);
    }

    #[test]
    fn test_names_resolve_lazily_and_first_wins() {
        let args = [
            Arg::positional(Value::Int(1)),
            Arg::named("width", Value::Int(10)),
            Arg::named("width", Value::Int(20)),
        ];
        let list = ArgList::new(&args);
        assert!(list.names.get().is_none());
        assert_eq!(list.index_of("width"), Some(1));
        assert_eq!(list.index_of("nope"), None);
        assert!(list.names.get().is_some());
        assert_eq!(list.len(), 3);
    }
}
