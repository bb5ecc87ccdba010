// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Floating point presentations. All of them start from the shortest round-trip
//! [`Decimal`] of the value.
//!
//! | Type    | Without precision                          | With precision `p`             |
//! |---------|--------------------------------------------|--------------------------------|
//! | (none)  | shortest; fixed if exponent in `[-4, 16)`  | `p` significant digits, keeps  |
//! |         | with at least one fraction digit           | at least one fraction digit    |
//! | `f` `F` | shortest, at least one fraction digit      | `p` fraction digits            |
//! | `e` `E` | shortest                                   | `p` fraction digits            |
//! | `g` `G` | shortest; fixed if exponent in `[-4, 6)`   | like C `%g`                    |
//! | `%`     | `× 100`, 6 fraction digits, then `%`       | `p` fraction digits, then `%`  |

use crate::{Align, Decimal, FloatString, FormatContext, FormatError, FormatSpec,
            PrefixString, push_sign, write_padded, write_padded_with};

/// Exponent range printed in fixed notation when no type is given.
const REPR_FIXED_EXPONENTS: std::ops::Range<i32> = -4..16;
/// Exponent range printed in fixed notation by `g` without a precision.
const GENERAL_FIXED_EXPONENTS: std::ops::Range<i32> = -4..6;
const DEFAULT_GENERAL_PRECISION: usize = 6;
const DEFAULT_PERCENT_PRECISION: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FloatValue {
    F32(f32),
    F64(f64),
}

impl FloatValue {
    fn is_nan(self) -> bool {
        match self {
            FloatValue::F32(it) => it.is_nan(),
            FloatValue::F64(it) => it.is_nan(),
        }
    }

    fn is_infinite(self) -> bool {
        match self {
            FloatValue::F32(it) => it.is_infinite(),
            FloatValue::F64(it) => it.is_infinite(),
        }
    }

    fn is_sign_negative(self) -> bool {
        match self {
            FloatValue::F32(it) => it.is_sign_negative(),
            FloatValue::F64(it) => it.is_sign_negative(),
        }
    }

    fn times_100(self) -> Self {
        match self {
            FloatValue::F32(it) => FloatValue::F32(it * 100.0),
            FloatValue::F64(it) => FloatValue::F64(it * 100.0),
        }
    }

    fn shortest(self) -> Decimal {
        match self {
            FloatValue::F32(it) => Decimal::from_f32(it),
            FloatValue::F64(it) => Decimal::from_f64(it),
        }
    }
}

/// # Errors
///
/// Returns [`crate::FormatErrorKind::WriteFailed`] if the sink fails.
pub fn render_float(
    ctx: &mut FormatContext<'_, '_>,
    spec: &FormatSpec,
    value: FloatValue,
) -> Result<(), FormatError> {
    let is_percent = spec.ty == Some('%');
    let value = if is_percent { value.times_100() } else { value };
    let upper = matches!(spec.ty, Some('F' | 'G' | 'E'));

    let mut prefix = PrefixString::new();
    push_sign(&mut prefix, spec.sign, !value.is_nan() && value.is_sign_negative());

    let mut body = FloatString::new();

    if value.is_nan() || value.is_infinite() {
        #[rustfmt::skip]
        let word = match (value.is_nan(), upper) {
            (true, false)  => "nan",
            (true, true)   => "NAN",
            (false, false) => "inf",
            (false, true)  => "INF",
        };
        body.push_str(word);
        if is_percent {
            body.push('%');
        }
        // Zero padding would make the text read like a number.
        let (fill, align) = match spec.effective_fill_align(Align::Right) {
            ('0', Align::Numeric) if spec.zero && spec.align == Align::None => (' ', Align::Right),
            it => it,
        };
        return write_padded_with(ctx, spec.width, fill, align, &prefix, &body);
    }

    format_finite(&mut body, value.shortest(), spec);
    write_padded(ctx, spec, Align::Right, &prefix, &body)
}

/// Render a finite, non-negative value (the sign is handled by the caller).
pub fn format_finite(acc: &mut FloatString, mut decimal: Decimal, spec: &FormatSpec) {
    let precision = spec.precision.map(|it| it as usize);
    let alternate = spec.alternate;
    let upper = matches!(spec.ty, Some('F' | 'G' | 'E'));

    match spec.ty {
        Some('f' | 'F') => match precision {
            Some(precision) => fixed_exact(acc, decimal, precision, alternate),
            None => decimal.write_fixed(acc, decimal.fraction_digits().max(1)),
        },
        Some('%') => {
            fixed_exact(acc, decimal, precision.unwrap_or(DEFAULT_PERCENT_PRECISION), alternate);
            acc.push('%');
        }
        Some('e' | 'E') => {
            let fraction_digits = match precision {
                Some(precision) => {
                    decimal.round(precision as i64 + 1);
                    precision
                }
                None => decimal.digits.len() - 1,
            };
            decimal.write_exponential(acc, fraction_digits, alternate, upper);
        }
        Some('g' | 'G') => match precision {
            Some(precision) => general(acc, decimal, precision, alternate, upper, false),
            None if alternate => {
                general(acc, decimal, DEFAULT_GENERAL_PRECISION, true, upper, false);
            }
            None => shortest(acc, &decimal, &GENERAL_FIXED_EXPONENTS, 0, false, upper),
        },
        _ => match precision {
            Some(precision) => general(acc, decimal, precision, alternate, upper, true),
            None => shortest(acc, &decimal, &REPR_FIXED_EXPONENTS, 1, alternate, false),
        },
    }
}

/// Exactly `precision` fraction digits.
fn fixed_exact(acc: &mut FloatString, mut decimal: Decimal, precision: usize, alternate: bool) {
    decimal.round_fraction(precision);
    decimal.write_fixed(acc, precision);
    if alternate && precision == 0 {
        acc.push('.');
    }
}

/// Every shortest digit, in fixed notation when the exponent is in `fixed_exponents`
/// (with at least `min_fraction` fraction digits) and in scientific notation otherwise.
fn shortest(
    acc: &mut FloatString,
    decimal: &Decimal,
    fixed_exponents: &std::ops::Range<i32>,
    min_fraction: usize,
    alternate: bool,
    upper: bool,
) {
    if fixed_exponents.contains(&decimal.sci_exponent()) {
        let fraction_digits = decimal.fraction_digits().max(min_fraction);
        decimal.write_fixed(acc, fraction_digits);
        if alternate && fraction_digits == 0 {
            acc.push('.');
        }
    } else {
        decimal.write_exponential(acc, decimal.digits.len() - 1, alternate, upper);
    }
}

/// `precision` significant digits, fixed or scientific depending on the exponent, as
/// C's `%g`. Trailing zeros are dropped unless `alternate`. With `keep_one_fraction`
/// fixed output always has a fraction digit (the no-type rendering).
fn general(
    acc: &mut FloatString,
    mut decimal: Decimal,
    precision: usize,
    alternate: bool,
    upper: bool,
    keep_one_fraction: bool,
) {
    let precision = precision.max(1);
    decimal.round(precision as i64);
    let exponent = i64::from(decimal.sci_exponent());

    if (-4..precision as i64).contains(&exponent) {
        let exact = usize::try_from(precision as i64 - 1 - exponent).unwrap_or(0);
        let mut fraction_digits = if alternate {
            exact
        } else {
            exact.min(decimal.fraction_digits())
        };
        if keep_one_fraction {
            fraction_digits = fraction_digits.max(1);
        }
        decimal.write_fixed(acc, fraction_digits);
        if alternate && fraction_digits == 0 {
            acc.push('.');
        }
    } else {
        let fraction_digits = if alternate {
            precision - 1
        } else {
            (precision - 1).min(decimal.digits.len() - 1)
        };
        decimal.write_exponential(acc, fraction_digits, alternate, upper);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    fn render(value: f64, ty: Option<char>, precision: Option<u32>, alternate: bool) -> String {
        let spec = FormatSpec {
            ty,
            precision,
            alternate,
            ..Default::default()
        };
        let mut acc = FloatString::new();
        format_finite(&mut acc, Decimal::from_f64(value), &spec);
        acc.to_string()
    }

    #[test_case(0.1,          "0.1")]
    #[test_case(1.0,          "1.0")]
    #[test_case(1.5e-5,       "1.5e-05")]
    #[test_case(0.0001,       "0.0001")]
    #[test_case(1e15,         "1000000000000000.0")]
    #[test_case(1e16,         "1e+16")]
    #[test_case(123.456,      "123.456")]
    #[test_case(0.0,          "0.0")]
    fn test_shortest_repr(value: f64, expected: &str) {
        assert_eq!(render(value, None, None, false), expected);
    }

    #[test_case(1.2345,  2, "1.2")]
    #[test_case(1.0,     3, "1.0")]
    #[test_case(1234.5,  2, "1.2e+03")]
    #[test_case(100.0,   3, "100.0")]
    #[test_case(0.00001, 3, "1e-05")]
    fn test_no_type_with_precision(value: f64, precision: u32, expected: &str) {
        assert_eq!(render(value, None, Some(precision), false), expected);
    }

    #[test_case(0.0005, Some(3), false, "0.001")]
    #[test_case(2.34567, Some(2), false, "2.35")]
    #[test_case(2.675,  Some(2), false, "2.68")]
    #[test_case(2.5,    Some(0), false, "3")]
    #[test_case(0.5,    Some(0), true,  "1.")]
    #[test_case(0.2,    Some(0), true,  "0.")]
    #[test_case(1e20,   None,    false, "100000000000000000000.0")]
    #[test_case(0.25,   None,    false, "0.25")]
    fn test_fixed(value: f64, precision: Option<u32>, alternate: bool, expected: &str) {
        assert_eq!(render(value, Some('f'), precision, alternate), expected);
    }

    #[test_case(1234.5, None,    false, "1.2345e+03")]
    #[test_case(1234.5, Some(2), false, "1.23e+03")]
    #[test_case(9.99,   Some(1), false, "1.0e+01")]
    #[test_case(5.0,    Some(0), true,  "5.e+00")]
    #[test_case(0.0,    Some(2), false, "0.00e+00")]
    fn test_exponential(value: f64, precision: Option<u32>, alternate: bool, expected: &str) {
        assert_eq!(render(value, Some('e'), precision, alternate), expected);
    }

    #[test_case(1234.5,    None,    false, "1234.5")]
    #[test_case(1234567.0, None,    false, "1.234567e+06")]
    #[test_case(0.0001,    None,    false, "0.0001")]
    #[test_case(0.00001,   None,    false, "1e-05")]
    #[test_case(1.0,       None,    false, "1")]
    #[test_case(1234.5,    Some(3), false, "1.23e+03")]
    #[test_case(1.5,       Some(4), false, "1.5")]
    #[test_case(1.5,       Some(4), true,  "1.500")]
    #[test_case(1.0,       None,    true,  "1.00000")]
    #[test_case(0.0,       Some(0), false, "0")]
    fn test_general(value: f64, precision: Option<u32>, alternate: bool, expected: &str) {
        assert_eq!(render(value, Some('g'), precision, alternate), expected);
    }

    #[test_case('G', 1e20,   None,    "1E+20")]
    #[test_case('G', 1e-7,   None,    "1E-07")]
    #[test_case('G', 1234.5, Some(3), "1.23E+03")]
    #[test_case('G', 1234.5, None,    "1234.5")]
    #[test_case('E', 1e20,   None,    "1E+20")]
    #[test_case('E', 1234.5, Some(2), "1.23E+03")]
    fn test_uppercase_exponent(ty: char, value: f64, precision: Option<u32>, expected: &str) {
        assert_eq!(render(value, Some(ty), precision, false), expected);
    }

    #[test_case(0.125, None,    "12.500000%")]
    #[test_case(0.5,   Some(1), "50.0%")]
    #[test_case(1.0,   Some(0), "100%")]
    fn test_percent(value: f64, precision: Option<u32>, expected: &str) {
        let spec = FormatSpec {
            ty: Some('%'),
            precision,
            ..Default::default()
        };
        let mut acc = FloatString::new();
        format_finite(&mut acc, Decimal::from_f64(value * 100.0), &spec);
        assert_eq!(acc.as_str(), expected);
    }
}
