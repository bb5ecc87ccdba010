// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Decimal digit strings for floating point rendering.
//!
//! A [`Decimal`] is the shortest digit string that reads back as the same float,
//! obtained from the standard library's shortest round-trip conversion (Grisu with a
//! Dragon fallback). Every later precision change is a decimal round-half-up on those
//! digits, so `2.675` with 2 fraction digits is `2.68` even though the nearest binary
//! value (`2.67499999...`) is below the midpoint.

use std::fmt::Write;

use smallstr::SmallString;
use smallvec::SmallVec;

/// Shortest round-trip digits never exceed 17 for `f64`.
pub const DECIMAL_DIGITS_INLINE: usize = 24;

/// Inline storage for rendered float text. Longer output (large precision, huge
/// fixed point values) moves to the heap.
pub type FloatString = SmallString<[u8; 64]>;

/// `0.d1 d2 d3 ... × 10^exp`, with `d1 != 0` unless the value is zero. Zero is the
/// single digit `0` with `exp == 1`. Trailing zeros are never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decimal {
    pub digits: SmallVec<[u8; DECIMAL_DIGITS_INLINE]>,
    pub exp: i32,
}

impl Decimal {
    #[must_use]
    pub fn zero() -> Self {
        let mut digits = SmallVec::new();
        digits.push(b'0');
        Self { digits, exp: 1 }
    }

    #[must_use]
    pub fn is_zero(&self) -> bool { self.digits.as_slice() == b"0" }

    /// Shortest digits of `|value|`. `value` must be finite.
    #[must_use]
    pub fn from_f64(value: f64) -> Self {
        let mut acc = FloatString::new();
        // Writing into a SmallString never fails.
        _ = write!(acc, "{:e}", value.abs());
        Self::from_scientific(&acc)
    }

    /// Shortest digits of `|value|` as an `f32`, so `0.1_f32` is `0.1` and not the
    /// digits of its `f64` widening.
    #[must_use]
    pub fn from_f32(value: f32) -> Self {
        let mut acc = FloatString::new();
        _ = write!(acc, "{:e}", value.abs());
        Self::from_scientific(&acc)
    }

    /// Parse `d[.ddd]e[-]x`, the output of `{:e}`.
    fn from_scientific(text: &str) -> Self {
        let (mantissa, exponent) = text.split_once('e').unwrap_or((text, "0"));
        let exponent: i32 = exponent.parse().unwrap_or(0);
        let digits: SmallVec<[u8; DECIMAL_DIGITS_INLINE]> =
            mantissa.bytes().filter(u8::is_ascii_digit).collect();

        let mut acc = Self {
            digits,
            exp: exponent + 1,
        };
        acc.normalize();
        acc
    }

    fn normalize(&mut self) {
        while self.digits.len() > 1 && self.digits.last() == Some(&b'0') {
            self.digits.pop();
        }
        if self.digits.is_empty() || self.digits.iter().all(|it| *it == b'0') {
            *self = Self::zero();
        }
    }

    /// Decimal exponent of the leading digit, as printed in scientific notation.
    #[must_use]
    pub fn sci_exponent(&self) -> i32 { if self.is_zero() { 0 } else { self.exp - 1 } }

    /// Fraction digits needed to print every stored digit in fixed notation.
    #[must_use]
    pub fn fraction_digits(&self) -> usize {
        if self.is_zero() {
            return 0;
        }
        let len = self.digits.len() as i64;
        usize::try_from(len - i64::from(self.exp)).unwrap_or(0)
    }

    /// Keep `keep` significant digits, rounding half up. `keep <= 0` may still round up
    /// to a single `1` one position higher.
    pub fn round(&mut self, keep: i64) {
        if self.is_zero() {
            return;
        }
        let Ok(keep) = usize::try_from(keep) else {
            *self = Self::zero();
            return;
        };
        if keep >= self.digits.len() {
            return;
        }

        let round_up = self.digits[keep] >= b'5';
        self.digits.truncate(keep);
        if round_up {
            let mut index = keep;
            loop {
                if index == 0 {
                    self.digits.insert(0, b'1');
                    self.exp += 1;
                    break;
                }
                index -= 1;
                if self.digits[index] == b'9' {
                    self.digits[index] = b'0';
                } else {
                    self.digits[index] += 1;
                    break;
                }
            }
        }
        self.normalize();
    }

    /// Round to `fraction_digits` digits after the decimal point.
    pub fn round_fraction(&mut self, fraction_digits: usize) {
        let keep = i64::from(self.exp) + i64::try_from(fraction_digits).unwrap_or(i64::MAX);
        self.round(keep);
    }

    /// Digit at `index`, where index 0 is the first stored digit. Positions outside the
    /// stored digits are zeros.
    fn digit_at(&self, index: i64) -> char {
        usize::try_from(index)
            .ok()
            .and_then(|index| self.digits.get(index))
            .map_or('0', |it| char::from(*it))
    }

    /// `ddd.fff` with exactly `fraction_digits` digits after the point (no point when
    /// zero). Call [`Self::round_fraction`] first to round instead of truncate.
    pub fn write_fixed(&self, acc: &mut FloatString, fraction_digits: usize) {
        let exp = i64::from(self.exp);
        if exp <= 0 {
            acc.push('0');
        } else {
            for index in 0..exp {
                acc.push(self.digit_at(index));
            }
        }
        if fraction_digits > 0 {
            acc.push('.');
            for offset in 0..fraction_digits {
                acc.push(self.digit_at(exp + offset as i64));
            }
        }
    }

    /// `d.fffe±xx` with exactly `fraction_digits` digits after the point. The exponent
    /// has a sign and at least two digits. Call [`Self::round`] first to round instead
    /// of truncate.
    pub fn write_exponential(
        &self,
        acc: &mut FloatString,
        fraction_digits: usize,
        force_point: bool,
        upper: bool,
    ) {
        acc.push(self.digit_at(0));
        if fraction_digits > 0 || force_point {
            acc.push('.');
        }
        for index in 1..=fraction_digits {
            acc.push(self.digit_at(index as i64));
        }

        acc.push(if upper { 'E' } else { 'e' });
        let exponent = self.sci_exponent();
        acc.push(if exponent < 0 { '-' } else { '+' });
        // Writing into a SmallString never fails.
        _ = write!(acc, "{:02}", exponent.unsigned_abs());
    }
}
