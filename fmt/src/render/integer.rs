// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Integer rendering without heap allocation. Digits are written back to front into a
//! fixed array ([`DigitBuffer`]) whose start index is tracked explicitly. Base 10 emits
//! two digits per division using the [`DIGIT_PAIRS`] table.

use smallstr::SmallString;

use crate::{Align, FormatContext, FormatError, FormatSpec, Sign, write_padded};

/// Large enough for 64 binary digits, and for 20 decimal digits with 6 group
/// separators of up to 4 bytes each.
pub const DIGIT_BUFFER_SIZE: usize = 72;

/// Room for a sign and a two character base prefix.
pub type PrefixString = SmallString<[u8; 8]>;

#[rustfmt::skip]
pub const DIGIT_PAIRS: &[u8; 200] = b"\
    0001020304050607080910111213141516171819\
    2021222324252627282930313233343536373839\
    4041424344454647484950515253545556575859\
    6061626364656667686970717273747576777879\
    8081828384858687888990919293949596979899";

const LOWER_DIGITS: &[u8; 16] = b"0123456789abcdef";
const UPPER_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Digits laid out at the end of a fixed array. Valid bytes are `bytes[start..]`.
#[derive(Debug, Clone)]
pub struct DigitBuffer {
    bytes: [u8; DIGIT_BUFFER_SIZE],
    start: usize,
}

impl Default for DigitBuffer {
    fn default() -> Self {
        Self {
            bytes: [0; DIGIT_BUFFER_SIZE],
            start: DIGIT_BUFFER_SIZE,
        }
    }
}

impl DigitBuffer {
    #[must_use]
    pub fn len(&self) -> usize { DIGIT_BUFFER_SIZE - self.start }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.len() == 0 }

    fn push_front(&mut self, byte: u8) {
        self.start -= 1;
        self.bytes[self.start] = byte;
    }

    fn push_front_slice(&mut self, slice: &[u8]) {
        let start = self.start - slice.len();
        self.bytes[start..self.start].copy_from_slice(slice);
        self.start = start;
    }

    /// Only ASCII digits and whole UTF-8 encoded separators are ever pushed.
    #[must_use]
    pub fn as_str(&self) -> &str { std::str::from_utf8(&self.bytes[self.start..]).unwrap_or("") }
}

/// Number of digits of `value` in `base` (2, 8, 10 or 16), computed without a
/// conversion pass. Zero has one digit.
#[must_use]
pub fn count_digits(value: u64, base: u32) -> usize {
    if base == 10 {
        return value.checked_ilog10().map_or(1, |it| it as usize + 1);
    }
    let bits_per_digit = base.trailing_zeros();
    let used_bits = u64::BITS - value.leading_zeros();
    (used_bits.div_ceil(bits_per_digit) as usize).max(1)
}

/// Render `value` in `base`. Hex letters follow `upper`.
#[must_use]
pub fn format_digits(value: u64, base: u32, upper: bool) -> DigitBuffer {
    let mut acc = DigitBuffer::default();
    let count = count_digits(value, base);

    if base == 10 {
        let mut rest = value;
        while rest >= 100 {
            let pair = (rest % 100) as usize * 2;
            acc.push_front_slice(&DIGIT_PAIRS[pair..pair + 2]);
            rest /= 100;
        }
        if rest >= 10 {
            let pair = rest as usize * 2;
            acc.push_front_slice(&DIGIT_PAIRS[pair..pair + 2]);
        } else {
            acc.push_front(b'0' + rest as u8);
        }
    } else {
        let table = if upper { UPPER_DIGITS } else { LOWER_DIGITS };
        let shift = base.trailing_zeros();
        let mask = u64::from(base - 1);
        let mut rest = value;
        for _ in 0..count {
            acc.push_front(table[(rest & mask) as usize]);
            rest >>= shift;
        }
    }

    debug_assert_eq!(acc.len(), count);
    acc
}

/// Base 10 with `separator` between every group of 3 digits, counting from the right.
#[must_use]
pub fn format_grouped(value: u64, separator: char) -> DigitBuffer {
    let mut encoded = [0_u8; 4];
    let separator = separator.encode_utf8(&mut encoded).as_bytes();

    let mut acc = DigitBuffer::default();
    let mut rest = value;
    let mut written = 0_usize;
    loop {
        if written > 0 && written.is_multiple_of(3) {
            acc.push_front_slice(separator);
        }
        acc.push_front(b'0' + (rest % 10) as u8);
        written += 1;
        rest /= 10;
        if rest == 0 {
            break;
        }
    }
    acc
}

/// Render an integer given as sign and magnitude, so `i64::MIN` needs no special case.
///
/// # Errors
///
/// Returns [`crate::FormatErrorKind::WriteFailed`] if the sink fails.
pub fn render_integer(
    ctx: &mut FormatContext<'_, '_>,
    spec: &FormatSpec,
    magnitude: u64,
    negative: bool,
) -> Result<(), FormatError> {
    #[rustfmt::skip]
    let (base, upper, base_prefix) = match spec.ty {
        Some('b') => (2,  false, "0b"),
        Some('B') => (2,  true,  "0B"),
        Some('o') => (8,  false, "0"),
        Some('x') => (16, false, "0x"),
        Some('X') => (16, true,  "0X"),
        _         => (10, false, ""),
    };

    let mut prefix = PrefixString::new();
    push_sign(&mut prefix, spec.sign, negative);
    if spec.alternate {
        // Octal only needs the marker when the digits don't already start with 0.
        if spec.ty != Some('o') || magnitude != 0 {
            prefix.push_str(base_prefix);
        }
    }

    let digits = if spec.ty == Some('n') {
        format_grouped(magnitude, ctx.options().thousands_separator)
    } else {
        format_digits(magnitude, base, upper)
    };

    write_padded(ctx, spec, Align::Right, &prefix, digits.as_str())
}

pub fn push_sign(prefix: &mut PrefixString, sign: Sign, negative: bool) {
    match (negative, sign) {
        (true, _) => prefix.push('-'),
        (false, Sign::Plus) => prefix.push('+'),
        (false, Sign::Space) => prefix.push(' '),
        (false, Sign::None | Sign::Minus) => {}
    }
}
