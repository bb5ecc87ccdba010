// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! RGB (24-bit truecolor) color representation. Every named color resolves to one of
//! these, and `r;g;b` color clauses construct one directly.

/// Represents a color in RGB (24-bit truecolor) format.
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug, Default)]
pub struct RgbColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl RgbColor {
    #[must_use]
    pub const fn from_u8(red: u8, green: u8, blue: u8) -> Self { Self { red, green, blue } }

    /// Unpack a `0xRRGGBB` value. The top byte is ignored.
    #[must_use]
    pub const fn from_hex(value: u32) -> Self {
        Self {
            red: ((value >> 16) & 0xFF) as u8,
            green: ((value >> 8) & 0xFF) as u8,
            blue: (value & 0xFF) as u8,
        }
    }
}

impl From<(u8, u8, u8)> for RgbColor {
    fn from((red, green, blue): (u8, u8, u8)) -> Self { Self::from_u8(red, green, blue) }
}

impl From<u32> for RgbColor {
    fn from(value: u32) -> Self { Self::from_hex(value) }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case(0x00_00_00, (0, 0, 0))]
    #[test_case(0xF0_F8_FF, (240, 248, 255))]
    #[test_case(0xFF_00_00, (255, 0, 0))]
    #[test_case(0xAB_12_34_56, (0x12, 0x34, 0x56))]
    fn test_from_hex(value: u32, expected: (u8, u8, u8)) {
        assert_eq!(RgbColor::from(value), RgbColor::from(expected));
    }

    #[test]
    fn test_default_is_black() {
        assert_eq!(RgbColor::default(), RgbColor::from_u8(0, 0, 0));
    }
}
