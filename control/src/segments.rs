//! Encoding of values into seven-segment patterns.
//!
//! ```text
//!    --A--
//! F |     | B
//!   |--G--|
//! E |     | C
//!    --D--
//! ```
//!
//! Segment A is the least significant bit of the pattern, G is the seventh.
//! The highest bit is unused.

use crate::state::InputChannel;

/// All segments off.
pub const BLANK: u8 = 0b0000_0000;

/// Only the middle segment lit.
pub const DASH: u8 = 0b0100_0000;

pub const DIGITS: [u8; 10] = [
    0b0011_1111, // 0
    0b0000_0110, // 1
    0b0101_1011, // 2
    0b0100_1111, // 3
    0b0110_0110, // 4
    0b0110_1101, // 5
    0b0111_1101, // 6
    0b0000_0111, // 7
    0b0111_1111, // 8
    0b0110_0111, // 9
];

/// Patterns of both digits of the display.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    pub tens: u8,
    pub ones: u8,
}

impl Frame {
    #[must_use]
    pub const fn new(tens: u8, ones: u8) -> Self {
        Self { tens, ones }
    }
}

/// Show a number between -9 and 99. Values outside are clamped.
#[must_use]
pub fn encode_value(value: i32) -> Frame {
    let value = value.clamp(-9, 99);
    let magnitude = value.unsigned_abs() as usize;
    if value < 0 {
        Frame::new(DASH, DIGITS[magnitude])
    } else if value < 10 {
        Frame::new(BLANK, DIGITS[magnitude])
    } else {
        Frame::new(DIGITS[magnitude / 10], DIGITS[magnitude % 10])
    }
}

#[must_use]
pub fn encode_muted() -> Frame {
    Frame::new(DASH, DASH)
}

/// Two letters naming the channel.
#[must_use]
pub fn encode_input(channel: InputChannel) -> Frame {
    match channel {
        InputChannel::Aux => Frame::new(0b0111_0111, 0b0011_1110), // AU
        InputChannel::Pc => Frame::new(0b0111_0011, 0b0011_1001),  // PC
        InputChannel::Bluetooth => Frame::new(0b0111_1111, 0b0011_1000), // BL
    }
}
