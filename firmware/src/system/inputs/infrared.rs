//! Receiver of NEC infrared frames.
//!
//! The receiver module demodulates the 38 kHz carrier and pulls its output
//! low during marks. The line is sampled at `SAMPLE_RATE` and durations of
//! marks and spaces are measured in samples:
//!
//! ```text
//!  frame:   [ 9 ms mark ][ 4.5 ms space ][ 32 bits ][ stop mark ]
//!  repeat:  [ 9 ms mark ][ 2.25 ms space ][ stop mark ]
//!  bit:     [ 562 us mark ][ 562 us space ] = 0
//!           [ 562 us mark ][ 1687 us space ] = 1
//! ```
//!
//! Bits are shifted in from the right, the first received bit ends up as the
//! most significant one.

use core::ops::RangeInclusive;

use preamp_control::remote::REPEAT_CODE;

use crate::system::hal::gpio;

pub const SAMPLE_RATE: u32 = 20_000;

const LEAD_MARK: RangeInclusive<u16> = 160..=200;
const LEAD_SPACE: RangeInclusive<u16> = 80..=100;
const REPEAT_SPACE: RangeInclusive<u16> = 38..=52;
const BIT_MARK: RangeInclusive<u16> = 6..=16;
const ZERO_SPACE: RangeInclusive<u16> = 6..=16;
const ONE_SPACE: RangeInclusive<u16> = 28..=40;

pub type Pin = gpio::ErasedPin<gpio::Input>;

pub struct Infrared {
    pin: Pin,
    decoder: Decoder,
}

impl Infrared {
    #[must_use]
    pub fn new(pin: Pin) -> Self {
        Self {
            pin,
            decoder: Decoder::new(),
        }
    }

    /// Take a single sample, returning a code if a frame was just completed.
    pub fn sample(&mut self) -> Option<u32> {
        self.decoder.sample(self.pin.is_low())
    }
}

/// Hardware independent part of the receiver.
#[derive(Debug, defmt::Format)]
pub struct Decoder {
    mark: bool,
    duration: u16,
    state: State,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
enum State {
    Idle,
    Lead,
    Data { value: u32, bits: u8 },
}

impl Decoder {
    #[allow(clippy::new_without_default)]
    #[must_use]
    pub fn new() -> Self {
        Self {
            mark: false,
            duration: u16::MAX,
            state: State::Idle,
        }
    }

    pub fn sample(&mut self, mark: bool) -> Option<u32> {
        if mark == self.mark {
            self.duration = self.duration.saturating_add(1);
            if self.duration > *LEAD_MARK.end() {
                self.state = State::Idle;
            }
            return None;
        }

        let ended_mark = self.mark;
        let duration = self.duration;
        self.mark = mark;
        self.duration = 1;

        if ended_mark {
            self.mark_ended(duration);
            None
        } else {
            self.space_ended(duration)
        }
    }

    fn mark_ended(&mut self, duration: u16) {
        if LEAD_MARK.contains(&duration) {
            self.state = State::Lead;
        } else if !BIT_MARK.contains(&duration) {
            self.state = State::Idle;
        }
    }

    fn space_ended(&mut self, duration: u16) -> Option<u32> {
        match self.state {
            State::Idle => None,
            State::Lead => {
                if LEAD_SPACE.contains(&duration) {
                    self.state = State::Data { value: 0, bits: 0 };
                    None
                } else if REPEAT_SPACE.contains(&duration) {
                    self.state = State::Idle;
                    Some(REPEAT_CODE)
                } else {
                    self.state = State::Idle;
                    None
                }
            }
            State::Data { value, bits } => {
                let bit = if ZERO_SPACE.contains(&duration) {
                    0
                } else if ONE_SPACE.contains(&duration) {
                    1
                } else {
                    self.state = State::Idle;
                    return None;
                };
                let value = (value << 1) | bit;
                let bits = bits + 1;
                if bits == 32 {
                    self.state = State::Idle;
                    Some(value)
                } else {
                    self.state = State::Data { value, bits };
                    None
                }
            }
        }
    }
}
