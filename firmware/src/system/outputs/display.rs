//! Two-digit seven-segment display.
//!
//! Both digits share segment lines, only one digit is lit at a time. Calling
//! `refresh` often enough, once per millisecond, switches between them fast
//! enough to look steady.

use preamp_control::Frame;

use crate::system::hal::gpio;

pub type Pin = gpio::ErasedPin<gpio::Output>;

pub struct Pins {
    /// Segments A to G, active high.
    pub segments: [Pin; 7],
    /// Common of the tens and ones digit, active high.
    pub digits: [Pin; 2],
}

pub struct Display {
    pins: Pins,
    frame: Frame,
    lit: usize,
}

impl Display {
    #[must_use]
    pub fn new(pins: Pins) -> Self {
        let mut display = Self {
            pins,
            frame: Frame::default(),
            lit: 0,
        };
        display.blank();
        display
    }

    pub fn set(&mut self, frame: Frame) {
        self.frame = frame;
    }

    /// Light the other digit.
    pub fn refresh(&mut self) {
        self.lit = (self.lit + 1) % 2;
        let pattern = if self.lit == 0 {
            self.frame.tens
        } else {
            self.frame.ones
        };

        self.blank();
        for (i, segment) in self.pins.segments.iter_mut().enumerate() {
            segment.set_state((pattern & (1 << i) != 0).into());
        }
        self.pins.digits[self.lit].set_high();
    }

    fn blank(&mut self) {
        for digit in &mut self.pins.digits {
            digit.set_low();
        }
    }
}
