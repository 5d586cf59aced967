//! Rotary encoder with a push button.
//!
//! Both quadrature lines and the button are pulled up and shorted to ground
//! when active. A step is detected when line A becomes active, the state of
//! line B at that moment tells the direction.

use preamp_control::Direction;

use super::debounced::{Debounced, Edge};
use crate::system::hal::gpio;

pub type Pin = gpio::ErasedPin<gpio::Input>;

pub struct Pins {
    pub a: Pin,
    pub b: Pin,
    pub button: Pin,
}

pub struct Encoder {
    pins: Pins,
    a: Debounced<3>,
    b: Debounced<3>,
    button: Debounced<4>,
    pub clicked: bool,
    pub rotation: Option<Direction>,
}

impl Encoder {
    #[must_use]
    pub fn new(pins: Pins) -> Self {
        Self {
            pins,
            a: Debounced::new(),
            b: Debounced::new(),
            button: Debounced::new(),
            clicked: false,
            rotation: None,
        }
    }

    /// Sample all lines, keeping only events of this very sample.
    pub fn sample(&mut self) {
        self.b.update(self.pins.b.is_low());
        let a_edge = self.a.update(self.pins.a.is_low());
        let button_edge = self.button.update(self.pins.button.is_low());

        self.rotation = match a_edge {
            Some(Edge::Rising) if self.b.active() => Some(Direction::CounterClockwise),
            Some(Edge::Rising) => Some(Direction::Clockwise),
            _ => None,
        };
        self.clicked = button_edge == Some(Edge::Rising);
    }
}
