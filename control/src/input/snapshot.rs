//! Structures used to pass the current state of hardware peripherals.

use crate::deadline::Millis;

/// Events collected by the hardware binding since the previous tick.
///
/// `Snapshot` is meant to be passed from the firmware to the control
/// package. It carries pretty raw data, with two exceptions:
///
/// 1. Infrared frames are demodulated into 32-bit codes by the caller.
/// 2. Encoder debouncing is done by the caller.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Snapshot {
    /// Time of the tick, in milliseconds of a free running clock.
    pub now: Millis,
    /// Code received from a remote, if any arrived.
    pub remote: Option<u32>,
    pub encoder_clicked: bool,
    pub encoder_rotation: Option<Direction>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}
