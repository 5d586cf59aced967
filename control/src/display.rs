//! State machine of the two-digit display.
//!
//! Every change is shown on the display for a moment. Once nothing happens
//! for the display window, it falls back to its resting screen: the volume
//! when playing, dashes when muted.

use crate::deadline::{Deadline, Millis};
use crate::key::LogicalKey;
use crate::segments::{self, Frame};
use crate::state::AmplifierState;

#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Display {
    screen: Screen,
    hold: Deadline,
    window: Millis,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Screen {
    /// Volume, or dashes while muted.
    Resting,
    Value(i32),
    Input,
}

impl Display {
    #[must_use]
    pub fn new(window: Millis) -> Self {
        Self {
            screen: Screen::Resting,
            hold: Deadline::default(),
            window,
        }
    }

    /// Show the screen and keep it for the whole window.
    pub fn show(&mut self, screen: Screen, now: Millis) {
        self.screen = screen;
        self.hold.start(now, self.window);
    }

    /// Keep the current screen for another window.
    pub fn restart_hold(&mut self, now: Millis) {
        self.hold.start(now, self.window);
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn tick(&mut self, now: Millis) {
        if self.hold.is_set() && self.hold.passed(now) {
            self.hold.clear();
            self.screen = Screen::Resting;
        }
    }

    #[must_use]
    pub fn frame(&self, state: &AmplifierState) -> Frame {
        self.screen.frame(state)
    }
}

impl Screen {
    /// Screen reflecting the change made by the key, if any.
    #[must_use]
    pub fn for_key(key: LogicalKey, state: &AmplifierState) -> Option<Self> {
        match key {
            LogicalKey::Mute => Some(Self::Resting),
            LogicalKey::InputSelect | LogicalKey::SelectInput(_) => Some(Self::Input),
            LogicalKey::VolumeUp | LogicalKey::VolumeDown => {
                Some(Self::Value(i32::from(state.volume)))
            }
            LogicalKey::BassUp | LogicalKey::BassDown => Some(Self::Value(i32::from(state.bass))),
            LogicalKey::TrebleUp | LogicalKey::TrebleDown => {
                Some(Self::Value(i32::from(state.treble)))
            }
            LogicalKey::Repeat | LogicalKey::Undefined => None,
        }
    }

    #[must_use]
    pub fn frame(self, state: &AmplifierState) -> Frame {
        match self {
            Self::Resting => {
                if state.muted {
                    segments::encode_muted()
                } else {
                    segments::encode_value(i32::from(state.volume))
                }
            }
            Self::Value(value) => segments::encode_value(value),
            Self::Input => segments::encode_input(state.input),
        }
    }
}
