//! Amplifier state and its transitions.

use crate::key::LogicalKey;
use crate::profile::Profile;

pub const VOLUME_RANGE: (u8, u8) = (0, 60);

pub const TONE_RANGE: (i8, i8) = (-7, 7);

/// The single authoritative record of what the amplifier should do.
///
/// Fields are always kept within their ranges. The only way this is
/// changed is through `apply`, which saturates on the range bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AmplifierState {
    pub muted: bool,
    pub input: InputChannel,
    pub volume: u8,
    pub bass: i8,
    pub treble: i8,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputChannel {
    #[default]
    Aux,
    Pc,
    Bluetooth,
}

impl Default for AmplifierState {
    fn default() -> Self {
        Self {
            muted: true,
            input: InputChannel::Aux,
            volume: 20,
            bass: 0,
            treble: 0,
        }
    }
}

impl AmplifierState {
    /// Apply the key, cycling inputs through given channels.
    #[must_use]
    pub fn apply(mut self, key: LogicalKey, channels: &[InputChannel]) -> Self {
        match key {
            LogicalKey::Mute => {
                self.muted = !self.muted;
            }
            LogicalKey::InputSelect => {
                self.input = self.input.next(channels);
            }
            LogicalKey::SelectInput(channel) => {
                if channels.contains(&channel) {
                    self.input = channel;
                }
            }
            LogicalKey::VolumeUp => {
                self.volume = adjust_volume(self.volume, 1);
            }
            LogicalKey::VolumeDown => {
                self.volume = adjust_volume(self.volume, -1);
            }
            LogicalKey::BassUp => {
                self.bass = adjust_tone(self.bass, 1);
            }
            LogicalKey::BassDown => {
                self.bass = adjust_tone(self.bass, -1);
            }
            LogicalKey::TrebleUp => {
                self.treble = adjust_tone(self.treble, 1);
            }
            LogicalKey::TrebleDown => {
                self.treble = adjust_tone(self.treble, -1);
            }
            LogicalKey::Repeat | LogicalKey::Undefined => (),
        }
        self
    }

    /// Whether the key passes the mute gate.
    ///
    /// While muted, only unmuting is allowed, and input selection if the
    /// profile permits it.
    #[must_use]
    pub fn accepts(&self, key: LogicalKey, profile: &Profile) -> bool {
        if !self.muted {
            return true;
        }
        match key {
            LogicalKey::Mute => true,
            key if key.selects_input() => profile.input_select_while_muted,
            _ => false,
        }
    }
}

impl InputChannel {
    /// The following channel, wrapping around the end of the list.
    #[must_use]
    pub fn next(self, channels: &[InputChannel]) -> Self {
        match channels.iter().position(|c| *c == self) {
            Some(i) => channels[(i + 1) % channels.len()],
            None => channels.first().copied().unwrap_or(self),
        }
    }
}

fn adjust_volume(volume: u8, delta: i8) -> u8 {
    volume
        .saturating_add_signed(delta)
        .clamp(VOLUME_RANGE.0, VOLUME_RANGE.1)
}

fn adjust_tone(tone: i8, delta: i8) -> i8 {
    tone.saturating_add(delta).clamp(TONE_RANGE.0, TONE_RANGE.1)
}
