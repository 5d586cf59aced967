//! Output mode register.
//!
//! ```text
//! Stereo    00 | Bypass              00 | 0000
//! Lch Mono  01 | Tone                01 | 0000
//! Rch Mono  10 | Tone & Surround Hi  10 | 0000
//!              | Tone & Surround Low 11 | 0000
//! ```

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Mode {
    pub channels: Channels,
    pub effect: Effect,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channels {
    #[default]
    Stereo,
    LeftMono,
    RightMono,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Effect {
    Bypass,
    #[default]
    Tone,
    ToneSurroundHigh,
    ToneSurroundLow,
}

impl Mode {
    #[must_use]
    pub fn to_byte(self) -> u8 {
        let channels = match self.channels {
            Channels::Stereo => 0b00,
            Channels::LeftMono => 0b01,
            Channels::RightMono => 0b10,
        };
        let effect = match self.effect {
            Effect::Bypass => 0b00,
            Effect::Tone => 0b01,
            Effect::ToneSurroundHigh => 0b10,
            Effect::ToneSurroundLow => 0b11,
        };
        (channels << 6) | (effect << 4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_stereo_with_tone_enabled() {
        assert_eq!(Mode::default().to_byte(), 0b0001_0000);
    }

    #[test]
    fn channels_are_encoded_in_the_top_two_bits() {
        let mode = Mode {
            channels: Channels::RightMono,
            effect: Effect::Bypass,
        };
        assert_eq!(mode.to_byte(), 0b1000_0000);
    }

    #[test]
    fn effect_is_encoded_below_channels() {
        let mode = Mode {
            channels: Channels::LeftMono,
            effect: Effect::ToneSurroundLow,
        };
        assert_eq!(mode.to_byte(), 0b0111_0000);
    }
}
