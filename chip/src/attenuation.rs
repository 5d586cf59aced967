//! Translation of volume into channel attenuation.

use libm::roundf;

// Attenuation with the lowest non-zero volume. Zero is the loudest setting.
const MAX_STEPS: f32 = 96.0;

const STEPS_PER_VOLUME: f32 = 1.6;

/// Attenuation that cuts the channel completely.
pub const FULL: u8 = 255;

/// Attenuation register of a single channel.
///
/// Both channels always receive the same value, they are not controlled
/// independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Attenuation(u8);

impl Attenuation {
    #[must_use]
    pub fn from_volume(volume: u8) -> Self {
        if volume == 0 {
            return Self(FULL);
        }
        let steps = roundf(MAX_STEPS - f32::from(volume) * STEPS_PER_VOLUME);
        Self(steps.clamp(0.0, MAX_STEPS) as u8)
    }

    #[must_use]
    pub fn to_byte(self) -> u8 {
        self.0
    }
}

impl Default for Attenuation {
    fn default() -> Self {
        Self(FULL)
    }
}
