//! Bass and treble register.

/// Range of both bass and treble, in steps.
pub const RANGE: (i8, i8) = (-7, 7);

/// Equalizer register.
///
/// Each of the nibbles holds one band. The highest bit of the nibble marks
/// boost, the remaining three bits hold the magnitude:
///
/// ```text
///  7   6 5 4   3   2 1 0
/// [+] [bass ] [+] [treb ]
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Equalizer {
    bass: i8,
    treble: i8,
}

impl Equalizer {
    #[must_use]
    pub fn new(bass: i8, treble: i8) -> Self {
        Self {
            bass: bass.clamp(RANGE.0, RANGE.1),
            treble: treble.clamp(RANGE.0, RANGE.1),
        }
    }

    #[must_use]
    pub fn to_byte(self) -> u8 {
        (band_to_nibble(self.bass) << 4) | band_to_nibble(self.treble)
    }
}

fn band_to_nibble(band: i8) -> u8 {
    let boost = if band > 0 { 0b1000 } else { 0b0000 };
    boost | band.unsigned_abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_flat_it_is_all_zeros() {
        assert_eq!(Equalizer::new(0, 0).to_byte(), 0b0000_0000);
    }

    #[test]
    fn when_bass_is_boosted_it_sets_the_high_bit_and_magnitude() {
        assert_eq!(Equalizer::new(3, 0).to_byte(), 0b1011_0000);
        assert_eq!(Equalizer::new(7, 0).to_byte(), 0b1111_0000);
    }

    #[test]
    fn when_bass_is_cut_it_keeps_only_magnitude() {
        assert_eq!(Equalizer::new(-3, 0).to_byte(), 0b0011_0000);
        assert_eq!(Equalizer::new(-7, 0).to_byte(), 0b0111_0000);
    }

    #[test]
    fn treble_is_encoded_in_the_low_nibble() {
        assert_eq!(Equalizer::new(0, 5).to_byte(), 0b0000_1101);
        assert_eq!(Equalizer::new(0, -5).to_byte(), 0b0000_0101);
    }

    #[test]
    fn both_bands_are_encoded_independently() {
        assert_eq!(Equalizer::new(2, -6).to_byte(), 0b1010_0110);
    }

    #[test]
    fn when_out_of_range_it_saturates() {
        assert_eq!(Equalizer::new(100, -100), Equalizer::new(7, -7));
    }
}
