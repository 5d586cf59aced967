//! Input selector register.

/// Selected input of the chip, or muted output.
///
/// Mute is a selector value of its own, it disconnects all inputs.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Selector {
    #[default]
    Mute,
    Aux,
    Pc,
    Bluetooth,
}

impl Selector {
    #[must_use]
    pub fn to_byte(self) -> u8 {
        match self {
            Self::Aux => 0b0000_0000,
            Self::Pc => 0b0010_0000,
            Self::Bluetooth => 0b0100_0000,
            Self::Mute => 0b1110_0000,
        }
    }
}
