//! Complete register set and its serialization.

use crate::attenuation::Attenuation;
use crate::equalizer::Equalizer;
use crate::mode::Mode;
use crate::selector::Selector;

/// Selects write mode, must lead every transaction.
pub const WRITE_MODE: u8 = 0x00;

/// Bytes of a single write transaction, without the address.
pub type Payload = [u8; 6];

/// All registers of the chip.
///
/// This structure is always serialized as a whole, there is no delta
/// encoding.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Registers {
    pub attenuation: Attenuation,
    pub selector: Selector,
    pub mode: Mode,
    pub equalizer: Equalizer,
}

impl Registers {
    #[must_use]
    pub fn payload(&self) -> Payload {
        [
            WRITE_MODE,
            self.attenuation.to_byte(), // Left
            self.attenuation.to_byte(), // Right
            self.selector.to_byte(),
            self.mode.to_byte(),
            self.equalizer.to_byte(),
        ]
    }
}
