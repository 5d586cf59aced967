//! Writes to the tone-control chip.

use preamp_control::BusWrite;

use crate::system::hal::hal::blocking::i2c::Write;
use crate::system::hal::i2c::I2c;
use crate::system::hal::pac::I2C1;

pub struct Bus {
    i2c: I2c<I2C1>,
}

impl Bus {
    #[must_use]
    pub fn new(i2c: I2c<I2C1>) -> Self {
        Self { i2c }
    }

    /// Push the payload, without waiting for any acknowledgement of the
    /// stored values. Failures are only reported.
    pub fn write(&mut self, write: &BusWrite) {
        if let Err(error) = self.i2c.write(write.address, &write.payload) {
            defmt::warn!(
                "Failed writing to address={=u8:#x}: {}",
                write.address,
                defmt::Debug2Format(&error)
            );
        }
    }
}
