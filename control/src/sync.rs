//! Synchronization of the amplifier state with the tone-control chip.
//!
//! The chip cannot be read back, so the last pushed state is remembered
//! here and compared with the current one on every tick. Any difference
//! results in a push of the complete register set.

use preamp_chip::{Attenuation, Equalizer, Mode, Payload, Registers, Selector};

use crate::state::{AmplifierState, InputChannel};

/// Request to write the payload to the device at the given address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BusWrite {
    pub address: u8,
    pub payload: Payload,
}

impl BusWrite {
    #[must_use]
    pub fn new(state: &AmplifierState) -> Self {
        Self {
            address: preamp_chip::ADDRESS,
            payload: registers(state).payload(),
        }
    }
}

#[must_use]
pub fn registers(state: &AmplifierState) -> Registers {
    let selector = if state.muted {
        Selector::Mute
    } else {
        match state.input {
            InputChannel::Aux => Selector::Aux,
            InputChannel::Pc => Selector::Pc,
            InputChannel::Bluetooth => Selector::Bluetooth,
        }
    };
    Registers {
        attenuation: Attenuation::from_volume(state.volume),
        selector,
        mode: Mode::default(),
        equalizer: Equalizer::new(state.bass, state.treble),
    }
}

/// Compare the current state with the last synchronized one.
#[must_use]
pub fn sync(current: &AmplifierState, last: &AmplifierState) -> Option<BusWrite> {
    if current == last {
        None
    } else {
        Some(BusWrite::new(current))
    }
}

/// Keeper of the last state pushed to the chip.
#[derive(Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Synchronizer {
    snapshot: Option<AmplifierState>,
}

impl Synchronizer {
    /// Return a write if the state changed since the last push.
    ///
    /// Nothing was pushed after boot, so the first poll always writes.
    pub fn poll(&mut self, current: &AmplifierState) -> Option<BusWrite> {
        let write = match &self.snapshot {
            Some(last) => sync(current, last),
            None => Some(BusWrite::new(current)),
        };
        if write.is_some() {
            self.snapshot = Some(*current);
        }
        write
    }

    #[must_use]
    pub fn snapshot(&self) -> Option<&AmplifierState> {
        self.snapshot.as_ref()
    }
}
