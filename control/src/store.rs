//! The central piece of the control, tying inputs, state and outputs.
//!
//! It is meant to run in a firmware loop ticking once per millisecond. On
//! every tick it takes whatever arrived from the peripherals and returns
//! what should be drawn on the display and written to the chip. However,
//! it does not touch any hardware, so it is tested on the host.

use crate::deadline::Millis;
use crate::display::{Display, Screen};
use crate::input::snapshot::Snapshot as InputSnapshot;
use crate::input::store::Store as Input;
use crate::key::LogicalKey;
use crate::log;
use crate::output::DesiredOutput;
use crate::profile::Profile;
use crate::state::AmplifierState;
use crate::sync::Synchronizer;

/// The main store of peripheral abstraction and amplifier state.
///
/// This struct takes `InputSnapshot` on its inputs, turns it into logical
/// keys, applies these on the amplifier state and reflects the result on
/// the display and the tone-control chip.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Store {
    profile: Profile,
    state: AmplifierState,
    pub(crate) input: Input,
    pub(crate) display: Display,
    pub(crate) synchronizer: Synchronizer,
}

impl Default for Store {
    fn default() -> Self {
        Self::new(Profile::default())
    }
}

impl Store {
    #[must_use]
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            state: AmplifierState::default(),
            input: Input::default(),
            display: Display::new(profile.display_window),
            synchronizer: Synchronizer::default(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &AmplifierState {
        &self.state
    }

    pub fn apply_input_snapshot(&mut self, snapshot: InputSnapshot) -> DesiredOutput {
        let now = snapshot.now;

        let keys = self.input.update(snapshot, &self.profile);
        for key in keys.iter() {
            self.apply_key(*key, now);
        }

        let bus_write = self.synchronizer.poll(&self.state);
        if bus_write.is_some() {
            log::info!("Pushing registers payload={:?}", bus_write.map(|w| w.payload));
            self.display.restart_hold(now);
        }

        self.display.tick(now);
        DesiredOutput {
            display: self.display.frame(&self.state),
            bus_write,
        }
    }

    fn apply_key(&mut self, key: LogicalKey, now: Millis) {
        if let LogicalKey::SelectInput(channel) = key {
            if !self.profile.supports(channel) {
                log::warning!("Ignoring unsupported input={:?}", channel);
                return;
            }
        }

        // Mute may have been toggled earlier in the same tick, so the gate
        // is evaluated per key.
        if !self.state.accepts(key, &self.profile) {
            return;
        }

        let previous = self.state;
        self.state = self.state.apply(key, self.profile.channels);

        if self.state.muted != previous.muted {
            if self.state.muted {
                log::info!("Muting");
            } else {
                log::info!("Unmuting");
            }
        }
        if self.state.input != previous.input {
            log::info!("Switching input={:?}", self.state.input);
        }

        if let Some(screen) = Screen::for_key(key, &self.state) {
            self.display.show(screen, now);
        }
    }
}
