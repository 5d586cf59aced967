//! Merge all input peripherals into a single stream of keys.

use heapless::Vec;

use super::encoder;
use super::remote::Remote;
use super::snapshot::Snapshot;
use crate::key::LogicalKey;
use crate::profile::Profile;

/// At most one key from the remote, one click and one rotation.
pub const MAX_KEYS_PER_TICK: usize = 3;

pub type Keys = Vec<LogicalKey, MAX_KEYS_PER_TICK>;

/// Stateful source of logical keys.
///
/// The remote keeps its hold state between ticks, the encoder does not
/// need any, since its events are already debounced.
#[derive(Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Store {
    pub remote: Remote,
}

impl Store {
    /// Keys of the tick, ordered as remote, encoder click, encoder rotation.
    pub fn update(&mut self, snapshot: Snapshot, profile: &Profile) -> Keys {
        let remote = snapshot.remote.and_then(|code| {
            self.remote
                .receive(code, profile.remotes, snapshot.now, profile.repeat_window)
        });
        let click = encoder::click(snapshot.encoder_clicked);
        let rotation = encoder::rotation(snapshot.encoder_rotation);

        let mut keys = Keys::new();
        for key in [remote, click, rotation].into_iter().flatten() {
            // Capacity matches the number of sources.
            let _ = keys.push(key);
        }
        keys
    }
}
