//! Hold and repeat handling of remote buttons.
//!
//! While a button is held, the remote keeps sending the repeat code roughly
//! every 110 ms. Adjustments should keep going while the button is held, but
//! at a pace slow enough for the user to stop at the desired value.

use crate::deadline::Millis;
use crate::key::LogicalKey;
use crate::log;
use crate::remote::{self, CodeTable};

#[derive(Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Remote {
    last_key: LogicalKey,
    /// Time the last key was applied, either pressed or repeated.
    applied_at: Millis,
}

impl Remote {
    /// Process a received code, returning the key that should be applied.
    pub fn receive(
        &mut self,
        code: u32,
        tables: &[&CodeTable],
        now: Millis,
        window: Millis,
    ) -> Option<LogicalKey> {
        match remote::translate(code, tables) {
            LogicalKey::Repeat => self.repeat(now, window),
            LogicalKey::Undefined => {
                log::warning!("Unrecognized remote code={:?}", code);
                self.last_key = LogicalKey::Undefined;
                None
            }
            key => {
                self.last_key = key;
                self.applied_at = now;
                Some(key)
            }
        }
    }

    #[must_use]
    pub fn last_key(&self) -> LogicalKey {
        self.last_key
    }

    fn repeat(&mut self, now: Millis, window: Millis) -> Option<LogicalKey> {
        // Elapsed time stays correct across a wrap of the clock.
        let elapsed = now.wrapping_sub(self.applied_at);
        if !self.last_key.is_hold_repeatable() || elapsed < window {
            return None;
        }
        self.applied_at = now;
        Some(self.last_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::{REMOTE_A, REMOTE_B, REPEAT_CODE};

    const TABLES: &[&CodeTable] = &[REMOTE_A, REMOTE_B];
    const VOLUME_UP: u32 = 83_574_975;
    const VOLUME_DOWN_B: u32 = 2_155_809_015;
    const MUTE: u32 = 83_610_165;

    #[test]
    fn when_fresh_code_arrives_it_applies_immediately() {
        let mut remote = Remote::default();
        assert_eq!(
            remote.receive(VOLUME_UP, TABLES, 0, 200),
            Some(LogicalKey::VolumeUp)
        );
        assert_eq!(remote.last_key(), LogicalKey::VolumeUp);
    }

    #[test]
    fn when_repeats_come_fast_they_collapse_into_one_per_window() {
        let mut remote = Remote::default();
        remote.receive(VOLUME_UP, TABLES, 0, 200);

        let applied = (1..=20)
            .map(|i| i * 10)
            .filter_map(|now| remote.receive(REPEAT_CODE, TABLES, now, 200))
            .count();
        assert_eq!(applied, 1);
    }

    #[test]
    fn when_repeat_arrives_within_window_of_press_it_is_dropped() {
        let mut remote = Remote::default();
        remote.receive(VOLUME_UP, TABLES, 1000, 200);
        assert_eq!(remote.receive(REPEAT_CODE, TABLES, 1110, 200), None);
        assert_eq!(
            remote.receive(REPEAT_CODE, TABLES, 1220, 200),
            Some(LogicalKey::VolumeUp)
        );
        assert_eq!(remote.receive(REPEAT_CODE, TABLES, 1330, 200), None);
        assert_eq!(
            remote.receive(REPEAT_CODE, TABLES, 1440, 200),
            Some(LogicalKey::VolumeUp)
        );
    }

    #[test]
    fn when_distinct_codes_come_fast_all_of_them_apply() {
        let mut remote = Remote::default();
        assert!(remote.receive(VOLUME_UP, TABLES, 0, 200).is_some());
        assert!(remote.receive(VOLUME_DOWN_B, TABLES, 10, 200).is_some());
        assert!(remote.receive(VOLUME_UP, TABLES, 20, 200).is_some());
    }

    #[test]
    fn when_toggle_is_held_it_applies_only_once() {
        let mut remote = Remote::default();
        assert_eq!(
            remote.receive(MUTE, TABLES, 0, 200),
            Some(LogicalKey::Mute)
        );
        for now in [300, 600, 900] {
            assert_eq!(remote.receive(REPEAT_CODE, TABLES, now, 200), None);
        }
    }

    #[test]
    fn when_repeat_follows_unknown_code_nothing_applies() {
        let mut remote = Remote::default();
        remote.receive(VOLUME_UP, TABLES, 0, 200);
        assert_eq!(remote.receive(12_345, TABLES, 10, 200), None);
        assert_eq!(remote.last_key(), LogicalKey::Undefined);
        assert_eq!(remote.receive(REPEAT_CODE, TABLES, 500, 200), None);
    }

    #[test]
    fn when_repeat_arrives_long_after_the_press_it_applies() {
        let mut remote = Remote::default();
        remote.receive(VOLUME_UP, TABLES, 0, 200);
        assert_eq!(
            remote.receive(REPEAT_CODE, TABLES, (1 << 31) + 500, 200),
            Some(LogicalKey::VolumeUp)
        );
    }

    #[test]
    fn when_clock_wraps_around_during_hold_repeats_keep_their_pace() {
        let mut remote = Remote::default();
        remote.receive(VOLUME_UP, TABLES, u32::MAX - 50, 200);
        assert_eq!(remote.receive(REPEAT_CODE, TABLES, 100, 200), None);
        assert_eq!(
            remote.receive(REPEAT_CODE, TABLES, 160, 200),
            Some(LogicalKey::VolumeUp)
        );
    }

    #[test]
    fn when_repeat_arrives_before_any_press_nothing_applies() {
        let mut remote = Remote::default();
        assert_eq!(remote.receive(REPEAT_CODE, TABLES, 0, 200), None);
    }
}
