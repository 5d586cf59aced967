//! Deadline abstraction over a free running clock.

/// Milliseconds of a monotonic clock.
///
/// The clock is allowed to wrap around, comparisons are done on the
/// wrapping difference.
pub type Millis = u32;

/// Point in time after which something should happen.
///
/// This is useful when an event should keep its effect for a moment,
/// like holding a value on the display after it was changed. Starting
/// the deadline again simply moves it further.
#[derive(Debug, Default, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Deadline {
    at: Option<Millis>,
}

impl Deadline {
    pub fn start(&mut self, now: Millis, window: Millis) {
        self.at = Some(now.wrapping_add(window));
    }

    pub fn clear(&mut self) {
        self.at = None;
    }

    #[must_use]
    pub fn is_set(&self) -> bool {
        self.at.is_some()
    }

    /// True when never started, or when its time has come.
    #[must_use]
    pub fn passed(&self, now: Millis) -> bool {
        match self.at {
            Some(at) => now.wrapping_sub(at) as i32 >= 0,
            None => true,
        }
    }
}
