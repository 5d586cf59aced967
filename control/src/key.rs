//! Logical keys, independent of the remote or encoder that produced them.

use crate::state::InputChannel;

/// Normalized command.
///
/// Both remotes and the rotary encoder are translated into these, so
/// the rest of the control does not need to know which physical device
/// was used.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LogicalKey {
    #[default]
    Undefined,
    Repeat,
    Mute,
    VolumeUp,
    VolumeDown,
    BassUp,
    BassDown,
    TrebleUp,
    TrebleDown,
    InputSelect,
    SelectInput(InputChannel),
}

impl LogicalKey {
    /// Keys that keep applying while their remote button is held.
    ///
    /// Toggles and input selection fire once per press.
    #[must_use]
    pub fn is_hold_repeatable(self) -> bool {
        matches!(
            self,
            Self::VolumeUp
                | Self::VolumeDown
                | Self::BassUp
                | Self::BassDown
                | Self::TrebleUp
                | Self::TrebleDown
        )
    }

    #[must_use]
    pub fn selects_input(self) -> bool {
        matches!(self, Self::InputSelect | Self::SelectInput(_))
    }
}
