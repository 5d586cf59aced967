//! Hardware variants of the amplifier.
//!
//! The amplifier is built in several variants, differing in the number of
//! inputs and in the remotes shipped with them. Instead of duplicating the
//! logic, each variant is described by a `Profile`.

use crate::deadline::Millis;
use crate::remote::{CodeTable, REMOTE_A, REMOTE_B};
use crate::state::InputChannel;

/// Configuration of one amplifier variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Profile {
    /// Code tables of all recognized remotes.
    pub remotes: &'static [&'static CodeTable],
    /// Supported inputs, in the order they are cycled through.
    pub channels: &'static [InputChannel],
    /// Allow changing input while muted.
    pub input_select_while_muted: bool,
    /// Minimal time between two repeats of a held remote button.
    pub repeat_window: Millis,
    /// How long a changed value stays on the display before it returns
    /// to volume.
    pub display_window: Millis,
}

impl Profile {
    pub const THREE_INPUTS: Self = Self {
        remotes: &[REMOTE_A, REMOTE_B],
        channels: &[InputChannel::Aux, InputChannel::Pc, InputChannel::Bluetooth],
        input_select_while_muted: false,
        repeat_window: 200,
        display_window: 2000,
    };

    pub const TWO_INPUTS: Self = Self {
        remotes: &[REMOTE_A, REMOTE_B],
        channels: &[InputChannel::Aux, InputChannel::Pc],
        input_select_while_muted: false,
        repeat_window: 200,
        display_window: 2000,
    };

    #[must_use]
    pub fn supports(&self, channel: InputChannel) -> bool {
        self.channels.contains(&channel)
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::THREE_INPUTS
    }
}
