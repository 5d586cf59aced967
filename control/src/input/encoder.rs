//! Translation of the rotary encoder into logical keys.

use super::snapshot::Direction;
use crate::key::LogicalKey;

/// Click of the encoder toggles mute.
#[must_use]
pub fn click(clicked: bool) -> Option<LogicalKey> {
    clicked.then_some(LogicalKey::Mute)
}

/// Rotation of the encoder moves the volume.
#[must_use]
pub fn rotation(direction: Option<Direction>) -> Option<LogicalKey> {
    direction.map(|direction| match direction {
        Direction::Clockwise => LogicalKey::VolumeUp,
        Direction::CounterClockwise => LogicalKey::VolumeDown,
    })
}
