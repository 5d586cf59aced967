//! Register model of the tone-control chip sitting behind the pre-amplifier.
//!
//! The chip is written over I2C in a single transaction. The transaction
//! starts with a write-mode byte and continues with the full set of
//! registers. Individual registers are never addressed, everything is
//! pushed at once:
//!
//! ```text
//!  [ 0x00 ] [ Att L ] [ Att R ] [ Selector ] [ Mode ] [ Bass | Treble ]
//! ```

#![cfg_attr(not(test), no_std)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::module_name_repetitions)]

pub mod attenuation;
pub mod equalizer;
pub mod mode;
pub mod registers;
pub mod selector;

pub use attenuation::Attenuation;
pub use equalizer::Equalizer;
pub use mode::{Channels, Effect, Mode};
pub use registers::{Payload, Registers};
pub use selector::Selector;

/// 7-bit I2C address of the chip.
pub const ADDRESS: u8 = 0x41;
