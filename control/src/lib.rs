//! Front panel control of the pre-amplifier.
//!
//! Turns remote codes and encoder events into the amplifier state, draws
//! that state on the two-digit display and keeps the tone-control chip in
//! sync with it. None of it touches hardware, the firmware passes an
//! `InputSnapshot` in on every tick and gets `DesiredOutput` back:
//!
//! ```text
//!   [ IR receiver ]   [ Encoder ]
//!          |               |
//!          +-------+-------+
//!                  | (InputSnapshot)
//!                  V
//!   [ Store: Input -> AmplifierState -> Synchronizer ]
//!                  |                          |
//!          (Frame) |                          | (BusWrite)
//!                  V                          V
//!            [ Display ]            [ Tone-control chip ]
//! ```

#![cfg_attr(not(test), no_std)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]

mod log;

pub mod deadline;
pub mod display;
pub mod input;
pub mod key;
pub mod output;
pub mod profile;
pub mod remote;
pub mod segments;
pub mod state;
pub mod store;
pub mod sync;

pub use crate::input::snapshot::{Direction, Snapshot as InputSnapshot};
pub use crate::key::LogicalKey;
pub use crate::output::DesiredOutput;
pub use crate::profile::Profile;
pub use crate::segments::Frame;
pub use crate::state::{AmplifierState, InputChannel};
pub use crate::store::Store;
pub use crate::sync::BusWrite;
