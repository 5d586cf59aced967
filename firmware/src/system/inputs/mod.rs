//! Abstraction of the front panel inputs.
//!
//! The infrared receiver is kept separately, since it is sampled at a much
//! higher rate from a timer interrupt. Its decoded codes are passed in when
//! building the snapshot.

mod debounced;
pub mod encoder;
pub mod infrared;

use preamp_control::InputSnapshot;

use encoder::{Encoder, Pins as EncoderPins};

pub use infrared::{Infrared, SAMPLE_RATE as INFRARED_SAMPLE_RATE};

pub struct Inputs {
    pub encoder: Encoder,
}

pub struct Config {
    pub encoder: EncoderPins,
}

impl Inputs {
    pub fn new(config: Config) -> Self {
        Self {
            encoder: Encoder::new(config.encoder),
        }
    }

    pub fn sample(&mut self) {
        self.encoder.sample();
    }

    #[must_use]
    pub fn snapshot(&self, now: u32, remote: Option<u32>) -> InputSnapshot {
        InputSnapshot {
            now,
            remote,
            encoder_clicked: self.encoder.clicked,
            encoder_rotation: self.encoder.rotation,
        }
    }
}
