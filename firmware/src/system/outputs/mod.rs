pub mod bus;
pub mod display;

use preamp_control::DesiredOutput;

use self::bus::Bus;
use self::display::Display;
pub use self::display::Pins as DisplayPins;

pub struct Outputs {
    pub display: Display,
    pub bus: Bus,
}

pub struct Config {
    pub display: DisplayPins,
    pub bus: Bus,
}

impl Outputs {
    pub(crate) fn new(config: Config) -> Self {
        Self {
            display: Display::new(config.display),
            bus: config.bus,
        }
    }

    pub fn set(&mut self, desired: &DesiredOutput) {
        self.display.set(desired.display);
        self.display.refresh();
        if let Some(write) = &desired.bus_write {
            self.bus.write(write);
        }
    }
}
