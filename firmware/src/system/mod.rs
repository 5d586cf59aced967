pub mod inputs;
pub mod outputs;

pub use daisy::hal;

use hal::pac::CorePeripherals;
use hal::pac::Peripherals as DevicePeripherals;
use hal::pac::TIM2;
use hal::prelude::*;
use hal::timer::{Event, Timer};
use systick_monotonic::Systick;

use inputs::encoder::Pins as EncoderPins;
use inputs::{Config as InputsConfig, Infrared, Inputs, INFRARED_SAMPLE_RATE};
use outputs::bus::Bus;
use outputs::{Config as OutputsConfig, DisplayPins, Outputs};

pub struct System {
    pub mono: Systick<1000>,
    pub inputs: Inputs,
    pub outputs: Outputs,
    pub infrared: Infrared,
    /// Periodic interrupt for sampling of the infrared receiver.
    pub sampler: Timer<TIM2>,
}

impl System {
    /// Initialize system abstraction
    ///
    /// # Panics
    ///
    /// The system can be initialized only once. It panics otherwise.
    #[must_use]
    pub fn init(mut cp: CorePeripherals, dp: DevicePeripherals) -> Self {
        enable_cache(&mut cp);

        let board = daisy::Board::take().unwrap();
        let ccdr = daisy::board_freeze_clocks!(board, dp);
        let pins = daisy::board_split_gpios!(board, ccdr, dp);

        let mono = Systick::new(cp.SYST, 480_000_000);

        let mut sampler = dp.TIM2.timer(
            INFRARED_SAMPLE_RATE.Hz(),
            ccdr.peripheral.TIM2,
            &ccdr.clocks,
        );
        sampler.listen(Event::TimeOut);

        let i2c = {
            let scl = pins.GPIO.PIN_B7.into_alternate::<4>().set_open_drain();
            let sda = pins.GPIO.PIN_B8.into_alternate::<4>().set_open_drain();
            dp.I2C1
                .i2c((scl, sda), 100.kHz(), ccdr.peripheral.I2C1, &ccdr.clocks)
        };

        let infrared = Infrared::new(pins.GPIO.PIN_B5.into_floating_input().erase());

        let inputs = Inputs::new(InputsConfig {
            encoder: EncoderPins {
                a: pins.GPIO.PIN_A8.into_pull_up_input().erase(),
                b: pins.GPIO.PIN_A9.into_pull_up_input().erase(),
                button: pins.GPIO.PIN_B10.into_pull_up_input().erase(),
            },
        });

        let outputs = Outputs::new(OutputsConfig {
            display: DisplayPins {
                segments: [
                    pins.GPIO.PIN_D1.into_push_pull_output().erase(),
                    pins.GPIO.PIN_D2.into_push_pull_output().erase(),
                    pins.GPIO.PIN_D3.into_push_pull_output().erase(),
                    pins.GPIO.PIN_D4.into_push_pull_output().erase(),
                    pins.GPIO.PIN_D5.into_push_pull_output().erase(),
                    pins.GPIO.PIN_D6.into_push_pull_output().erase(),
                    pins.GPIO.PIN_D7.into_push_pull_output().erase(),
                ],
                digits: [
                    pins.GPIO.PIN_D8.into_push_pull_output().erase(),
                    pins.GPIO.PIN_D9.into_push_pull_output().erase(),
                ],
            },
            bus: Bus::new(i2c),
        });

        Self {
            mono,
            inputs,
            outputs,
            infrared,
            sampler,
        }
    }
}

/// AN5212: Improve application performance when fetching instruction and
/// data, from both internal and external memories.
fn enable_cache(cp: &mut CorePeripherals) {
    cp.SCB.enable_icache();
    cp.SCB.enable_dcache(&mut cp.CPUID);
}
