#![no_std]
#![no_main]

use preamp_firmware as _; // memory layout + panic handler

#[defmt_test::tests]
mod tests {
    use preamp_control::segments::{encode_input, encode_muted, encode_value};
    use preamp_control::{Frame, InputChannel};
    use preamp_firmware::system::System;
    use preamp_firmware::testlib::sample_until_encoder_is_clicked;

    #[init]
    fn init() -> System {
        let cp = cortex_m::Peripherals::take().unwrap();
        let dp = daisy::pac::Peripherals::take().unwrap();

        System::init(cp, dp)
    }

    fn show_until_clicked(system: &mut System, frame: Frame) {
        system.outputs.display.set(frame);
        loop {
            system.outputs.display.refresh();
            system.inputs.sample();
            if system.inputs.encoder.clicked {
                break;
            }
            cortex_m::asm::delay(480_000_000 / 1000);
        }
    }

    #[test]
    fn display_shows_all_screens(system: &mut System) {
        defmt::info!("Click the encoder");
        sample_until_encoder_is_clicked(&mut system.inputs);

        defmt::info!("Click the encoder if the display is dark");
        show_until_clicked(system, Frame::default());

        defmt::info!("Click the encoder if the display shows 88");
        show_until_clicked(system, encode_value(88));

        defmt::info!("Click the encoder if the display shows -7");
        show_until_clicked(system, encode_value(-7));

        defmt::info!("Click the encoder if the display shows two dashes");
        show_until_clicked(system, encode_muted());

        defmt::info!("Click the encoder if the display shows AU");
        show_until_clicked(system, encode_input(InputChannel::Aux));
    }
}
