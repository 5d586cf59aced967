#![no_std]
#![no_main]

use preamp_firmware as _; // memory layout + panic handler

#[defmt_test::tests]
mod tests {
    use preamp_control::{AmplifierState, BusWrite};
    use preamp_firmware::system::System;
    use preamp_firmware::testlib::sample_until_encoder_is_clicked;

    #[init]
    fn init() -> System {
        let cp = cortex_m::Peripherals::take().unwrap();
        let dp = daisy::pac::Peripherals::take().unwrap();

        System::init(cp, dp)
    }

    #[test]
    fn chip_follows_written_volume(system: &mut System) {
        let quiet = AmplifierState {
            muted: false,
            volume: 10,
            ..AmplifierState::default()
        };
        let loud = AmplifierState {
            volume: 40,
            ..quiet
        };

        defmt::info!("Play audio through AUX and click the encoder");
        sample_until_encoder_is_clicked(&mut system.inputs);

        system.outputs.bus.write(&BusWrite::new(&quiet));
        defmt::info!("Click the encoder if the audio is quiet");
        sample_until_encoder_is_clicked(&mut system.inputs);

        system.outputs.bus.write(&BusWrite::new(&loud));
        defmt::info!("Click the encoder if the audio got louder");
        sample_until_encoder_is_clicked(&mut system.inputs);

        system
            .outputs
            .bus
            .write(&BusWrite::new(&AmplifierState::default()));
        defmt::info!("Click the encoder if the audio is muted");
        sample_until_encoder_is_clicked(&mut system.inputs);
    }
}
