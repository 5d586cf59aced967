#![no_std]
#![no_main]

use preamp_firmware as _; // memory layout + panic handler

#[defmt_test::tests]
mod tests {
    use preamp_control::remote::{self, REMOTE_A, REMOTE_B, REPEAT_CODE};
    use preamp_control::LogicalKey;
    use preamp_firmware::system::inputs::infrared::Decoder;
    use preamp_firmware::system::inputs::Infrared;
    use preamp_firmware::system::System;

    const VOLUME_UP: u32 = 83_574_975;

    fn feed(decoder: &mut Decoder, mark: bool, samples: u32) -> Option<u32> {
        let mut code = None;
        for _ in 0..samples {
            code = code.or(decoder.sample(mark));
        }
        code
    }

    fn feed_frame(decoder: &mut Decoder, value: u32) -> Option<u32> {
        let mut code = None;
        code = code.or(feed(decoder, true, 180));
        code = code.or(feed(decoder, false, 90));
        for i in (0..32).rev() {
            code = code.or(feed(decoder, true, 11));
            let space = if value & (1 << i) != 0 { 34 } else { 11 };
            code = code.or(feed(decoder, false, space));
        }
        code = code.or(feed(decoder, true, 11));
        code.or(feed(decoder, false, 500))
    }

    #[init]
    fn init() -> System {
        let cp = cortex_m::Peripherals::take().unwrap();
        let dp = daisy::pac::Peripherals::take().unwrap();

        System::init(cp, dp)
    }

    #[test]
    fn decoder_reads_frame_most_significant_bit_first() {
        let mut decoder = Decoder::new();
        feed(&mut decoder, false, 1000);
        defmt::assert_eq!(feed_frame(&mut decoder, VOLUME_UP), Some(VOLUME_UP));
        defmt::assert_eq!(feed_frame(&mut decoder, 0x8000_0001), Some(0x8000_0001));
    }

    #[test]
    fn decoder_reads_repeat_frame() {
        let mut decoder = Decoder::new();
        feed(&mut decoder, false, 1000);
        let mut code = feed(&mut decoder, true, 180);
        code = code.or(feed(&mut decoder, false, 45));
        code = code.or(feed(&mut decoder, true, 11));
        defmt::assert_eq!(code, Some(REPEAT_CODE));
    }

    #[test]
    fn decoder_drops_interrupted_frame() {
        let mut decoder = Decoder::new();
        feed(&mut decoder, false, 1000);
        feed(&mut decoder, true, 180);
        feed(&mut decoder, false, 90);
        for _ in 0..10 {
            feed(&mut decoder, true, 11);
            feed(&mut decoder, false, 34);
        }
        defmt::assert_eq!(feed(&mut decoder, false, 1000), None);
        defmt::assert_eq!(feed_frame(&mut decoder, VOLUME_UP), Some(VOLUME_UP));
    }

    #[test]
    fn receiver_recognizes_remote_button(system: &mut System) {
        defmt::info!("Press volume up on any of the remotes");
        let infrared: &mut Infrared = &mut system.infrared;
        let code = loop {
            if let Some(code) = infrared.sample() {
                if code != REPEAT_CODE {
                    break code;
                }
            }
            cortex_m::asm::delay(480_000_000 / 20_000);
        };
        defmt::info!("Received code={=u32}", code);
        defmt::assert_eq!(
            remote::translate(code, &[REMOTE_A, REMOTE_B]),
            LogicalKey::VolumeUp
        );
        defmt::info!("OK");
    }
}
